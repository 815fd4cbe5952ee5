use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductFilter};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::{ProductCategoryEntity, ProductEntity, group_by_product};
use crate::errors::map_sqlx_error;
use crate::query::{contains_pattern, order_by};

/// Column list for the `product` table.
const COLUMNS: &str = "p.id, p.name, p.description, p.price, p.image_url";

const SORT_COLUMNS: &[(&str, &str)] = &[("id", "p.id"), ("name", "p.name"), ("price", "p.price")];

/// Both filters are optional; a product matches the category filter when any
/// of its categories does, and is still listed once.
const FILTER: &str = r"
    WHERE ($1::text IS NULL OR p.name ILIKE $1)
      AND ($2::text IS NULL OR EXISTS (
            SELECT 1
            FROM product_category pc
            JOIN category c ON c.id = pc.category_id
            WHERE pc.product_id = p.id AND c.name ILIKE $2))";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_products(
        &self,
        entities: Vec<ProductEntity>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = sqlx::query_as::<_, ProductCategoryEntity>(
            "SELECT pc.product_id, c.id AS category_id, c.name AS category_name \
             FROM product_category pc \
             JOIN category c ON c.id = pc.category_id \
             WHERE pc.product_id = ANY($1) \
             ORDER BY pc.product_id, c.id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut categories = group_by_product(links);
        Ok(entities
            .into_iter()
            .map(|entity| {
                let linked = categories.remove(&entity.id).unwrap_or_default();
                entity.into_domain(linked)
            })
            .collect())
    }

    /// Replaces the product's category links inside an open transaction.
    async fn set_categories_inner(
        tx: &mut Transaction<'_, Postgres>,
        product_id: i64,
        category_ids: &[i64],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM product_category WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut **tx)
            .await?;

        sqlx::query(
            "INSERT INTO product_category (product_id, category_id) \
             SELECT $1, UNNEST($2::bigint[])",
        )
        .bind(product_id)
        .bind(category_ids)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM product p WHERE p.id = $1");
        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        self.load_products(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_page(
        &self,
        filter: &ProductFilter,
        request: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let name_pattern = filter.product_name.as_deref().map(contains_pattern);
        let category_pattern = filter.category_name.as_deref().map(contains_pattern);

        let count_query = format!("SELECT COUNT(*) FROM product p {FILTER}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(&name_pattern)
            .bind(&category_pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let query = format!(
            "SELECT {COLUMNS} FROM product p {FILTER} {} LIMIT $3 OFFSET $4",
            order_by(&request.sort, SORT_COLUMNS, "p.name", "p.id")
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(&name_pattern)
            .bind(&category_pattern)
            .bind(i64::from(request.size))
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let products = self.load_products(entities).await?;
        Ok(Page::new(products, request, total.max(0) as u64))
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let query = format!(
            "INSERT INTO product AS p (name, description, price, image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        Self::set_categories_inner(&mut tx, entity.id, &product.category_ids())
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(entity.into_domain(product.categories.clone()))
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<Product, RepositoryError> {
        // Dropping `tx` on any early return rolls back, keeping the old links.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let query = format!(
            "UPDATE product AS p \
             SET name = $2, description = $3, price = $4, image_url = $5 \
             WHERE p.id = $1 \
             RETURNING {COLUMNS}"
        );
        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Self::set_categories_inner(&mut tx, entity.id, &product.category_ids())
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(entity.into_domain(product.categories.clone()))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::CategoryEntity;
use crate::errors::map_sqlx_error;
use crate::query::order_by;

const SORT_COLUMNS: &[(&str, &str)] = &[("id", "id"), ("name", "name")];

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name FROM category WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Category>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name FROM category WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_page(&self, request: &PageRequest) -> Result<Page<Category>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let query = format!(
            "SELECT id, name FROM category {} LIMIT $1 OFFSET $2",
            order_by(&request.sort, SORT_COLUMNS, "name", "id")
        );
        let entities = sqlx::query_as::<_, CategoryEntity>(&query)
            .bind(i64::from(request.size))
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            request,
            total.max(0) as u64,
        ))
    }

    async fn insert(&self, name: &str) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "INSERT INTO category (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, category: &Category) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(
            "UPDATE category SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(category.id)
        .bind(&category.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // The join table restricts deletes, so a linked category fails with 23503.
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
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

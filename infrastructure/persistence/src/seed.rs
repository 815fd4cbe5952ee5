use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

pub const SEED_CATEGORIES: &[&str] = &[
    "Electronics",
    "Apparel & Accessories",
    "Pet Supplies",
    "Home",
    "Books",
    "Games",
    "Health",
    "Toys",
    "Food",
];

pub struct SeedProduct {
    pub name: &'static str,
    pub description: &'static str,
    /// Price in cents.
    pub price_cents: i64,
    pub categories: &'static [&'static str],
}

pub const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Computer",
        description: "A new innovative computer with the latest technologies",
        price_cents: 54000,
        categories: &["Electronics"],
    },
    SeedProduct {
        name: "X-Burger",
        description: "A delicious X-Burger",
        price_cents: 2099,
        categories: &["Food"],
    },
    SeedProduct {
        name: "Buzz Lightyear",
        description: "A toy for children to play with",
        price_cents: 4810,
        categories: &["Toys"],
    },
    SeedProduct {
        name: "Organic Dog Food",
        description: "Premium dry food made with natural ingredients for dogs.",
        price_cents: 7000,
        categories: &["Pet Supplies"],
    },
    SeedProduct {
        name: "Smart Home Speaker",
        description: "Voice-controlled smart speaker with premium sound and integrated virtual assistant",
        price_cents: 12999,
        categories: &["Electronics", "Home"],
    },
    SeedProduct {
        name: "Pet Feeder",
        description: "Programmable pet food dispenser with portion control and meal scheduling",
        price_cents: 8599,
        categories: &["Electronics", "Home", "Pet Supplies"],
    },
];

/// Populates an empty catalog with demo categories and products.
///
/// Returns `false` without touching anything when categories already exist.
/// Everything is inserted in a single transaction.
pub async fn seed_catalog(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM category")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "Catalog already populated, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let mut category_ids: HashMap<&str, i64> = HashMap::new();
    for name in SEED_CATEGORIES {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO category (name) VALUES ($1) RETURNING id",
        )
        .bind(*name)
        .fetch_one(&mut *tx)
        .await?;
        category_ids.insert(*name, id);
    }

    for product in SEED_PRODUCTS {
        let product_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO product (name, description, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(product.name)
        .bind(product.description)
        .bind(Decimal::new(product.price_cents, 2))
        .fetch_one(&mut *tx)
        .await?;

        let linked: Vec<i64> = product
            .categories
            .iter()
            .filter_map(|name| category_ids.get(name).copied())
            .collect();

        sqlx::query(
            "INSERT INTO product_category (product_id, category_id) \
             SELECT $1, UNNEST($2::bigint[])",
        )
        .bind(product_id)
        .bind(&linked)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        categories = SEED_CATEGORIES.len(),
        products = SEED_PRODUCTS.len(),
        "Catalog seeded"
    );
    Ok(true)
}

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::FromRow;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self, categories: Vec<Category>) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.image_url,
            categories,
        )
    }
}

/// One `product_category` link joined with its category name.
#[derive(Debug, FromRow)]
pub struct ProductCategoryEntity {
    pub product_id: i64,
    pub category_id: i64,
    pub category_name: String,
}

/// Groups link rows by product id, keeping row order within each product.
pub fn group_by_product(rows: Vec<ProductCategoryEntity>) -> HashMap<i64, Vec<Category>> {
    let mut grouped: HashMap<i64, Vec<Category>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.product_id)
            .or_default()
            .push(Category::from_repository(row.category_id, row.category_name));
    }
    grouped
}

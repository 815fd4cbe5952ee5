use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::errors::ProductError;
use crate::domain::category::model::Category;
use crate::domain::shared::validation::Violations;

/// Currency every stored price is expressed in.
pub const BASE_CURRENCY: &str = "BRL";

/// Properties a product page can be sorted by.
pub const PRODUCT_SORT_PROPERTIES: &[&str] = &["id", "name", "price"];
pub const PRODUCT_DEFAULT_SORT: &str = "name";

/// Column limits of the `product` table.
pub const PRODUCT_NAME_MAX_LENGTH: usize = 150;
pub const PRODUCT_DESCRIPTION_MAX_LENGTH: usize = 255;
/// `price` is stored as `NUMERIC(12, 2)`.
pub const PRICE_SCALE: u32 = 2;

/// Smallest accepted price (0.01).
pub fn minimum_price() -> Decimal {
    Decimal::new(1, 2)
}

/// Largest price a `NUMERIC(12, 2)` column holds (9 999 999 999.99).
pub fn maximum_price() -> Decimal {
    Decimal::new(999_999_999_999, PRICE_SCALE)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub categories: Vec<Category>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: String,
        price: Decimal,
        image_url: Option<String>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image_url,
            categories,
        }
    }

    pub fn category_ids(&self) -> BTreeSet<i64> {
        self.categories.iter().map(|c| c.id).collect()
    }
}

/// Product fields as submitted by a caller for insert or update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProps {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category_ids: Vec<i64>,
}

impl ProductProps {
    /// Checks every field and reports all violations together.
    pub fn validate(&self) -> Result<(), ProductError> {
        let mut violations = Violations::new();

        violations.require_not_blank("name", &self.name, "The field 'name' cannot be empty");
        violations.require_max_length(
            "name",
            &self.name,
            PRODUCT_NAME_MAX_LENGTH,
            "The field 'name' cannot exceed 150 characters",
        );
        violations.require_not_blank(
            "description",
            &self.description,
            "The field 'description' cannot be empty",
        );
        violations.require_max_length(
            "description",
            &self.description,
            PRODUCT_DESCRIPTION_MAX_LENGTH,
            "The field 'description' cannot exceed 255 characters",
        );
        if self.price < minimum_price() {
            violations.push("price", "The price must be greater than zero");
        } else if self.price > maximum_price() {
            violations.push("price", "The price cannot exceed 9999999999.99");
        } else if self.price.normalize().scale() > PRICE_SCALE {
            violations.push("price", "The price cannot have more than two decimal places");
        }
        if self.category_ids.is_empty() {
            violations.push("categoryIds", "The product needs one or more categories");
        }

        violations.into_result().map_err(ProductError::Validation)
    }

    /// Pairs the validated fields with their resolved categories.
    pub fn into_new_product(self, categories: Vec<Category>) -> NewProduct {
        NewProduct {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            image_url: self
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            categories,
        }
    }
}

/// Validated product data with its categories already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub categories: Vec<Category>,
}

impl NewProduct {
    pub fn category_ids(&self) -> Vec<i64> {
        self.categories.iter().map(|c| c.id).collect()
    }
}

/// Optional, case-insensitive substring filters for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub product_name: Option<String>,
    pub category_name: Option<String>,
}

impl ProductFilter {
    /// Blank filters are treated as absent.
    pub fn new(product_name: Option<String>, category_name: Option<String>) -> Self {
        fn normalize(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            product_name: normalize(product_name),
            category_name: normalize(category_name),
        }
    }
}

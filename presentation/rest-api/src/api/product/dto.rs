use poem_openapi::Object;
use rust_decimal::Decimal;

use business::domain::product::model::{Product, ProductProps};
use business::domain::product::quotation::ProductQuotation;
use business::domain::shared::pagination::Page;

use crate::api::category::dto::CategoryResponse;

/// Product fields for insert and update.
///
/// Missing fields fall back to empty values so they are reported through the
/// regular field validation.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub description: String,
    /// Price in BRL, at least 0.01
    #[oai(default)]
    pub price: Decimal,
    pub image_url: Option<String>,
    /// Ids of existing categories, one or more
    #[oai(default)]
    pub category_ids: Vec<i64>,
}

impl From<ProductRequest> for ProductProps {
    fn from(request: ProductRequest) -> Self {
        ProductProps {
            name: request.name,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
            category_ids: request.category_ids,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub categories: Vec<CategoryResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            categories: product.categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub content: Vec<ProductResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        Self {
            content: page.content.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductQuotationResponse {
    pub product_id: i64,
    pub product_name: String,
    #[oai(rename = "originalPriceBRL")]
    pub original_price_brl: Decimal,
    pub converted_price: Decimal,
    pub currency_code: String,
}

impl From<ProductQuotation> for ProductQuotationResponse {
    fn from(quotation: ProductQuotation) -> Self {
        Self {
            product_id: quotation.product_id,
            product_name: quotation.product_name,
            original_price_brl: quotation.original_price,
            converted_price: quotation.converted_price,
            currency_code: quotation.currency_code.to_string(),
        }
    }
}

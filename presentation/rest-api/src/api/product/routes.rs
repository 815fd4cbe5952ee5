use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::model::{
    PRODUCT_DEFAULT_SORT, PRODUCT_SORT_PROPERTIES, ProductFilter,
};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_all_simple::{
    GetAllProductsSimpleParams, GetAllProductsSimpleUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::quote::{QuoteProductParams, QuoteProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::pagination::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::message::StandardMessageResponse;
use crate::api::pagination::page_request;
use crate::api::product::dto::{
    ProductPageResponse, ProductQuotationResponse, ProductRequest, ProductResponse,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_all_simple_use_case: Arc<dyn GetAllProductsSimpleUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    quote_use_case: Arc<dyn QuoteProductUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_all_simple_use_case: Arc<dyn GetAllProductsSimpleUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        quote_use_case: Arc<dyn QuoteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_all_simple_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            quote_use_case,
        }
    }
}

fn product_page_request(
    page: Option<u32>,
    size: Option<u32>,
    sort: Option<&str>,
    path: &str,
) -> Result<PageRequest, Json<ErrorResponse>> {
    page_request(page, size, sort, PRODUCT_SORT_PROPERTIES, PRODUCT_DEFAULT_SORT)
        .map_err(|violation| Json(ErrorResponse::validation(vec![violation], path)))
}

/// Product management API
///
/// Endpoints for managing products, their categories, and price quotations.
#[OpenApi]
impl ProductApi {
    /// Get the product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, req: &Request, id: Path<i64>) -> GetProductResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Paged list of products, optionally filtered by a case-insensitive
    /// substring of the product name and/or of any of its category names.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        req: &Request,
        #[oai(name = "productName")] product_name: Query<Option<String>>,
        #[oai(name = "categoryName")] category_name: Query<Option<String>>,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        sort: Query<Option<String>>,
    ) -> ListProductsResponse {
        let path = req.uri().path();
        let page = match product_page_request(page.0, size.0, sort.0.as_deref(), path) {
            Ok(page) => page,
            Err(json) => return ListProductsResponse::BadRequest(json),
        };

        let params = GetAllProductsParams {
            filter: ProductFilter::new(product_name.0, category_name.0),
            page,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products (simple paginated)
    ///
    /// Paged list of all products without filters.
    #[oai(path = "/products/all", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products_simple(
        &self,
        req: &Request,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        sort: Query<Option<String>>,
    ) -> ListProductsResponse {
        let path = req.uri().path();
        let page = match product_page_request(page.0, size.0, sort.0.as_deref(), path) {
            Ok(page) => page,
            Err(json) => return ListProductsResponse::BadRequest(json),
        };

        match self
            .get_all_simple_use_case
            .execute(GetAllProductsSimpleParams { page })
            .await
        {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Insert a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        req: &Request,
        body: Json<ProductRequest>,
    ) -> CreateProductResponse {
        let path = req.uri().path();
        let params = CreateProductParams {
            product: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => {
                let location = format!("{}/{}", path.trim_end_matches('/'), product.id);
                CreateProductResponse::Created(Json(product.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    404 => CreateProductResponse::NotFound(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Overwrites every field and replaces the whole category set.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: id.0,
            product: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, req: &Request, id: Path<i64>) -> DeleteProductResponse {
        let path = req.uri().path();

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(Json(StandardMessageResponse::deleted(
                "Product", id.0, path,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    409 => DeleteProductResponse::Conflict(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product price in another currency
    ///
    /// Converts the BRL price with the live rate from the exchange-rate
    /// provider. `currencyCode` is a three-letter code such as `USD`.
    #[oai(
        path = "/products/quotation/:product_id",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn quote_product(
        &self,
        req: &Request,
        product_id: Path<i64>,
        #[oai(name = "currencyCode")] currency_code: Query<String>,
    ) -> QuoteProductResponse {
        let params = QuoteProductParams {
            product_id: product_id.0,
            currency_code: currency_code.0,
        };

        match self.quote_use_case.execute(params).await {
            Ok(quotation) => QuoteProductResponse::Ok(Json(quotation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => QuoteProductResponse::BadRequest(json),
                    404 => QuoteProductResponse::NotFound(json),
                    503 => QuoteProductResponse::ServiceUnavailable(json),
                    _ => QuoteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<StandardMessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum QuoteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductQuotationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::IntoEndpoint;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use rust_decimal::Decimal;
    use serde_json::json;

    use business::domain::category::model::Category;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use business::domain::product::quotation::{CurrencyCode, ProductQuotation};
    use business::domain::shared::pagination::Page;

    use super::*;
    use crate::api::error::with_json_errors;
    use crate::api::test_support::{
        MockCreateProduct, MockDeleteProduct, MockGetAllProducts, MockGetAllProductsSimple,
        MockGetProductById, MockQuoteProduct, MockUpdateProduct,
    };

    #[derive(Default)]
    struct Mocks {
        create: MockCreateProduct,
        get_all: MockGetAllProducts,
        get_all_simple: MockGetAllProductsSimple,
        get_by_id: MockGetProductById,
        update: MockUpdateProduct,
        delete: MockDeleteProduct,
        quote: MockQuoteProduct,
    }

    fn client(mocks: Mocks) -> TestClient<impl poem::Endpoint> {
        let api = ProductApi::new(
            Arc::new(mocks.create),
            Arc::new(mocks.get_all),
            Arc::new(mocks.get_all_simple),
            Arc::new(mocks.get_by_id),
            Arc::new(mocks.update),
            Arc::new(mocks.delete),
            Arc::new(mocks.quote),
        );
        TestClient::new(with_json_errors(OpenApiService::new(api, "test", "1.0").into_endpoint()))
    }

    fn speaker(id: i64) -> Product {
        Product::from_repository(
            id,
            "Smart Home Speaker".to_string(),
            "Voice-controlled smart speaker".to_string(),
            Decimal::new(12999, 2),
            None,
            vec![
                Category::from_repository(1, "Electronics".to_string()),
                Category::from_repository(4, "Home".to_string()),
            ],
        )
    }

    #[tokio::test]
    async fn should_return_product_with_categories() {
        let mut mocks = Mocks::default();
        mocks
            .get_by_id
            .expect_execute()
            .returning(|params| Ok(speaker(params.id)));

        let resp = client(mocks).get("/products/12").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let product = json.value().object();
        product.get("id").assert_i64(12);
        product.get("categories").array().assert_len(2);
    }

    #[tokio::test]
    async fn should_create_product_from_request_body() {
        let mut mocks = Mocks::default();
        mocks
            .create
            .expect_execute()
            .withf(|params| {
                params.product.category_ids == vec![1, 4]
                    && params.product.price == Decimal::new(12999, 2)
                    && params.product.image_url.is_none()
            })
            .returning(|_| Ok(speaker(30)));

        let resp = client(mocks)
            .post("/products")
            .body_json(&json!({
                "name": "Smart Home Speaker",
                "description": "Voice-controlled smart speaker",
                "price": "129.99",
                "categoryIds": [1, 4]
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        resp.assert_header("Location", "/products/30");
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_category() {
        let mut mocks = Mocks::default();
        mocks
            .create
            .expect_execute()
            .returning(|_| Err(ProductError::CategoryNotFound(999)));

        let resp = client(mocks)
            .post("/products")
            .body_json(&json!({
                "name": "Computer",
                "description": "A new computer",
                "price": "540.00",
                "categoryIds": [999]
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("Category not found with id 999, operation failed");
    }

    #[tokio::test]
    async fn should_reject_malformed_json_with_error_body() {
        let mut mocks = Mocks::default();
        mocks.create.expect_execute().never();

        let resp = client(mocks)
            .post("/products")
            .content_type("application/json")
            .body("{not json")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("path")
            .assert_string("/products");
    }

    #[tokio::test]
    async fn should_forward_filters_to_use_case() {
        let mut mocks = Mocks::default();
        mocks
            .get_all
            .expect_execute()
            .withf(|params| {
                params.filter.product_name.is_none()
                    && params.filter.category_name.as_deref() == Some("HOME")
                    && params.page.sort.property == "price"
            })
            .returning(|params| Ok(Page::new(vec![speaker(5)], &params.page, 1)));

        let resp = client(mocks)
            .get("/products")
            .query("categoryName", &"HOME")
            .query("sort", &"price,desc")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("content").array().assert_len(1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_product() {
        let mut mocks = Mocks::default();
        mocks
            .update
            .expect_execute()
            .withf(|params| params.id == 77 && params.product.category_ids == vec![3])
            .returning(|params| Err(ProductError::NotFound(params.id)));

        let resp = client(mocks)
            .put("/products/77")
            .body_json(&json!({
                "name": "Pet Feeder",
                "description": "Programmable dispenser",
                "price": 85.99,
                "categoryIds": [3]
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("Product not found with id 77");
    }

    #[tokio::test]
    async fn should_route_all_to_simple_listing() {
        let mut mocks = Mocks::default();
        mocks.get_by_id.expect_execute().never();
        mocks
            .get_all_simple
            .expect_execute()
            .times(1)
            .returning(|params| Ok(Page::new(vec![], &params.page, 0)));

        let resp = client(mocks).get("/products/all").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("totalElements").assert_i64(0);
    }

    #[tokio::test]
    async fn should_return_quotation() {
        let mut mocks = Mocks::default();
        mocks
            .quote
            .expect_execute()
            .withf(|params| params.product_id == 1 && params.currency_code == "usd")
            .returning(|params| {
                Ok(ProductQuotation {
                    product_id: params.product_id,
                    product_name: "Computer".to_string(),
                    original_price: Decimal::new(10000, 2),
                    converted_price: Decimal::new(2000, 2),
                    currency_code: CurrencyCode::parse(&params.currency_code).unwrap(),
                })
            });

        let resp = client(mocks)
            .get("/products/quotation/1")
            .query("currencyCode", &"usd")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("productId").assert_i64(1);
        body.get("currencyCode").assert_string("USD");
    }

    #[tokio::test]
    async fn should_return_service_unavailable_when_rates_fail() {
        let mut mocks = Mocks::default();
        mocks.quote.expect_execute().returning(|_| {
            Err(ProductError::ExchangeRateUnavailable(
                "Failed to connect to external currency API: timeout".to_string(),
            ))
        });

        let resp = client(mocks)
            .get("/products/quotation/1")
            .query("currencyCode", &"EUR")
            .send()
            .await;

        resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let json = resp.json().await;
        json.value()
            .object()
            .get("error")
            .assert_string("Service Unavailable");
    }

    #[tokio::test]
    async fn should_require_currency_code() {
        let mut mocks = Mocks::default();
        mocks.quote.expect_execute().never();

        let resp = client(mocks).get("/products/quotation/1").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_confirm_product_deletion() {
        let mut mocks = Mocks::default();
        mocks.delete.expect_execute().returning(|_| Ok(()));

        let resp = client(mocks).delete("/products/4").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("Product ID: 4 was deleted successfully");
    }
}

use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::category::model::{CATEGORY_DEFAULT_SORT, CATEGORY_SORT_PROPERTIES};
use business::domain::category::use_cases::create::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use business::domain::category::use_cases::delete::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use business::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::update::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};

use crate::api::category::dto::{CategoryPageResponse, CategoryRequest, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::message::StandardMessageResponse;
use crate::api::pagination::page_request;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Category management API
#[OpenApi]
impl CategoryApi {
    /// Get category by ID
    ///
    /// Retrieve a single category by its unique identifier.
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_by_id(&self, req: &Request, id: Path<i64>) -> GetCategoryResponse {
        match self
            .get_by_id_use_case
            .execute(GetCategoryByIdParams { id: id.0 })
            .await
        {
            Ok(category) => GetCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    404 => GetCategoryResponse::NotFound(json),
                    _ => GetCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List all categories
    ///
    /// Get a paged list of all product categories. `page` is 0-indexed and
    /// `sort` has the form `property[,asc|desc]` (default `name`).
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(
        &self,
        req: &Request,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        sort: Query<Option<String>>,
    ) -> ListCategoriesResponse {
        let path = req.uri().path();
        let page = match page_request(
            page.0,
            size.0,
            sort.0.as_deref(),
            CATEGORY_SORT_PROPERTIES,
            CATEGORY_DEFAULT_SORT,
        ) {
            Ok(page) => page,
            Err(violation) => {
                return ListCategoriesResponse::BadRequest(Json(ErrorResponse::validation(
                    vec![violation],
                    path,
                )));
            }
        };

        match self
            .get_all_use_case
            .execute(GetAllCategoriesParams { page })
            .await
        {
            Ok(page) => ListCategoriesResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => ListCategoriesResponse::BadRequest(json),
                    _ => ListCategoriesResponse::InternalError(json),
                }
            }
        }
    }

    /// Insert a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        req: &Request,
        body: Json<CategoryRequest>,
    ) -> CreateCategoryResponse {
        let path = req.uri().path();
        let params = CreateCategoryParams { name: body.0.name };

        match self.create_use_case.execute(params).await {
            Ok(category) => {
                let location = format!("{}/{}", path.trim_end_matches('/'), category.id);
                CreateCategoryResponse::Created(Json(category.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Update the category
    ///
    /// Renames an existing category.
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<CategoryRequest>,
    ) -> UpdateCategoryResponse {
        let params = UpdateCategoryParams {
            id: id.0,
            name: body.0.name,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    409 => UpdateCategoryResponse::Conflict(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Fails with 409 while any product is still linked to the category.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(&self, req: &Request, id: Path<i64>) -> DeleteCategoryResponse {
        let path = req.uri().path();

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteCategoryResponse::Ok(Json(StandardMessageResponse::deleted(
                "Category", id.0, path,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response(path);
                match status.as_u16() {
                    404 => DeleteCategoryResponse::NotFound(json),
                    409 => DeleteCategoryResponse::Conflict(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
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
pub enum DeleteCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<StandardMessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

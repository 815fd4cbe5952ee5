use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Endpoints for managing product categories
    Categories,
    Products,
}

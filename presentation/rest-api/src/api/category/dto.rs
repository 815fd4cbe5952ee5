use poem_openapi::Object;

use business::domain::category::model::Category;
use business::domain::shared::pagination::Page;

#[derive(Debug, Clone, Object)]
pub struct CategoryRequest {
    /// Unique category name
    #[oai(default)]
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CategoryPageResponse {
    pub content: Vec<CategoryResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Category>> for CategoryPageResponse {
    fn from(page: Page<Category>) -> Self {
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

use business::domain::shared::pagination::{PageRequest, Sort};
use business::domain::shared::validation::FieldViolation;

/// Builds a page request from raw query parameters.
///
/// A missing `sort` falls back to `default_sort` ascending.
pub fn page_request(
    page: Option<u32>,
    size: Option<u32>,
    sort: Option<&str>,
    allowed: &[&str],
    default_sort: &str,
) -> Result<PageRequest, FieldViolation> {
    let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Sort::parse(raw, allowed)?,
        None => Sort::asc(default_sort),
    };
    Ok(PageRequest::new(page, size, sort))
}

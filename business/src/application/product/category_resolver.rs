use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::product::errors::ProductError;

/// Turns requested category ids into category records before a product write.
///
/// Runs ahead of any mutation so a missing id aborts the operation with
/// nothing persisted.
pub struct CategoryResolver {
    pub category_repository: Arc<dyn CategoryRepository>,
}

impl CategoryResolver {
    /// Resolves the distinct ids in `ids`, ordered by id.
    ///
    /// Fails with `CategoryNotFound` carrying the smallest missing id.
    pub async fn resolve(&self, ids: &[i64]) -> Result<Vec<Category>, ProductError> {
        let requested: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        let mut found = self.category_repository.get_by_ids(&requested).await?;
        found.sort_by_key(|c| c.id);
        found.dedup_by_key(|c| c.id);

        let known: BTreeSet<i64> = found.iter().map(|c| c.id).collect();
        if let Some(missing) = requested.iter().find(|id| !known.contains(id)) {
            return Err(ProductError::CategoryNotFound(*missing));
        }

        Ok(found)
    }
}

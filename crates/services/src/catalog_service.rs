use std::sync::Arc;

use quiz_core::model::{CategoryId, SetId};
use storage::repository::{CategoryRecord, QuestionBankRepository, SetRecord, StorageError};

use crate::error::CatalogError;

/// Read-only queries behind the set and category pickers.
#[derive(Clone)]
pub struct CatalogService {
    bank: Arc<dyn QuestionBankRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(bank: Arc<dyn QuestionBankRepository>) -> Self {
        Self { bank }
    }

    /// List every question set in bank order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn list_sets(&self) -> Result<Vec<SetRecord>, CatalogError> {
        let sets = self.bank.list_sets().await?;
        Ok(sets)
    }

    /// Fetch one set.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSet` when the set does not exist.
    pub async fn get_set(&self, set: SetId) -> Result<SetRecord, CatalogError> {
        self.bank.get_set(set).await.map_err(|err| match err {
            StorageError::NotFound => CatalogError::UnknownSet(set),
            other => other.into(),
        })
    }

    /// List the categories of a set, with their pool sizes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSet` when the set does not exist.
    pub async fn list_categories(&self, set: SetId) -> Result<Vec<CategoryRecord>, CatalogError> {
        self.bank.list_categories(set).await.map_err(|err| match err {
            StorageError::NotFound => CatalogError::UnknownSet(set),
            other => other.into(),
        })
    }

    /// Fetch the listing row for a single category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSet` or `CatalogError::UnknownCategory` for bad ids.
    pub async fn get_category(
        &self,
        set: SetId,
        category: CategoryId,
    ) -> Result<CategoryRecord, CatalogError> {
        let categories = self.list_categories(set).await?;
        categories
            .into_iter()
            .find(|c| c.id == category)
            .ok_or(CatalogError::UnknownCategory { set, category })
    }

    pub(crate) fn bank(&self) -> &Arc<dyn QuestionBankRepository> {
        &self.bank
    }
}

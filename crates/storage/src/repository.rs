use async_trait::async_trait;
use quiz_core::model::{
    BankError, Category, CategoryId, QuestionBank, QuestionError, SetId,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by question bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid question #{index} in {set:?} / {category:?}: {source}")]
    InvalidQuestion {
        set: String,
        category: String,
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Bank(#[from] BankError),
}

/// Listing row for a question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRecord {
    pub id: SetId,
    pub name: String,
    pub category_count: usize,
}

/// Listing row for a category within a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub set_id: SetId,
    pub id: CategoryId,
    pub name: String,
    pub question_count: usize,
}

/// Read-only access to the question bank.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// List every set in bank order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    async fn list_sets(&self) -> Result<Vec<SetRecord>, StorageError>;

    /// Fetch one set's listing row.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the set does not exist.
    async fn get_set(&self, set: SetId) -> Result<SetRecord, StorageError>;

    /// List the categories of a set in bank order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the set does not exist.
    async fn list_categories(&self, set: SetId) -> Result<Vec<CategoryRecord>, StorageError>;

    /// Fetch a category with its full question pool.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the set or category does not exist.
    async fn get_category(
        &self,
        set: SetId,
        category: CategoryId,
    ) -> Result<Category, StorageError>;
}

/// Question bank held entirely in memory.
#[derive(Clone, Default)]
pub struct InMemoryBank {
    bank: Arc<QuestionBank>,
}

impl InMemoryBank {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

#[async_trait]
impl QuestionBankRepository for InMemoryBank {
    async fn list_sets(&self) -> Result<Vec<SetRecord>, StorageError> {
        Ok(self
            .bank
            .iter_sets()
            .map(|(id, set)| SetRecord {
                id,
                name: set.name().to_owned(),
                category_count: set.categories().len(),
            })
            .collect())
    }

    async fn get_set(&self, set: SetId) -> Result<SetRecord, StorageError> {
        let found = self.bank.set(set).ok_or(StorageError::NotFound)?;
        Ok(SetRecord {
            id: set,
            name: found.name().to_owned(),
            category_count: found.categories().len(),
        })
    }

    async fn list_categories(&self, set: SetId) -> Result<Vec<CategoryRecord>, StorageError> {
        let found = self.bank.set(set).ok_or(StorageError::NotFound)?;
        Ok(found
            .iter_categories()
            .map(|(id, category)| CategoryRecord {
                set_id: set,
                id,
                name: category.name().to_owned(),
                question_count: category.len(),
            })
            .collect())
    }

    async fn get_category(
        &self,
        set: SetId,
        category: CategoryId,
    ) -> Result<Category, StorageError> {
        self.bank
            .category(set, category)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

/// Bank source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub bank: Arc<dyn QuestionBankRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(bank: QuestionBank) -> Self {
        let bank: Arc<dyn QuestionBankRepository> = Arc::new(InMemoryBank::new(bank));
        Self { bank }
    }
}

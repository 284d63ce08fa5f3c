use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{CategoryId, SetId};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("set name cannot be empty")]
    EmptySetName,

    #[error("category name cannot be empty (set {set:?})")]
    EmptyCategoryName { set: String },

    #[error("duplicate set name {name:?}")]
    DuplicateSet { name: String },

    #[error("duplicate category {category:?} in set {set:?}")]
    DuplicateCategory { set: String, category: String },

    #[error("too many entries for a bank index: {len}")]
    TooLarge { len: usize },
}

/// A named list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    questions: Vec<Question>,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A named group of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    name: String,
    categories: Vec<Category>,
}

impl QuestionSet {
    /// Creates a set, rejecting blank or repeated category names.
    ///
    /// # Errors
    ///
    /// Returns `BankError` for an empty set name, an empty category name, or a duplicate category.
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Result<Self, BankError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BankError::EmptySetName);
        }
        if u32::try_from(categories.len()).is_err() {
            return Err(BankError::TooLarge {
                len: categories.len(),
            });
        }
        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(BankError::EmptyCategoryName { set: name });
            }
            if !seen.insert(category.name.as_str()) {
                return Err(BankError::DuplicateCategory {
                    set: name.clone(),
                    category: category.name.clone(),
                });
            }
        }
        Ok(Self { name, categories })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.index())
    }

    /// Iterate categories together with their positional ids.
    pub fn iter_categories(&self) -> impl Iterator<Item = (CategoryId, &Category)> {
        (0_u32..).zip(self.categories.iter()).map(|(i, c)| (CategoryId::new(i), c))
    }
}

/// The static, read-only question bank loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    sets: Vec<QuestionSet>,
}

impl QuestionBank {
    /// Creates a bank, rejecting repeated set names.
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateSet` if two sets share a name.
    pub fn new(sets: Vec<QuestionSet>) -> Result<Self, BankError> {
        if u32::try_from(sets.len()).is_err() {
            return Err(BankError::TooLarge { len: sets.len() });
        }
        let mut seen = HashSet::with_capacity(sets.len());
        for set in &sets {
            if !seen.insert(set.name.as_str()) {
                return Err(BankError::DuplicateSet {
                    name: set.name.clone(),
                });
            }
        }
        Ok(Self { sets })
    }

    #[must_use]
    pub fn sets(&self) -> &[QuestionSet] {
        &self.sets
    }

    #[must_use]
    pub fn set(&self, id: SetId) -> Option<&QuestionSet> {
        self.sets.get(id.index())
    }

    #[must_use]
    pub fn category(&self, set: SetId, category: CategoryId) -> Option<&Category> {
        self.set(set).and_then(|s| s.category(category))
    }

    pub fn iter_sets(&self) -> impl Iterator<Item = (SetId, &QuestionSet)> {
        (0_u32..).zip(self.sets.iter()).map(|(i, s)| (SetId::new(i), s))
    }

    /// Total number of questions across every set and category.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sets
            .iter()
            .flat_map(|s| s.categories.iter())
            .map(Category::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

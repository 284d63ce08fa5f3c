use quiz_core::model::QuizSettings;
use services::{CategoryRecord, SetRecord};

use crate::routes::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCardVm {
    pub route: Route,
    pub name: String,
    pub detail: String,
}

impl From<&SetRecord> for SetCardVm {
    fn from(record: &SetRecord) -> Self {
        Self {
            route: Route::Categories {
                set: record.id.value(),
            },
            name: record.name.clone(),
            detail: plural(record.category_count, "category", "categories"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCardVm {
    pub route: Route,
    pub name: String,
    pub detail: String,
    pub is_empty: bool,
}

impl From<&CategoryRecord> for CategoryCardVm {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            route: Route::Quiz {
                set: record.set_id.value(),
                category: record.id.value(),
            },
            name: record.name.clone(),
            detail: plural(record.question_count, "question", "questions"),
            is_empty: record.question_count == 0,
        }
    }
}

#[must_use]
pub fn map_set_cards(records: &[SetRecord]) -> Vec<SetCardVm> {
    records.iter().map(SetCardVm::from).collect()
}

#[must_use]
pub fn map_category_cards(records: &[CategoryRecord]) -> Vec<CategoryCardVm> {
    records.iter().map(CategoryCardVm::from).collect()
}

/// Subtitle of the category picker.
#[must_use]
pub fn quiz_size_label(settings: QuizSettings) -> String {
    format!(
        "Each quiz draws up to {} random questions.",
        settings.quiz_size()
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

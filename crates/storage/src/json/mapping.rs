use std::fmt;
use std::marker::PhantomData;

use quiz_core::model::{Category, Question, QuestionError, QuestionSet};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::repository::StorageError;

use super::{DroppedQuestion, LoadReport, ValidationPolicy};

fn ser<E: fmt::Display>(context: &str, e: E) -> StorageError {
    StorageError::Serialization(format!("{context}: {e}"))
}

/// On-disk shape of one question.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    #[serde(alias = "prompt")]
    question: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    answer: String,
}

/// Object entries in file order, repeated keys included.
///
/// Unlike `serde_json::Map`, a repeated key is kept, so duplicate set and category
/// names reach the `QuestionBank` / `QuestionSet` checks.
#[derive(Debug)]
pub(crate) struct Entries<T>(pub Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// `{ set: { category: [question] } }`
pub(crate) type BankEntries = Entries<Entries<Value>>;

/// `{ category: [question] }`
pub(crate) type SetEntries = Entries<Value>;

pub(crate) fn parse<'a, T: Deserialize<'a>>(context: &str, json: &'a str) -> Result<T, StorageError> {
    serde_json::from_str(json).map_err(|e| ser(context, e))
}

/// Map `{ "<category>": [question, ...] }` into a validated set.
pub(crate) fn map_set(
    set_name: &str,
    categories: SetEntries,
    policy: ValidationPolicy,
    report: &mut LoadReport,
) -> Result<QuestionSet, StorageError> {
    let mut mapped = Vec::with_capacity(categories.0.len());
    for (category_name, value) in categories.0 {
        let context = format!("{set_name} / {category_name}");
        let records: Vec<QuestionRecord> =
            serde_json::from_value(value).map_err(|e| ser(&context, e))?;
        let questions = map_questions(set_name, &category_name, records, policy, report)?;
        report.categories += 1;
        mapped.push(Category::new(category_name, questions));
    }
    report.sets += 1;
    Ok(QuestionSet::new(set_name, mapped)?)
}

fn map_questions(
    set_name: &str,
    category_name: &str,
    records: Vec<QuestionRecord>,
    policy: ValidationPolicy,
    report: &mut LoadReport,
) -> Result<Vec<Question>, StorageError> {
    let mut questions = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match Question::new(record.question, record.options, record.answer) {
            Ok(question) => questions.push(question),
            Err(reason) => reject(set_name, category_name, index, reason, policy, report)?,
        }
    }
    report.questions += questions.len();
    Ok(questions)
}

fn reject(
    set_name: &str,
    category_name: &str,
    index: usize,
    reason: QuestionError,
    policy: ValidationPolicy,
    report: &mut LoadReport,
) -> Result<(), StorageError> {
    match policy {
        ValidationPolicy::Strict => Err(StorageError::InvalidQuestion {
            set: set_name.to_owned(),
            category: category_name.to_owned(),
            index,
            source: reason,
        }),
        ValidationPolicy::Lenient => {
            tracing::warn!(
                set = set_name,
                category = category_name,
                index,
                %reason,
                "dropping invalid question"
            );
            report.dropped.push(DroppedQuestion {
                set: set_name.to_owned(),
                category: category_name.to_owned(),
                index,
                reason,
            });
            Ok(())
        }
    }
}

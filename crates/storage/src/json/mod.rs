//! JSON question bank loader.
//!
//! Accepts either a single bank file shaped `{ set: { category: [question] } }` or a
//! directory of set files shaped `{ category: [question] }`, where each file stem is
//! the set name. Key order in the files is kept as bank order.

use std::fs;
use std::path::{Path, PathBuf};

use quiz_core::model::{QuestionBank, QuestionError};

use crate::repository::{Storage, StorageError};

mod mapping;

/// What to do with a question that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Abort loading on the first invalid question.
    Strict,
    /// Drop invalid questions, log a warning, and record them in the report.
    #[default]
    Lenient,
}

/// A question skipped by a lenient load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedQuestion {
    pub set: String,
    pub category: String,
    pub index: usize,
    pub reason: QuestionError,
}

/// Counts gathered while loading a bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub sets: usize,
    pub categories: usize,
    pub questions: usize,
    pub dropped: Vec<DroppedQuestion>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBankLoader {
    policy: ValidationPolicy,
}

impl JsonBankLoader {
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Load a bank file, or a directory of set files.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the path cannot be read, `StorageError::Serialization`
    /// for malformed JSON, `StorageError::InvalidQuestion` in strict mode, and
    /// `StorageError::Bank` for duplicate names.
    pub fn load_path(&self, path: &Path) -> Result<(QuestionBank, LoadReport), StorageError> {
        let metadata = fs::metadata(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (bank, report) = if metadata.is_dir() {
            self.load_dir(path)?
        } else {
            let json = read_to_string(path)?;
            self.load_bank_str(&json)?
        };
        tracing::info!(
            path = %path.display(),
            sets = report.sets,
            categories = report.categories,
            questions = report.questions,
            dropped = report.dropped.len(),
            "question bank loaded"
        );
        Ok((bank, report))
    }

    /// Parse a whole bank from one JSON document.
    ///
    /// # Errors
    ///
    /// See [`JsonBankLoader::load_path`].
    pub fn load_bank_str(&self, json: &str) -> Result<(QuestionBank, LoadReport), StorageError> {
        let mut report = LoadReport::default();
        let root: mapping::BankEntries = mapping::parse("bank", json)?;
        let mut sets = Vec::with_capacity(root.0.len());
        for (set_name, categories) in root.0 {
            sets.push(mapping::map_set(&set_name, categories, self.policy, &mut report)?);
        }
        Ok((QuestionBank::new(sets)?, report))
    }

    fn load_dir(&self, dir: &Path) -> Result<(QuestionBank, LoadReport), StorageError> {
        let io_err = |source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(io_err)?
            .map(|entry| entry.map(|e| e.path()).map_err(io_err))
            .collect::<Result<_, _>>()?;
        files.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"));
        files.sort();

        let mut report = LoadReport::default();
        let mut sets = Vec::with_capacity(files.len());
        for file in files {
            let set_name = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let json = read_to_string(&file)?;
            let categories: mapping::SetEntries = mapping::parse(&set_name, &json)?;
            sets.push(mapping::map_set(&set_name, categories, self.policy, &mut report)?);
        }
        Ok((QuestionBank::new(sets)?, report))
    }
}

fn read_to_string(path: &Path) -> Result<String, StorageError> {
    fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Storage {
    /// Build a `Storage` from a JSON bank file or directory.
    ///
    /// # Errors
    ///
    /// See [`JsonBankLoader::load_path`].
    pub fn json(path: &Path, policy: ValidationPolicy) -> Result<(Self, LoadReport), StorageError> {
        let (bank, report) = JsonBankLoader::new(policy).load_path(path)?;
        Ok((Self::in_memory(bank), report))
    }

    /// Build a `Storage` from an in-memory JSON bank document.
    ///
    /// # Errors
    ///
    /// See [`JsonBankLoader::load_bank_str`].
    pub fn json_str(json: &str, policy: ValidationPolicy) -> Result<(Self, LoadReport), StorageError> {
        let (bank, report) = JsonBankLoader::new(policy).load_bank_str(json)?;
        Ok((Self::in_memory(bank), report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::BankError;

    const BANK: &str = r#"{
        "Set B": {
            "Zoology": [
                { "question": "Largest mammal?", "options": ["Blue whale", "Elephant", "Giraffe", "Orca"], "answer": "Blue whale" }
            ],
            "Astronomy": [
                { "question": "Closest star?", "options": ["Sirius", "Sun", "Vega", "Rigel"], "answer": "Sun" },
                { "question": "Red planet?", "options": ["Mars", "Venus", "Jupiter", "Mercury"], "answer": "Mars " }
            ]
        },
        "Set A": {}
    }"#;

    #[test]
    fn keeps_file_order() {
        let (bank, _) = JsonBankLoader::default().load_bank_str(BANK).unwrap();
        let names: Vec<_> = bank.sets().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Set B", "Set A"]);
        let categories: Vec<_> = bank.sets()[0].categories().iter().map(|c| c.name()).collect();
        assert_eq!(categories, vec!["Zoology", "Astronomy"]);
    }

    #[test]
    fn lenient_load_drops_answer_mismatch() {
        let (bank, report) = JsonBankLoader::new(ValidationPolicy::Lenient)
            .load_bank_str(BANK)
            .unwrap();
        assert_eq!(report.sets, 2);
        assert_eq!(report.categories, 2);
        assert_eq!(report.questions, 2);
        assert_eq!(report.dropped.len(), 1);
        let dropped = &report.dropped[0];
        assert_eq!(dropped.category, "Astronomy");
        assert_eq!(dropped.index, 1);
        assert!(matches!(dropped.reason, QuestionError::AnswerNotInOptions { .. }));
        assert_eq!(bank.sets()[0].categories()[1].len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn strict_load_rejects_answer_mismatch() {
        let err = JsonBankLoader::new(ValidationPolicy::Strict)
            .load_bank_str(BANK)
            .unwrap_err();
        match err {
            StorageError::InvalidQuestion { set, category, index, .. } => {
                assert_eq!(set, "Set B");
                assert_eq!(category, "Astronomy");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accepts_prompt_and_correct_answer_aliases() {
        let json = r#"{ "S": { "C": [
            { "prompt": "1 + 1?", "options": ["1", "2"], "correctAnswer": "2" }
        ] } }"#;
        let (bank, report) = JsonBankLoader::default().load_bank_str(json).unwrap();
        assert!(report.is_clean());
        assert_eq!(bank.sets()[0].categories()[0].questions()[0].answer(), "2");
    }

    #[test]
    fn repeated_set_key_is_a_duplicate_set() {
        let json = r#"{
            "S": { "A": [ { "question": "Q1", "options": ["x", "y"], "answer": "x" } ] },
            "S": { "B": [ { "question": "Q2", "options": ["x", "y"], "answer": "y" } ] }
        }"#;
        for policy in [ValidationPolicy::Strict, ValidationPolicy::Lenient] {
            let err = JsonBankLoader::new(policy).load_bank_str(json).unwrap_err();
            assert!(
                matches!(err, StorageError::Bank(BankError::DuplicateSet { ref name }) if name == "S"),
                "unexpected result: {err:?}"
            );
        }
    }

    #[test]
    fn repeated_category_key_is_a_duplicate_category() {
        let json = r#"{ "S": {
            "A": [ { "question": "Q1", "options": ["x", "y"], "answer": "x" } ],
            "A": [ { "question": "Q2", "options": ["x", "y"], "answer": "y" } ]
        } }"#;
        let err = JsonBankLoader::new(ValidationPolicy::Strict)
            .load_bank_str(json)
            .unwrap_err();
        assert!(
            matches!(err, StorageError::Bank(BankError::DuplicateCategory { .. })),
            "unexpected result: {err:?}"
        );
    }

    #[test]
    fn repeated_category_key_in_set_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("S.json"),
            r#"{ "A": [], "A": [ { "question": "Q", "options": ["x", "y"], "answer": "x" } ] }"#,
        )
        .unwrap();
        let err = JsonBankLoader::default().load_path(dir.path()).unwrap_err();
        assert!(
            matches!(err, StorageError::Bank(BankError::DuplicateCategory { .. })),
            "unexpected result: {err:?}"
        );
    }

    #[test]
    fn malformed_shapes_are_serialization_errors() {
        let loader = JsonBankLoader::default();
        assert!(matches!(
            loader.load_bank_str("[1, 2]"),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            loader.load_bank_str(r#"{ "S": [] }"#),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            loader.load_bank_str(r#"{ "S": { "C": [ { "question": "Q" } ] } }"#),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            loader.load_bank_str("not json"),
            Err(StorageError::Serialization(_))
        ));
    }
}

#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{DroppedQuestion, JsonBankLoader, LoadReport, ValidationPolicy};
pub use repository::{
    CategoryRecord, InMemoryBank, QuestionBankRepository, SetRecord, Storage, StorageError,
};

use dioxus::prelude::*;
use services::{CatalogError, QuizError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The set or category in the URL does not exist.
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "That question set or category does not exist.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<CatalogError> for ViewError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownSet(_) | CatalogError::UnknownCategory { .. } => Self::NotFound,
            other => {
                tracing::error!(error = %other, "catalog query failed");
                Self::Unknown
            }
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Catalog(inner) => inner.into(),
            other => {
                tracing::error!(error = %other, "quiz failed");
                Self::Unknown
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

mod categories;
mod quiz;
mod sets;
mod state;

pub use categories::CategoriesView;
pub use quiz::QuizView;
pub use sets::SetsView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

mod catalog_vm;
mod quiz_vm;
mod results_vm;

pub use catalog_vm::{
    CategoryCardVm, SetCardVm, map_category_cards, map_set_cards, quiz_size_label,
};
pub use quiz_vm::{
    AdvanceVm, FeedbackVm, OptionVm, QuestionVm, QuizIntent, QuizScreenVm, QuizVm,
    option_index_for_key, option_letter,
};
pub use results_vm::ResultsVm;

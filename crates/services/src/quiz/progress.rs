/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question; 0 for an empty quiz.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}

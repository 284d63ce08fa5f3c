use quiz_core::model::{QuizResults, ResultTier};

/// Final score panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub headline: String,
    pub tier_class: &'static str,
    pub score_label: String,
}

impl From<QuizResults> for ResultsVm {
    fn from(results: QuizResults) -> Self {
        let score_label = format!("Score: {} / {}", results.score(), results.total());
        match results.percentage() {
            Some(percentage) => Self {
                headline: format!("{percentage}%"),
                tier_class: tier_class(results.tier().unwrap_or(ResultTier::Red)),
                score_label,
            },
            None => Self {
                headline: "No questions".to_string(),
                tier_class: "results__score--empty",
                score_label,
            },
        }
    }
}

fn tier_class(tier: ResultTier) -> &'static str {
    match tier {
        ResultTier::Green => "results__score--green",
        ResultTier::Yellow => "results__score--yellow",
        ResultTier::Red => "results__score--red",
    }
}

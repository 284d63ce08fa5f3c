/// Colour band for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Green,
    Yellow,
    Red,
}

impl ResultTier {
    /// Lower bounds are inclusive: 70 is green, 40 is yellow.
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            70.. => ResultTier::Green,
            40..=69 => ResultTier::Yellow,
            _ => ResultTier::Red,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultTier::Green => "green",
            ResultTier::Yellow => "yellow",
            ResultTier::Red => "red",
        }
    }
}

/// Read-only summary of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    score: usize,
    total: usize,
}

impl QuizResults {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `round(100 * score / total)` with halves rounded up.
    ///
    /// Returns `None` for an empty session instead of dividing by zero.
    #[must_use]
    pub fn percentage(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let score = self.score as u128;
        let total = self.total as u128;
        let rounded = (200 * score + total) / (2 * total);
        u8::try_from(rounded.min(100)).ok()
    }

    #[must_use]
    pub fn tier(&self) -> Option<ResultTier> {
        self.percentage().map(ResultTier::from_percentage)
    }
}

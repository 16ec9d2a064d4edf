use crate::error::FetchError;
use crate::models::review::Review;

/// What the reviews page is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReviewsView {
    #[default]
    Loading,
    Empty,
    Loaded(Vec<Review>),
}

impl ReviewsView {
    pub fn from_records(records: Vec<Review>) -> Self {
        if records.is_empty() {
            ReviewsView::Empty
        } else {
            ReviewsView::Loaded(records)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ReviewsView::Loading)
    }

    /// Records to render, in server order. Empty while loading.
    pub fn records(&self) -> &[Review] {
        match self {
            ReviewsView::Loaded(records) => records,
            ReviewsView::Loading | ReviewsView::Empty => &[],
        }
    }

    /// Applies a finished fetch. A successful listing replaces whatever was
    /// shown; a failed one only ends the loading phase and keeps prior records.
    pub fn settle(&mut self, outcome: Result<Vec<Review>, FetchError>) {
        match outcome {
            Ok(records) => *self = ReviewsView::from_records(records),
            Err(_) => {
                if self.is_loading() {
                    *self = ReviewsView::Empty;
                }
            }
        }
    }
}

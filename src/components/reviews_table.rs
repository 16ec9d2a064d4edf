/// Table of reviews. Purely presentational: the same records always render
/// the same rows.
use leptos::*;
use crate::models::review::Review;

pub const COLUMNS: [&str; 4] = ["User", "Product", "Review", "Time"];
pub const EMPTY_MESSAGE: &str = "No reviews yet";

/// Cell texts for one review, already resolved through the display rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub key: String,
    pub user: String,
    pub product: String,
    pub review: String,
    pub time: String,
}

impl From<&Review> for ReviewRow {
    fn from(review: &Review) -> Self {
        Self {
            key: review.id.to_string(),
            user: review.display_user().to_string(),
            product: review.product_name.clone(),
            review: review.display_review().to_string(),
            time: review.display_time(),
        }
    }
}

pub fn rows_for(reviews: &[Review]) -> Vec<ReviewRow> {
    reviews.iter().map(ReviewRow::from).collect()
}

#[component]
pub fn ReviewsTable(reviews: Vec<Review>) -> impl IntoView {
    let rows = rows_for(&reviews);
    let is_empty = rows.is_empty();

    view! {
        <table class="reviews-table">
            <thead>
                <tr>
                    { COLUMNS.iter().map(|column| view! { <th>{ *column }</th> }).collect::<Vec<_>>() }
                </tr>
            </thead>
            <tbody>
                { is_empty.then(|| view! {
                    <tr class="empty-row">
                        <td colspan="4">{ EMPTY_MESSAGE }</td>
                    </tr>
                }) }
                <For
                    each=move || rows.clone()
                    key=|row| row.key.clone()
                    children=|row: ReviewRow| view! {
                        <tr class="review-row">
                            <td class="user">{ row.user }</td>
                            <td class="product">{ row.product }</td>
                            <td class="review">{ row.review }</td>
                            <td class="time">{ row.time }</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}

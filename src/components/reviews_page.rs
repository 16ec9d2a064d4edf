use leptos::*;
use crate::api::fetch_reviews;
use crate::components::reviews_table::ReviewsTable;
use crate::config::ApiConfig;
use crate::state::ReviewsView;
use crate::utils::owner::with_live_owner;

/// Loads the review listing once on mount and shows it.
///
/// Fetch failures are logged by [`fetch_reviews`] and otherwise end the
/// loading phase like an empty listing would.
#[component]
pub fn ReviewsPage(config: ApiConfig) -> impl IntoView {
    let (view_state, set_view_state) = create_signal(ReviewsView::Loading);
    let owner = Owner::current();

    // Tracks nothing, so it runs once per mount and only in the browser.
    create_effect(move |_| {
        let config = config.clone();
        spawn_local(async move {
            let outcome = fetch_reviews(&config).await;
            with_live_owner(owner, "reviews fetch", move || {
                set_view_state.update(|state| state.settle(outcome));
            });
        });
    });

    view! {
        <div class="reviews-page">
            <h1>{ "Product Reviews" }</h1>
            <p class="subtitle">{ "Reviews collected over WhatsApp (twilio sandbox)" }</p>
            { move || view_state.with(|state| match state {
                ReviewsView::Loading => view! { <div class="loading">{ "Loading..." }</div> }.into_view(),
                ReviewsView::Empty | ReviewsView::Loaded(_) => {
                    view! { <ReviewsTable reviews=state.records().to_vec() /> }.into_view()
                }
            }) }
        </div>
    }
}

/// Root component. Resolves the listing endpoint once and hands it to the
/// reviews page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::reviews_page::ReviewsPage;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = ApiConfig::from_build_env();

    view! {
        <Stylesheet id="leptos" href="/pkg/product-reviews.css" />
        <Title text="Product Reviews" />
        <Router>
            <main>
                <Routes>
                    <Route
                        path=""
                        view=move || view! { <ReviewsPage config=config.clone() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

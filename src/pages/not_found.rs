use leptos::prelude::*;

/// Shown for destinations this site links to but does not serve
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not available"</h1>
            <p>"This part of MLShelf isn't here yet."</p>
            <a href="/" class="btn btn-primary">"Back to home"</a>
        </div>
    }
}

//! Server-side rendering helpers for component tests.

use std::sync::Arc;

use any_spawner::Executor;
use futures::StreamExt;
use hydration_context::SsrSharedContext;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Root owner carrying the same shared context a server render gets
pub fn server_owner() -> Owner {
    Owner::new_root(Some(Arc::new(SsrSharedContext::new())))
}

/// Render to a string. `Suspense` boundaries show their fallback.
pub fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
    server_owner().with(|| view().to_html())
}

/// Render in order, waiting for every `Suspense` boundary to resolve.
pub async fn render_resolved<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let _ = Executor::init_tokio();
    let owner = server_owner();
    owner.set();
    let html = view().to_html_stream_in_order().collect::<String>().await;
    drop(owner);
    html
}

use leptos::prelude::*;

use crate::components::{FloatingBackdrop, NavigationBar};
use crate::sections::LandingSections;
use crate::server_fns::use_session;

/// The landing page: navigation first, content second.
///
/// With `backdrop` set, decorative floating cards drift behind the content.
#[component]
pub fn HomePage(#[prop(optional)] backdrop: bool) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page-root">
            <NavigationBar session=session />
            <main class="page-content" class:decorated=backdrop>
                {backdrop.then(|| view! { <FloatingBackdrop /> })}
                <LandingSections />
            </main>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::models::SessionStatus;
    use crate::testing::{render, render_resolved};

    #[test]
    fn navigation_renders_before_content() {
        let html = render(|| view! { <HomePage /> });
        let nav = html.find("site-nav").unwrap();
        let hero = html.find(r#"class="hero""#).unwrap();
        assert!(nav < hero);
        assert!(!html.contains("float-card"));
    }

    #[test]
    fn decorated_variant_adds_backdrop_behind_content() {
        let html = render(|| view! { <HomePage backdrop=true /> });
        let backdrop = html.find(r#"class="backdrop""#).unwrap();
        let hero = html.find(r#"class="hero""#).unwrap();
        assert!(backdrop < hero);
        assert!(html.find("site-nav").unwrap() < backdrop);
        assert!(html.contains(r#"class="page-content decorated""#));
    }

    #[test]
    fn decorated_sections_let_the_backdrop_through() {
        let css = include_str!("../../style/main.css");
        for rule in [
            ".page-content.decorated .hero { background: transparent; }",
            ".page-content.decorated .section-muted { background: rgb(249 250 251 / 0.55); }",
        ] {
            assert!(css.contains(rule), "missing {rule}");
        }
        let plain = render(|| view! { <HomePage /> });
        assert!(!plain.contains("decorated"));
    }

    #[tokio::test]
    async fn session_from_context_reaches_navigation() {
        let html = render_resolved(|| {
            provide_context(Signal::stored(SessionStatus::Authenticated));
            view! { <HomePage /> }
        })
        .await;
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(r#"href="/profile""#));
    }

    #[tokio::test]
    async fn missing_session_renders_anonymous_links() {
        let html = render_resolved(|| view! { <HomePage /> }).await;
        assert!(html.contains(r#"href="/login""#));
        assert!(!html.contains(r#"href="/dashboard""#));
    }
}

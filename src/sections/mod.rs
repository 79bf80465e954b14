//! Content blocks of the landing page, top to bottom.

mod community;
mod cta;
mod features;
mod footer;
mod hero;
mod search;
mod steps;

pub use community::Community;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use search::{FeaturedGrid, SearchBar};
pub use steps::HowItWorks;

use leptos::prelude::*;

use crate::models::{resolve_animation, AnimationData, AnimationError};
use crate::net::fetch_animation;
use crate::state::FilterState;

/// Everything below the navigation bar.
///
/// Starts a one-shot download of the hero animation on mount. The resource
/// belongs to this component, so a result arriving after unmount is dropped
/// with it.
#[component]
pub fn LandingSections() -> impl IntoView {
    let filter = RwSignal::new(FilterState::default());
    let fetched = LocalResource::new(fetch_animation);
    let animation = hero_animation(move || fetched.get());

    view! {
        <div class="landing">
            <Hero animation=animation />

            <section class="section section-muted discover">
                <div class="container">
                    <SearchBar filter=filter />
                    <FeaturedGrid />
                </div>
            </section>

            <Features />
            <HowItWorks />
            <Community />
            <CallToAction />
            <Footer />
        </div>
    }
}

/// The animation the hero shows.
///
/// A failed download resolves to the same placeholder the page started
/// with; the memo keeps that from restarting the player.
fn hero_animation(
    fetched: impl Fn() -> Option<Result<AnimationData, AnimationError>> + Send + Sync + 'static,
) -> Memo<AnimationData> {
    Memo::new(move |_| resolve_animation(fetched()))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::models::{FEATURED_MODELS, FEATURES, STEPS};
    use crate::testing;
    use any_spawner::Executor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn render() -> String {
        testing::render(|| view! { <LandingSections /> })
    }

    #[test]
    fn grid_shows_every_sample_model() {
        let html = render();
        assert_eq!(html.matches(r#"class="model-card""#).count(), FEATURED_MODELS.len());
        for model in &FEATURED_MODELS {
            assert!(html.contains(model.name));
        }
    }

    #[test]
    fn search_text_does_not_narrow_the_grid() {
        let html = testing::render(|| {
            let filter = RwSignal::new(FilterState::default());
            filter.update(|f| f.set_search("bert"));
            assert_eq!(filter.with_untracked(|f| f.search_text.clone()), "bert");

            view! {
                <SearchBar filter=filter />
                <FeaturedGrid />
            }
        });
        assert_eq!(html.matches(r#"class="model-card""#).count(), 3);
        assert!(html.contains("MobileNetV3"));
    }

    #[test]
    fn explainer_numbers_steps_from_one() {
        let html = render();
        assert_eq!(html.matches("feature-card").count(), FEATURES.len());
        for n in 1..=STEPS.len() {
            assert!(html.contains(&format!(r#"<span class="step-number">{n}</span>"#)));
        }
        assert_eq!(html.matches("step reversed").count(), 2);
    }

    #[test]
    fn sections_start_unrevealed_and_show_placeholder() {
        let html = render();
        assert!(html.contains("reveal"));
        assert!(!html.contains(" revealed"));
        assert!(html.contains(r#"data-name="ML Animation""#));
    }

    #[test]
    fn footer_links_every_destination() {
        let html = render();
        for href in ["/pricing", "/docs", "/api", "/about", "/contact", "/blog", "/careers"] {
            assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
        }
        assert!(html.contains("mailto:hello@mlshelf.com"));
    }

    async fn settle() {
        for _ in 0..3 {
            Executor::tick().await;
        }
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_player_running() {
        let _ = Executor::init_tokio();
        let owner = testing::server_owner();
        owner.set();

        let fetched = RwSignal::new(None::<Result<AnimationData, AnimationError>>);
        let animation = hero_animation(move || fetched.get());
        let runs = Arc::new(AtomicUsize::new(0));
        let _counter = Effect::new_isomorphic({
            let runs = Arc::clone(&runs);
            move |_| {
                animation.track();
                runs.fetch_add(1, Ordering::SeqCst);
            }
        });
        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        fetched.set(Some(Err(AnimationError::Status(404))));
        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(animation.get_untracked(), AnimationData::placeholder());

        let mut loaded = AnimationData::placeholder();
        loaded.frame_rate = 60.0;
        fetched.set(Some(Ok(loaded.clone())));
        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(animation.get_untracked(), loaded);
    }
}

use leptos::prelude::*;

use crate::models::placeholder_image;
use crate::state::parallax::Spring;

struct FloatingCard {
    seed: &'static str,
    label: &'static str,
    /// Multiplier on the smoothed pointer offset; negative cards drift
    /// against the pointer
    depth: f64,
    class: &'static str,
}

static FLOATING_CARDS: [FloatingCard; 3] = [
    FloatingCard { seed: "tinybert", label: "TinyBERT", depth: 1.0, class: "float-card card-a" },
    FloatingCard { seed: "mobilenet", label: "MobileNetV3", depth: -0.6, class: "float-card card-b" },
    FloatingCard { seed: "distilgpt", label: "DistilGPT-2", depth: 0.4, class: "float-card card-c" },
];

/// Decorative cards and gradient blobs drifting behind the page.
///
/// Purely cosmetic: the layer never receives pointer events.
#[component]
pub fn FloatingBackdrop() -> impl IntoView {
    let spring = RwSignal::new(Spring::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::parallax::{pointer_offset, Offset, FRAME_SECONDS};
        use leptos::ev;
        use std::time::Duration;

        let target = RwSignal::new(Offset::default());
        let pointer = window_event_listener(ev::mousemove, move |ev| {
            let (width, height) = crate::dom::viewport_size();
            target.set(pointer_offset(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                width,
                height,
            ));
        });
        on_cleanup(move || pointer.remove());

        let tick = move || {
            let goal = target.get_untracked();
            spring.maybe_update(|s| s.step(goal, FRAME_SECONDS));
        };
        match set_interval_with_handle(tick, Duration::from_millis(16)) {
            Ok(interval) => on_cleanup(move || interval.clear()),
            Err(err) => log::debug!("parallax disabled: {err:?}"),
        }
    }

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="blob blob-blue"></div>
            <div class="blob blob-purple"></div>
            {FLOATING_CARDS
                .iter()
                .map(|card| {
                    let depth = card.depth;
                    let style = move || {
                        let shift = spring.with(Spring::position).scaled(depth);
                        format!("transform: translate3d({:.1}px, {:.1}px, 0)", shift.x, shift.y)
                    };
                    view! {
                        <div class=card.class style=style>
                            <img
                                src=placeholder_image(card.seed, 200, 120)
                                alt=""
                                loading="lazy"
                                draggable="false"
                            />
                            <span>{card.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn backdrop_is_hidden_from_assistive_tech_and_at_rest() {
        let html = render(|| view! { <FloatingBackdrop /> });
        assert!(html.contains(r#"aria-hidden="true""#));
        assert_eq!(html.matches("float-card").count(), 3);
        assert!(html.contains("translate3d(0.0px, 0.0px, 0)"));
        assert!(html.contains("https://picsum.photos/seed/tinybert/200/120"));
    }
}

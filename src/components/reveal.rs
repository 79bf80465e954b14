use leptos::{html, prelude::*};

use crate::dom;
use crate::state::RevealLatch;

/// Entrance motion applied when a block first scrolls into view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealMotion {
    /// Fade in while rising 30px
    #[default]
    Rise,
    /// Fade in while sliding from the left
    Slide,
    /// Children marked `stagger-item` rise one after another
    Stagger,
}

impl RevealMotion {
    fn class(self) -> &'static str {
        match self {
            RevealMotion::Rise => "reveal-rise",
            RevealMotion::Slide => "reveal-slide",
            RevealMotion::Stagger => "reveal-stagger",
        }
    }
}

/// Wraps a block that fades in the first time it enters the viewport.
///
/// The latch never resets, so scrolling away and back does not replay the
/// transition.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] motion: RevealMotion,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let latch = RwSignal::new(RevealLatch::default());

    let check = move || {
        if latch.with_untracked(RevealLatch::is_revealed) {
            return;
        }
        if let Some(el) = node.get_untracked() {
            let in_view = dom::is_in_viewport(&el);
            latch.maybe_update(|l| l.observe(in_view));
        }
    };

    // Content already on screen at mount reveals without waiting for a scroll.
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;

        let scroll = window_event_listener(ev::scroll, move |_| check());
        let resize = window_event_listener(ev::resize, move |_| check());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    }

    let base = format!("reveal {} {class}", motion.class());
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div
            node_ref=node
            class=move || {
                if latch.with(RevealLatch::is_revealed) {
                    format!("{base} revealed")
                } else {
                    base.clone()
                }
            }
            style=style
        >
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn renders_hidden_with_motion_and_delay() {
        let html = render(|| {
            view! {
                <Reveal motion=RevealMotion::Slide delay_ms=400 class="step">
                    <p>"body"</p>
                </Reveal>
            }
        });
        assert!(html.contains(r#"class="reveal reveal-slide step""#));
        assert!(html.contains("transition-delay: 400ms"));
        assert!(html.contains("<p>body</p>"));
        assert!(!html.contains("revealed"));
    }

    #[test]
    fn no_delay_means_no_style() {
        let html = render(|| view! { <Reveal><span>"x"</span></Reveal> });
        assert!(html.contains("reveal reveal-rise"));
        assert!(!html.contains("style="));
    }
}

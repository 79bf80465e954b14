use leptos::prelude::*;

use crate::components::{Icon, Reveal, RevealMotion};
use crate::models::FEATURES;
use crate::state::reveal::stagger_delay_ms;

/// Delay between consecutive feature cards
const STAGGER_MS: u32 = 200;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="section features" id="features">
            <div class="container">
                <Reveal class="section-heading">
                    <h2>"Why MLShelf?"</h2>
                    <p>
                        "Built by ML engineers, for ML engineers. MLShelf provides the tools and community you need to accelerate your tiny ML projects."
                    </p>
                </Reveal>

                <Reveal motion=RevealMotion::Stagger class="feature-grid">
                    <For
                        each=|| FEATURES.iter().enumerate()
                        key=|(index, _)| *index
                        children=|(index, feature)| {
                            view! {
                                <div
                                    class="feature-card stagger-item"
                                    style=format!("transition-delay: {}ms", stagger_delay_ms(index, STAGGER_MS))
                                >
                                    <div class="feature-icon">
                                        <Icon kind=feature.icon />
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        }
                    />
                </Reveal>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::components::{Icon, Reveal, RevealMotion};
use crate::models::{IconKind, STEPS};
use crate::state::reveal::stagger_delay_ms;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section section-muted steps" id="how-it-works">
            <div class="container">
                <Reveal class="section-heading">
                    <h2>"How It Works"</h2>
                    <p>"From discovery to deployment in four simple steps"</p>
                </Reveal>

                <div class="step-list">
                    <For
                        each=|| STEPS.iter().enumerate()
                        key=|(index, _)| *index
                        children=|(index, step)| {
                            // odd rows put the illustration on the left
                            let class = if index % 2 == 1 { "step reversed" } else { "step" };
                            view! {
                                <Reveal
                                    motion=RevealMotion::Slide
                                    delay_ms=stagger_delay_ms(index, 200)
                                    class=class
                                >
                                    <div class="step-copy">
                                        <div class="step-title">
                                            <span class="step-number">{(index + 1).to_string()}</span>
                                            <h3>{step.title}</h3>
                                        </div>
                                        <p>{step.description}</p>
                                        <button type="button" class="link-button">
                                            "Learn more"
                                            <Icon kind=IconKind::ChevronRight class="icon-sm" />
                                        </button>
                                    </div>
                                    <div class="step-visual">
                                        <Icon kind=step.icon class="icon-xl" />
                                    </div>
                                </Reveal>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::components::{Icon, Reveal};
use crate::models::{IconKind, COMMUNITY_STATS};

#[component]
pub fn Community() -> impl IntoView {
    view! {
        <section class="section community">
            <div class="container narrow">
                <Reveal class="community-body">
                    <div class="community-badge">
                        <Icon kind=IconKind::Users class="icon-lg" />
                    </div>
                    <h2>"Join Our Growing Community"</h2>
                    <p class="lead">
                        "Connect with thousands of ML practitioners, share your models, and collaborate on the future of tiny machine learning."
                    </p>
                    <div class="stat-grid">
                        {COMMUNITY_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class=format!("stat-value tone-{}", stat.tone)>{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button type="button" class="btn btn-gradient btn-lg">
                        "Join the Community"
                        <Icon kind=IconKind::Users class="icon-trailing" />
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::components::{Icon, Reveal};
use crate::models::IconKind;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="container narrow">
                <Reveal class="cta-body">
                    <h2>"Start sharing your tiny ML models today"</h2>
                    <p class="lead">
                        "Join thousands of developers building the future of edge AI. Deploy, share, and discover the next generation of ML models."
                    </p>
                    <a href="/register" class="btn btn-light btn-xl">
                        "Sign Up Free"
                        <Icon kind=IconKind::Award class="icon-trailing" />
                    </a>
                    <p class="fine-print">
                        "Free forever • No credit card required • Get started in 30 seconds"
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

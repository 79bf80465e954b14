use leptos::prelude::*;

use crate::components::{AnimationPlayer, Icon};
use crate::models::{AnimationData, IconKind};

#[component]
pub fn Hero(#[prop(into)] animation: Signal<AnimationData>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-copy enter-left">
                    <h1 class="enter-up delay-200">
                        "MLShelf – "
                        <span class="gradient-text">"Your Tiny ML Model Hub"</span>
                    </h1>
                    <p class="lead enter-up delay-400">
                        "Discover, share, and deploy lightweight machine learning models optimized for edge devices and production environments."
                    </p>
                    <div class="hero-actions enter-up delay-600">
                        <a href="/register" class="btn btn-primary btn-lg">
                            "Get Started"
                            <Icon kind=IconKind::ArrowRight class="icon-trailing" />
                        </a>
                        <a href="/explore" class="btn btn-outline btn-lg">
                            "Explore Models"
                            <Icon kind=IconKind::Search class="icon-trailing" />
                        </a>
                    </div>
                </div>

                <div class="hero-visual enter-right delay-300">
                    <div class="hero-frame">
                        <AnimationPlayer data=animation />
                    </div>
                </div>
            </div>
        </section>
    }
}

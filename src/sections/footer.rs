use leptos::prelude::*;

use crate::components::Icon;
use crate::models::{CONTACT_EMAIL, CONTACT_LOCATION, FOOTER_COLUMNS, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-about">
                        <div class="nav-brand">
                            <span class="brand-mark">"ML"</span>
                            <span class="brand-name">"MLShelf"</span>
                        </div>
                        <p>"The leading platform for tiny ML model discovery and deployment."</p>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h3>{column.title}</h3>
                                    {column
                                        .links
                                        .iter()
                                        .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}

                    <div class="footer-column">
                        <h3>"Connect"</h3>
                        <div class="social-links">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href aria-label=link.label class="social-link">
                                            <Icon kind=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="contact">
                            <p>{CONTACT_EMAIL}</p>
                            <p>{CONTACT_LOCATION}</p>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>"© 2025 MLShelf. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

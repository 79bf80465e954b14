use leptos::prelude::*;

use crate::components::Icon;
use crate::models::{auth_items, mobile_items, nav_items, IconKind, NavLink, SessionStatus};
use crate::state::NavState;

/// Fixed site header.
///
/// The link lists depend on the session lookup, so each sits in a
/// `Suspense` and the server waits for the lookup before rendering them.
#[component]
pub fn NavigationBar(#[prop(into)] session: Signal<SessionStatus>) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = crate::dom::scroll_offset();
            nav.maybe_update(|s| s.set_scroll_offset(offset));
        });
        on_cleanup(move || scroll.remove());
    }

    view! {
        <nav class="site-nav" class:scrolled=move || nav.with(|s| s.scrolled)>
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="brand-mark">"ML"</span>
                    <span class="brand-name">"MLShelf"</span>
                </a>

                <div class="nav-links">
                    <Suspense fallback=|| ()>
                        <For
                            each=move || nav_items(session.get())
                            key=|link| link.id
                            children=move |link: NavLink| {
                                let id = link.id;
                                let active = move || nav.with(|s| s.is_active(id));
                                view! {
                                    <a
                                        href=link.href
                                        class="nav-link"
                                        class:active=active
                                        on:click=move |_| nav.update(|s| s.activate(id))
                                    >
                                        {link.label}
                                        <Show when=active>
                                            <span class="nav-underline"></span>
                                        </Show>
                                    </a>
                                }
                            }
                        />
                    </Suspense>
                </div>

                <div class="nav-auth">
                    <Suspense fallback=|| ()>
                        <For
                            each=move || auth_items(session.get())
                            key=|link| link.id
                            children=|link: NavLink| {
                                view! {
                                    <a
                                        href=link.href
                                        class=if link.primary { "auth-link primary" } else { "auth-link" }
                                    >
                                        {link.icon.map(|kind| view! { <Icon kind=kind class="icon-sm" /> })}
                                        <span>{link.label}</span>
                                    </a>
                                }
                            }
                        />
                    </Suspense>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || nav.with(|s| s.menu_open.to_string())
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        let kind = if nav.with(|s| s.menu_open) { IconKind::X } else { IconKind::Menu };
                        view! { <Icon kind=kind /> }
                    }}
                </button>
            </div>

            <div class="mobile-menu" class:open=move || nav.with(|s| s.menu_open)>
                <Suspense fallback=|| ()>
                    <For
                        each=move || mobile_items(session.get())
                        key=|link| link.id
                        children=move |link: NavLink| {
                            let id = link.id;
                            let class = move || {
                                if link.primary {
                                    "mobile-link primary"
                                } else if nav.with(|s| s.is_active(id)) {
                                    "mobile-link active"
                                } else {
                                    "mobile-link"
                                }
                            };
                            view! {
                                <a
                                    href=link.href
                                    class=class
                                    on:click=move |_| nav.update(|s| s.activate_from_menu(id))
                                >
                                    {link.label}
                                </a>
                            }
                        }
                    />
                </Suspense>
            </div>
        </nav>
    }
}

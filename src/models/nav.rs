use serde::{Deserialize, Serialize};

use super::icon::IconKind;

/// Whether the visitor has a signed-in session
///
/// Supplied by the session collaborator; the navigation only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Authenticated,
    #[default]
    Anonymous,
}

impl SessionStatus {
    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionStatus::Authenticated)
    }
}

/// A link in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Option<IconKind>,
    pub primary: bool,
}

impl NavLink {
    const fn plain(id: &'static str, label: &'static str, href: &'static str) -> Self {
        Self {
            id,
            label,
            href,
            icon: None,
            primary: false,
        }
    }
}

/// Id of the link that starts out active
pub const DEFAULT_ACTIVE_LINK: &str = "home";

/// Primary site sections, with the dashboard only for signed-in visitors
pub fn nav_items(session: SessionStatus) -> Vec<NavLink> {
    let mut items = vec![
        NavLink::plain("home", "Home", "/"),
        NavLink::plain("explore", "Explore", "/explore"),
    ];
    if session.is_authenticated() {
        items.push(NavLink::plain("dashboard", "Dashboard", "/dashboard"));
    }
    items
}

/// Account links shown to the right of the navigation
pub fn auth_items(session: SessionStatus) -> Vec<NavLink> {
    match session {
        SessionStatus::Authenticated => vec![NavLink {
            icon: Some(IconKind::User),
            ..NavLink::plain("profile", "Profile", "/profile")
        }],
        SessionStatus::Anonymous => vec![
            NavLink::plain("login", "Login", "/login"),
            NavLink {
                primary: true,
                ..NavLink::plain("signup", "Sign Up", "/register")
            },
        ],
    }
}

/// Everything the collapsed mobile menu lists, in display order
pub fn mobile_items(session: SessionStatus) -> Vec<NavLink> {
    let mut items = nav_items(session);
    items.extend(auth_items(session));
    items
}

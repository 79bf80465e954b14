use leptos::prelude::*;

use crate::models::SessionStatus;

/// Session key written by the sign-in flow
pub const SESSION_USER_KEY: &str = "user";

#[server]
pub async fn current_session() -> Result<SessionStatus, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let user: Option<serde_json::Value> = session.get(SESSION_USER_KEY).await.ok().flatten();
    Ok(if user.is_some() {
        SessionStatus::Authenticated
    } else {
        SessionStatus::Anonymous
    })
}

/// Load the session status once and share it with the page
pub fn provide_session() {
    let session = Resource::new(|| (), |_| current_session());
    let status = Signal::derive(move || {
        session
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    provide_context(status);
}

/// Session status from context; anonymous when nothing provided one
pub fn use_session() -> Signal<SessionStatus> {
    use_context::<Signal<SessionStatus>>()
        .unwrap_or_else(|| Signal::stored(SessionStatus::Anonymous))
}

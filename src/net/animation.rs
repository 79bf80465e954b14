//! Optional hero animation download.
//!
//! Client-side (hydrate): a single GET via `gloo-net`, raced against a timer.
//! Server-side (SSR): always unavailable, so the server renders the
//! placeholder and hydration starts from the same markup.

#![allow(clippy::unused_async)]

use crate::models::{AnimationData, AnimationError};

/// Static asset holding the richer animation, if deployed
pub const ANIMATION_URL: &str = "/ml-animation.json";

/// Upper bound on how long the download may take
pub const FETCH_TIMEOUT_MS: u32 = 5_000;

/// Fetch the animation description from [`ANIMATION_URL`].
///
/// Every failure comes back as an `Err`; callers resolve it to the
/// placeholder with [`crate::models::resolve_animation`].
pub async fn fetch_animation() -> Result<AnimationData, AnimationError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{select, Either};
        use gloo_timers::future::TimeoutFuture;

        let request = Box::pin(request_animation(ANIMATION_URL));
        let timeout = Box::pin(TimeoutFuture::new(FETCH_TIMEOUT_MS));
        let result = match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(AnimationError::TimedOut(FETCH_TIMEOUT_MS)),
        };
        if let Err(err) = &result {
            log::debug!("using placeholder animation: {err}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AnimationError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn request_animation(url: &str) -> Result<AnimationData, AnimationError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| AnimationError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(AnimationError::Status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| AnimationError::Network(e.to_string()))?;
    AnimationData::from_json(&body)
}

pub mod animation;

pub use animation::{fetch_animation, ANIMATION_URL, FETCH_TIMEOUT_MS};

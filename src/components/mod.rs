mod animation;
mod backdrop;
mod icon;
mod nav;
mod reveal;

pub use animation::AnimationPlayer;
pub use backdrop::FloatingBackdrop;
pub use icon::Icon;
pub use nav::NavigationBar;
pub use reveal::{Reveal, RevealMotion};

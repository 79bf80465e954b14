//! Component-local UI state, kept free of the reactive runtime so each
//! transition can be exercised directly.

pub mod filter;
pub mod nav;
pub mod parallax;
pub mod reveal;

pub use filter::FilterState;
pub use nav::NavState;
pub use parallax::{Offset, Spring};
pub use reveal::RevealLatch;

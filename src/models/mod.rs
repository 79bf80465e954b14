mod animation;
mod catalog;
mod icon;
mod nav;

pub use animation::*;
pub use catalog::*;
pub use icon::IconKind;
pub use nav::*;

//! Form state, disclosure rules, and submission assembly.

mod disclosure;
mod draft;
mod payload;

pub use disclosure::*;
pub use draft::*;
pub use payload::*;

//! Reusable UI components

mod id_card;
mod loading;
mod navbar;
mod toast;

pub use id_card::*;
pub use loading::*;
pub use navbar::*;
pub use toast::*;

//! Application pages

mod home;
mod register;

pub use home::*;
pub use register::*;

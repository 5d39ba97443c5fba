//! Read-only reference datasets for the registration form.
//!
//! Three separate collaborators, mirroring how the form consumes them:
//! a flat State -> LGA mapping for the citizenship selectors, a nested
//! State -> LGA -> Ward dataset transformed once at mount, and a disjoint
//! residence-state listing for the country-of-residence section.

mod residence_info;
mod states_lga;
mod wards;

pub use residence_info::*;
pub use states_lga::*;
pub use wards::*;

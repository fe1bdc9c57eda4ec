//! Reusable UI components shared by route-level pages.

pub mod navbar;
pub mod protected;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, navigation, inline
//! errors) and delegates shared chrome to `components`.

pub mod analysis;
pub mod audit;
pub mod dashboard;
pub mod landing;
pub mod login;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `storage` abstracts durable key-value storage,
//! `session` owns who is logged in, and `analysis` carries the latest result
//! from the dashboard to the result viewer.

pub mod analysis;
pub mod session;
pub mod storage;

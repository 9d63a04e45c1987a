//! Brouhaha Common Library
//!
//! Wire types exchanged between the role authority server and its clients.

pub mod types;

pub use types::*;

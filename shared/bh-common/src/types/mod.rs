//! Shared Types

mod access;

pub use access::*;

//! Brouhaha Role Authority
//!
//! Decides what each platform role may do: its rank, its permission grants,
//! and whether it meets a requested permission or minimum level.

pub mod api;
pub mod auth;
pub mod config;
pub mod permissions;

//! # Domain Models
//!
//! This crate contains pure site types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no DOM access and no behavior beyond simple helpers.

pub mod config;
pub mod constants;
pub mod menu;

//! # Domain Models
//!
//! Pure domain types for the vaccine pages with minimal dependencies
//! (`serde`, `strum`, `thiserror`, `typed-builder`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod content;
pub mod eligibility;
pub mod registry;
pub mod vaccine;

//! Browser-facing pages rendered with Askama templates.
//!
//! - [`handlers`] - Template rendering handlers

pub mod handlers;

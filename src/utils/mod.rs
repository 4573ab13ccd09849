//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Target URL validation
//! - [`public_url`] - Base URL resolution for printed short links

pub mod code_generator;
pub mod public_url;
pub mod url_validator;

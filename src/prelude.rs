//! Imports for syntax extensions.

pub use crate::IntoRequestUrl as _;

//! Child environment composition.
//!
//! Turns a fetched [`PropertySet`](crate::properties::PropertySet) into the
//! ordered environment handed to the child process, optionally seeded with the
//! inherited environment and with keys sanitized into conventional variable
//! names.

mod compose;
mod sanitize;


pub use compose::{ComposedEnvironment, compose_environment, compose_environment_from};
pub use sanitize::sanitize_key;

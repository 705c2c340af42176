//! CLI library components for the scrub toolkit.

pub mod logging;
pub mod session;

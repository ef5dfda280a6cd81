//! Core types for konnectops.

pub mod credential;
pub mod outcome;

pub use credential::*;
pub use outcome::*;

//! Text generation with provider fallback.

pub mod resolver;

pub use resolver::Resolver;

//! konnectops: real-estate marketing toolkit.
//!
//! Wraps a fallback-aware AI text resolver (Gemini first, any
//! OpenAI-compatible chat endpoint second) and the content helpers a sales
//! team uses with it: prompt builders, landing-page templating, an EMI
//! calculator, WhatsApp links and a festival calendar.
//!
//! # Quick Start
//!
//! ```no_run
//! use konnectops::config::KonnectConfig;
//! use konnectops::content::{local_blog, prompts::blog_prompt, BlogBrief};
//! use konnectops::generation::Resolver;
//!
//! # async fn example() -> konnectops::error::Result<()> {
//! let config = KonnectConfig::from_env()?;
//! let resolver = Resolver::from_config(&config);
//!
//! let brief = BlogBrief::builder().project("Sky Gardens").location("OMR").build();
//! let blog = resolver
//!     .resolve(&blog_prompt(&brief))
//!     .await
//!     .text_or_else(|_, _| local_blog(&brief));
//! println!("{blog}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;

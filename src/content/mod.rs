//! Real-estate marketing content helpers.
//!
//! Everything here is a pure function except [`landing::LandingPage::render`],
//! which asks the resolver for a meta description.

pub mod calendar;
pub mod fallback;
pub mod landing;
pub mod prompts;
pub mod utilities;

pub use calendar::{festivals_2026, Festival};
pub use fallback::local_blog;
pub use landing::{LandingPage, RenderedLanding};
pub use prompts::{BlogBrief, ContentType, ImageStyle};
pub use utilities::{emi, format_emi, whatsapp_link};

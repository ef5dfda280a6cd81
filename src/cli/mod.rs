//! CLI definitions for konnectops.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::content::{ContentType, ImageStyle};

/// KonnectOps marketing toolkit
#[derive(Parser, Debug)]
#[command(name = "konnectops", version, about = "KonnectOps real-estate marketing toolkit")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a free-form prompt through the provider chain
    Ask(AskArgs),
    /// List models available to the primary key and the one selected
    Models,
    /// Draft marketing copy
    Content(ContentArgs),
    /// Write an image-generation prompt
    ImagePrompt(ImagePromptArgs),
    /// Translate English text to Tamil
    Translate(TextArgs),
    /// Generate a Zoho Deluge script
    Deluge(TextArgs),
    /// Write a project blog post (local template if providers fail)
    Blog(BlogArgs),
    /// Fill a landing-page HTML template
    Landing(LandingArgs),
    /// Show the 2026 festival calendar
    Calendar(CalendarArgs),
    /// Compute a monthly loan instalment
    Emi(EmiArgs),
    /// Build a WhatsApp click-to-chat link
    Whatsapp(WhatsappArgs),
}

/// Arguments for `ask`.
#[derive(Args, Debug)]
pub struct AskArgs {
    pub prompt: String,
}

/// Arguments for `content`.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// blog-post, instagram-carousel, linkedin-post or client-email
    #[arg(short, long, default_value = "blog-post")]
    pub kind: ContentType,

    pub topic: String,
}

/// Arguments for `image-prompt`.
#[derive(Args, Debug)]
pub struct ImagePromptArgs {
    /// photorealistic, 8k-render or architectural
    #[arg(short, long, default_value = "photorealistic")]
    pub style: ImageStyle,

    pub concept: String,
}

/// A single free-text argument.
#[derive(Args, Debug)]
pub struct TextArgs {
    pub text: String,
}

/// Arguments for `blog`.
#[derive(Args, Debug)]
pub struct BlogArgs {
    #[arg(long)]
    pub project: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub developer: String,
    /// Comma-separated selling points
    #[arg(long, default_value = "")]
    pub usps: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Skip the providers and use the local template
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for `landing`.
#[derive(Args, Debug)]
pub struct LandingArgs {
    /// HTML template file
    #[arg(long)]
    pub template: PathBuf,
    #[arg(long)]
    pub project: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub price: String,
    /// Project name in the template to replace
    #[arg(long)]
    pub old_name: Option<String>,
    /// Output file (defaults to `<project>.html`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `calendar`.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Only show festivals on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
}

/// Arguments for `emi`.
#[derive(Args, Debug)]
pub struct EmiArgs {
    #[arg(long, default_value_t = 5_000_000.0)]
    pub loan: f64,
    /// Annual interest rate in percent
    #[arg(long, default_value_t = 8.5)]
    pub rate: f64,
    #[arg(long, default_value_t = 20)]
    pub years: u32,
}

/// Arguments for `whatsapp`.
#[derive(Args, Debug)]
pub struct WhatsappArgs {
    #[arg(long, default_value = "919876543210")]
    pub phone: String,
    #[arg(long, default_value = "Hi, I am interested.")]
    pub message: String,
}

//! Prompt builders for the generation resolver.

use bon::Builder;
use strum::{Display, EnumString};

use crate::error::{KonnectError, Result};

/// Marketing copy formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ContentType {
    #[strum(to_string = "Blog Post", serialize = "blog-post")]
    BlogPost,
    #[strum(to_string = "Instagram Carousel", serialize = "instagram-carousel")]
    InstagramCarousel,
    #[strum(to_string = "LinkedIn Post", serialize = "linkedin-post")]
    LinkedInPost,
    #[strum(to_string = "Client Email", serialize = "client-email")]
    ClientEmail,
}

/// Rendering styles for image prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ImageStyle {
    #[strum(to_string = "Photorealistic", serialize = "photorealistic")]
    Photorealistic,
    #[strum(to_string = "8K Render", serialize = "8k-render")]
    Render8k,
    #[strum(to_string = "Architectural", serialize = "architectural")]
    Architectural,
}

/// Inputs for a project blog post.
#[derive(Debug, Clone, Default, Builder)]
#[builder(on(String, into))]
pub struct BlogBrief {
    pub project: String,
    #[builder(default)]
    pub location: String,
    #[builder(default)]
    pub developer: String,
    /// Comma-separated selling points.
    #[builder(default)]
    pub usps: String,
    #[builder(default)]
    pub phone: String,
    #[builder(default)]
    pub email: String,
}

impl BlogBrief {
    /// Trimmed, non-empty selling points in input order.
    pub fn usp_list(&self) -> Vec<&str> {
        self.usps
            .split(',')
            .map(str::trim)
            .filter(|usp| !usp.is_empty())
            .collect()
    }
}

/// Sections a blog post must contain, in order.
pub const BLOG_SECTIONS: [&str; 12] = [
    "Title",
    "Preview (with emojis)",
    "Introduction",
    "Project Highlights with emojis",
    "Location Advantages",
    "Premium Specifications",
    "Amenities with emojis",
    "About Developer",
    "Contact CTA",
    "FAQ (5)",
    "SEO Meta Title & Description",
    "Tags",
];

pub fn seo_description(project: &str, location: &str) -> String {
    format!("Write a 150 character SEO meta description for {project} in {location}.")
}

/// Rejects a blank topic.
pub fn marketing_content(kind: ContentType, topic: &str) -> Result<String> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(KonnectError::InvalidArgument("topic must not be empty".into()));
    }
    Ok(format!("Write a professional {kind} about: {topic}."))
}

pub fn image_prompt(concept: &str, style: ImageStyle) -> String {
    format!("Write a Midjourney prompt for: {concept}. Style: {style}.")
}

pub fn tamil_translation(text: &str) -> String {
    format!("Translate to professional Tamil: {text}")
}

pub fn deluge_script(logic: &str) -> String {
    format!("Write a Zoho Deluge script that does the following: {logic}")
}

pub fn blog_prompt(brief: &BlogBrief) -> String {
    format!(
        "You are a real estate content writer. Follow this EXACT structure:\n\
         {sections}.\n\n\
         Project: {project}\n\
         Location: {location}\n\
         Developer: {developer}\n\
         USPs: {usps}\n\
         Phone: {phone}\n\
         Email: {email}\n\n\
         Return pure Markdown only.",
        sections = BLOG_SECTIONS.join(", "),
        project = brief.project,
        location = brief.location,
        developer = brief.developer,
        usps = brief.usps,
        phone = brief.phone,
        email = brief.email,
    )
}

/// Cover-image prompt built locally; only the first four USPs are used.
pub fn cover_image_prompt(brief: &BlogBrief) -> String {
    let highlights = brief
        .usp_list()
        .into_iter()
        .take(4)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Blog cover for {} located in {}. Photorealistic 1200x628 modern apartment facade, \
         landscaped greenery, professional lighting, subtle family silhouettes. Highlight: {}.",
        brief.project, brief.location, highlights
    )
}

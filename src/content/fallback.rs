//! Keyless local blog template, used when both providers fail.

use std::fmt::Write;

use super::prompts::BlogBrief;

/// Deterministic markdown blog with the same section layout the
/// generation prompt asks for.
pub fn local_blog(brief: &BlogBrief) -> String {
    let project = or_placeholder(&brief.project, "Our Project");
    let location = or_placeholder(&brief.location, "a prime location");
    let developer = or_placeholder(&brief.developer, "a trusted developer");
    let usps = brief.usp_list();

    let mut doc = String::new();
    let _ = writeln!(doc, "# {project}: Premium Homes in {location}\n");
    let _ = writeln!(
        doc,
        "> 🏡 Discover {project} ✨ thoughtfully designed homes in {location} by {developer}.\n"
    );

    let _ = writeln!(doc, "## Introduction\n");
    let _ = writeln!(
        doc,
        "{project} brings modern living to {location}. Built by {developer}, \
         the project pairs quality construction with everyday convenience.\n"
    );

    let _ = writeln!(doc, "## Project Highlights\n");
    if usps.is_empty() {
        let _ = writeln!(doc, "- ✅ Thoughtfully planned homes");
    } else {
        for usp in &usps {
            let _ = writeln!(doc, "- ✅ {usp}");
        }
    }
    doc.push('\n');

    let _ = writeln!(doc, "## Location Advantages\n");
    let _ = writeln!(
        doc,
        "Homes in {location} enjoy easy access to schools, hospitals, shopping and transit.\n"
    );

    let _ = writeln!(doc, "## Premium Specifications\n");
    let _ = writeln!(doc, "- Earthquake-resistant RCC framed structure");
    let _ = writeln!(doc, "- Vitrified tile flooring");
    let _ = writeln!(doc, "- Branded sanitary fittings and CP fixtures\n");

    let _ = writeln!(doc, "## Amenities\n");
    let _ = writeln!(doc, "- 🏊 Swimming pool");
    let _ = writeln!(doc, "- 🏋️ Gymnasium");
    let _ = writeln!(doc, "- 🌳 Landscaped gardens");
    let _ = writeln!(doc, "- 🛡️ 24x7 security\n");

    let _ = writeln!(doc, "## About Developer\n");
    let _ = writeln!(
        doc,
        "{developer} is known for delivering quality homes on schedule.\n"
    );

    let _ = writeln!(doc, "## Contact\n");
    let mut contacts = Vec::new();
    if !brief.phone.trim().is_empty() {
        contacts.push(format!("📞 {}", brief.phone.trim()));
    }
    if !brief.email.trim().is_empty() {
        contacts.push(format!("✉️ {}", brief.email.trim()));
    }
    if contacts.is_empty() {
        let _ = writeln!(doc, "Get in touch with our sales team to book a site visit.\n");
    } else {
        let _ = writeln!(doc, "Book a site visit today: {}\n", contacts.join(" | "));
    }

    let _ = writeln!(doc, "## FAQ\n");
    let faqs = [
        (
            format!("Where is {project} located?"),
            format!("{project} is located in {location}."),
        ),
        (
            format!("Who is the developer of {project}?"),
            format!("{project} is developed by {developer}."),
        ),
        (
            "What amenities are available?".to_string(),
            "Residents get a pool, gym, landscaped gardens and round-the-clock security."
                .to_string(),
        ),
        (
            "Is home loan assistance available?".to_string(),
            "Yes, our team helps with loan tie-ups from leading banks.".to_string(),
        ),
        (
            "How do I book a site visit?".to_string(),
            "Contact our sales team using the details above.".to_string(),
        ),
    ];
    for (question, answer) in &faqs {
        let _ = writeln!(doc, "**Q: {question}**  \nA: {answer}\n");
    }

    let _ = writeln!(doc, "## SEO\n");
    let _ = writeln!(doc, "**Meta Title:** {project} | Homes in {location}  ");
    let _ = writeln!(
        doc,
        "**Meta Description:** Explore {project} in {location} by {developer}. \
         Modern homes with premium amenities.\n"
    );

    let _ = writeln!(doc, "## Tags\n");
    let _ = write!(
        doc,
        "{}, {}, real estate, new launch, apartments",
        project, location
    );
    doc.push('\n');
    doc
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

//! End-to-end resolver behaviour over both mocked providers.

mod common;

use std::time::Duration;

use common::*;
use konnectops::config::KonnectConfig;
use konnectops::content::{local_blog, prompts::blog_prompt, BlogBrief, LandingPage};
use konnectops::generation::Resolver;
use konnectops::models::GENERATE_CONTENT;
use konnectops::types::{GenerationOutcome, ResolvedResult};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn missing_keys_fail_both_without_requests() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    forbid_requests(&gemini).await;
    forbid_requests(&openai).await;

    let config = KonnectConfig::new()
        .with_primary_base_url(gemini.uri())
        .with_secondary_base_url(openai.uri());
    let resolver = Resolver::from_config(&config);

    assert_eq!(
        resolver.resolve("hello").await,
        ResolvedResult::BothFailed(GenerationOutcome::NoKey, GenerationOutcome::NoKey)
    );
}

#[tokio::test]
async fn primary_success_never_touches_secondary() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    mount_models(&gemini, model_page(vec![model("m1", &[GENERATE_CONTENT])], None), 1).await;
    mount_generation(
        &gemini,
        "m1",
        ResponseTemplate::new(200).set_body_json(gemini_text("Hello World")),
        1,
    )
    .await;
    forbid_requests(&openai).await;

    let resolver = Resolver::from_config(&test_config(&gemini, &openai));

    assert_eq!(
        resolver.resolve("hello").await,
        ResolvedResult::Text("Hello World".into())
    );
}

#[tokio::test]
async fn primary_quota_falls_back_to_secondary() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    mount_models(&gemini, model_page(vec![model("m1", &[GENERATE_CONTENT])], None), 1).await;
    mount_generation(&gemini, "m1", ResponseTemplate::new(429), 1).await;
    mount_chat(
        &openai,
        ResponseTemplate::new(200).set_body_json(chat_text("y")),
        1,
    )
    .await;

    let resolver = Resolver::from_config(&test_config(&gemini, &openai));

    assert_eq!(resolver.resolve("hello").await, ResolvedResult::Text("y".into()));
}

#[tokio::test]
async fn missing_primary_key_falls_back_to_secondary() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    forbid_requests(&gemini).await;
    mount_chat(
        &openai,
        ResponseTemplate::new(200).set_body_json(chat_text("from fallback")),
        1,
    )
    .await;

    let config = test_config(&gemini, &openai).with_primary_key("");
    let resolver = Resolver::from_config(&config);

    assert_eq!(
        resolver.resolve("hello").await,
        ResolvedResult::Text("from fallback".into())
    );
}

#[tokio::test]
async fn both_failing_preserves_each_outcome() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    mount_models(&gemini, model_page(vec![model("m1", &[GENERATE_CONTENT])], None), 1).await;
    mount_generation(
        &gemini,
        "m1",
        ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "a", "status": "INTERNAL"}
        })),
        1,
    )
    .await;
    mount_chat(&openai, ResponseTemplate::new(429), 1).await;

    let resolver = Resolver::from_config(&test_config(&gemini, &openai));

    assert_eq!(
        resolver.resolve("hello").await,
        ResolvedResult::BothFailed(
            GenerationOutcome::TransportError("API error (status 500): a".into()),
            GenerationOutcome::QuotaExceeded,
        )
    );
}

#[tokio::test]
async fn unreachable_providers_keep_keys_out_of_the_report() {
    let config = KonnectConfig::new()
        .with_primary_key(GEMINI_KEY)
        .with_secondary_key(OPENAI_KEY)
        .with_primary_base_url(UNREACHABLE)
        .with_secondary_base_url(UNREACHABLE)
        .with_timeout(Duration::from_secs(1));
    let resolver = Resolver::from_config(&config);

    let result = resolver.resolve("hello").await;
    assert!(
        matches!(
            &result,
            ResolvedResult::BothFailed(
                GenerationOutcome::TransportError(_),
                GenerationOutcome::TransportError(_)
            )
        ),
        "{result:?}"
    );
    let report = result.to_string();
    assert!(!report.contains(GEMINI_KEY), "{report}");
    assert!(!report.contains(OPENAI_KEY), "{report}");
}

#[tokio::test]
async fn blog_falls_back_to_local_template() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    mount_models(&gemini, json!({"models": []}), 1).await;
    mount_chat(&openai, ResponseTemplate::new(401).set_body_string("bad key"), 1).await;

    let resolver = Resolver::from_config(&test_config(&gemini, &openai));
    let brief = BlogBrief::builder()
        .project("Sky Gardens")
        .location("OMR")
        .usps("Pool, Gym")
        .build();

    let resolved = resolver.resolve(&blog_prompt(&brief)).await;
    assert!(matches!(
        &resolved,
        ResolvedResult::BothFailed(GenerationOutcome::NoModel, GenerationOutcome::TransportError(msg))
            if msg == "HTTP 401: bad key"
    ));

    let blog = resolved.text_or_else(|_, _| local_blog(&brief));
    assert_eq!(blog, local_blog(&brief));
}

#[tokio::test]
async fn landing_page_fills_description_from_provider() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    mount_models(&gemini, model_page(vec![model("m1", &[GENERATE_CONTENT])], None), 1).await;
    mount_generation(
        &gemini,
        "m1",
        ResponseTemplate::new(200).set_body_json(gemini_text("  Luxury homes in OMR.\n")),
        1,
    )
    .await;

    let resolver = Resolver::from_config(&test_config(&gemini, &openai));
    let page = LandingPage {
        project: "Sky Gardens".into(),
        location: "OMR".into(),
        price: "85L".into(),
        old_name: None,
    };

    let rendered = page
        .render("<meta name=\"description\" content=\"{DESC}\"><p>{PRICE}</p>", &resolver)
        .await
        .unwrap();

    assert_eq!(
        rendered.html,
        "<meta name=\"description\" content=\"Luxury homes in OMR.\"><p>85L</p>"
    );
    assert!(rendered.description.is_some_and(|d| d.is_text()));
}

#[tokio::test]
async fn landing_page_without_placeholder_skips_generation() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;
    forbid_requests(&gemini).await;
    forbid_requests(&openai).await;

    let resolver = Resolver::from_config(&test_config(&gemini, &openai));
    let page = LandingPage {
        project: "Sky Gardens".into(),
        location: "OMR".into(),
        ..Default::default()
    };

    let rendered = page.render("<h1>{LOCATION}</h1>", &resolver).await.unwrap();

    assert_eq!(rendered.html, "<h1>OMR</h1>");
    assert!(rendered.description.is_none());
}

#[tokio::test]
async fn landing_page_blanks_description_when_providers_fail() {
    let gemini = MockServer::start().await;
    let openai = MockServer::start().await;

    let config = KonnectConfig::new()
        .with_primary_base_url(gemini.uri())
        .with_secondary_base_url(openai.uri());
    let resolver = Resolver::from_config(&config);
    let page = LandingPage {
        project: "Sky Gardens".into(),
        ..Default::default()
    };

    let rendered = page.render("<p>{DESC}</p>", &resolver).await.unwrap();

    assert_eq!(rendered.html, "<p></p>");
    assert!(matches!(rendered.description, Some(ResolvedResult::BothFailed(..))));
}

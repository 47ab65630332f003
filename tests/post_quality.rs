//! End-to-end post validation: content in, rendered report out.

use copycheck::{post, report, Content};

fn pad_to_words(mut text: String, words: usize) -> String {
    let current = text.split_whitespace().count();
    for _ in current..words {
        text.push_str(" onboarding");
    }
    text
}

fn strong_post() -> String {
    pad_to_words(
        String::from(
            "Why do 80% of onboarding flows fail in week one?\n\n\
             - Map the first-session journey end to end\n\
             - Cut the signup form down to three fields\n\n\
             We saw a 40% reduction in drop-off.\n\n\
             What's your experience? Reply below.",
        ),
        200,
    )
}

#[test]
fn strong_post_renders_a_single_success_line() {
    let content = Content::new(&strong_post(), "Post").unwrap();
    let report = post::evaluate(&content);
    assert!(report.passed(), "unexpected findings: {:?}", report.findings);

    let text = report::render_text(&report, &post::LABELS, false);
    assert_eq!(text, "\u{2713} LinkedIn post meets quality standards (200 words)");
}

#[test]
fn weak_post_renders_the_full_issue_block() {
    let content = Content::new("We shipped a thing.\nIt is live now.", "Post").unwrap();
    let report = post::evaluate(&content);
    assert!(!report.passed());

    let text = report::render_text(&report, &post::LABELS, false);
    assert!(text.starts_with("Post Quality Issues:\n"));
    assert!(text.contains("  \u{2717} Too short (8 words). Aim for 150-400 words.\n"));
    assert!(text.contains("  \u{2717} No clear hook in first 2-3 lines."));
    assert!(text.contains("  \u{26a0} Post doesn't clearly indicate TOFU/MOFU/BOFU stage."));
    assert!(text.ends_with("\u{2717} Post needs improvement before publishing"));
}

#[test]
fn verbose_rendering_prepends_the_analysis_block() {
    let content = Content::new(&strong_post(), "Post").unwrap();
    let report = post::evaluate(&content);

    let text = report::render_text(&report, &post::LABELS, true);
    assert!(text.starts_with("Post Analysis (verbose):\n  Word count: 200\n"));
    assert!(text.contains("  Funnel stage indicators: "));
    assert!(text.ends_with("\u{2713} LinkedIn post meets quality standards (200 words)"));
}

#[test]
fn json_rendering_carries_the_verdict_and_funnel_tally() {
    let content = Content::new(&strong_post(), "Post").unwrap();
    let report = post::evaluate(&content);

    let json = report::render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["verdict"], "pass");
    assert_eq!(value["metrics"]["word_count"], 200);
    assert!(value["metrics"]["funnel_stages"].is_array());
}

//! Social post validator: engagement-oriented structural checks.
//!
//! Every check runs unconditionally over the same content — a single run
//! surfaces every issue, not just the first.

use tracing::debug;

use crate::content::Content;
use crate::keywords::{FUNNEL_STAGES, INSIGHT_WORDS, PAIN_WORDS, POST_CTA};
use crate::patterns;
use crate::report::{Finding, Labels, Metrics, Report, StageTally};

/// Rendering labels for post reports.
pub const LABELS: Labels = Labels {
    heading: "Post Quality Issues:",
    success: "LinkedIn post meets quality standards",
    failure: "Post needs improvement before publishing",
    analysis: "Post Analysis",
    show_bullets: false,
    metrics_on_failure: false,
};

const MIN_WORDS: usize = 80;
const MAX_WORDS: usize = 600;
const MIN_STRUCTURAL_LINES: usize = 2;
const HOOK_LINES: usize = 3;

/// Run every post check over the content and collect the findings.
#[must_use]
pub fn evaluate(content: &Content) -> Report {
    let word_count = content.word_count();
    let bullet_count = content
        .lines()
        .filter(|line| patterns::is_structural_line(line))
        .count();
    let funnel = funnel_tally(content);

    let mut report = Report::new(Metrics {
        word_count,
        bullet_count,
        funnel_stages: Some(funnel.clone()),
    });

    let checks = [
        check_length(word_count),
        check_hook(content),
        check_substance(bullet_count),
        check_proof(content),
        check_cta(content),
        check_funnel(&funnel),
    ];
    for finding in checks.into_iter().flatten() {
        report.push(finding);
    }

    debug!(
        word_count,
        bullet_count,
        findings = report.findings.len(),
        "post evaluation finished"
    );
    report
}

fn check_length(word_count: usize) -> Option<Finding> {
    if word_count < MIN_WORDS {
        Some(Finding::blocker(format!(
            "Too short ({word_count} words). Aim for 150-400 words."
        )))
    } else if word_count > MAX_WORDS {
        Some(Finding::blocker(format!(
            "Too long ({word_count} words). Mobile users will scroll past. Aim for 150-400 words."
        )))
    } else {
        None
    }
}

/// The opening must grab attention: a question, a pain point, or an
/// insight framing within the first lines.
fn check_hook(content: &Content) -> Option<Finding> {
    let opening = content.opening(HOOK_LINES);
    let has_hook = opening.contains('?')
        || PAIN_WORDS.iter().any(|w| opening.contains(w))
        || INSIGHT_WORDS.iter().any(|w| opening.contains(w));
    if has_hook {
        None
    } else {
        Some(Finding::blocker(
            "No clear hook in first 2-3 lines. Start with a pain point or question.",
        ))
    }
}

fn check_substance(bullet_count: usize) -> Option<Finding> {
    if bullet_count < MIN_STRUCTURAL_LINES {
        Some(Finding::blocker(format!(
            "Missing substantive points. Found {bullet_count}, need at least {MIN_STRUCTURAL_LINES} bullets or structured points."
        )))
    } else {
        None
    }
}

fn check_proof(content: &Content) -> Option<Finding> {
    if patterns::has_post_proof(content.text()) {
        None
    } else {
        Some(Finding::blocker(
            "No specific proof point (number, statistic, result). Add '40% reduction', '500 companies', etc.",
        ))
    }
}

fn check_cta(content: &Content) -> Option<Finding> {
    if content.contains_any(POST_CTA) {
        None
    } else {
        Some(Finding::blocker(
            "No clear CTA. Ask for comments ('What's your experience?'), shares, or replies.",
        ))
    }
}

fn funnel_tally(content: &Content) -> Vec<StageTally> {
    FUNNEL_STAGES
        .iter()
        .map(|&(stage, words)| StageTally {
            stage,
            hits: words
                .iter()
                .filter(|word| content.lower().contains(*word))
                .count(),
        })
        .collect()
}

/// Non-blocking: a post with no funnel-stage indicators at all gets a
/// positioning warning, never a failure.
fn check_funnel(tally: &[StageTally]) -> Option<Finding> {
    if tally.iter().all(|t| t.hits == 0) {
        Some(Finding::warning(
            "Post doesn't clearly indicate TOFU/MOFU/BOFU stage. Add clearer funnel positioning.",
        ))
    } else {
        None
    }
}

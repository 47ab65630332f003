//! Freelance proposal validator: conversion-oriented structural checks.
//!
//! Like the post validator, every check runs unconditionally so the whole
//! issue list comes back in one pass.

use tracing::debug;

use crate::content::Content;
use crate::keywords::{
    GENERIC_OPENINGS, MILESTONE_WORDS, PROPOSAL_ENGAGEMENT, SPECIFICITY_MARKERS, TIMELINE_WORDS,
};
use crate::patterns;
use crate::report::{Finding, Labels, Metrics, Report};

/// Rendering labels for proposal reports.
pub const LABELS: Labels = Labels {
    heading: "Proposal Quality Issues:",
    success: "Upwork proposal meets winning standards",
    failure: "Proposal needs improvement before submitting",
    analysis: "Proposal Analysis",
    show_bullets: true,
    metrics_on_failure: true,
};

const MIN_WORDS: usize = 80;
const MAX_WORDS: usize = 350;
const MIN_BULLETS: usize = 3;
const OPENING_LINES: usize = 3;
const LINE_WIDTH: usize = 120;
const MAX_LONG_LINES: usize = 2;

/// Run every proposal check over the content and collect the findings.
#[must_use]
pub fn evaluate(content: &Content) -> Report {
    let word_count = content.word_count();
    let bullet_count = content
        .lines()
        .filter(|line| patterns::is_deliverable_line(line))
        .count();

    let mut report = Report::new(Metrics {
        word_count,
        bullet_count,
        funnel_stages: None,
    });

    let opening = content.opening(OPENING_LINES);
    let checks = [
        check_length(word_count),
        check_generic_opening(&opening),
        check_specificity(&opening),
        check_bullets(bullet_count),
        check_milestone(content),
        check_proof(content),
        check_timeline(content),
        check_rate(content),
        check_readability(content),
        check_engagement(content),
    ];
    for finding in checks.into_iter().flatten() {
        report.push(finding);
    }

    debug!(
        word_count,
        bullet_count,
        findings = report.findings.len(),
        "proposal evaluation finished"
    );
    report
}

fn check_length(word_count: usize) -> Option<Finding> {
    if word_count < MIN_WORDS {
        Some(Finding::blocker(format!(
            "Too short ({word_count} words). Need at least {MIN_WORDS} words to establish credibility."
        )))
    } else if word_count > MAX_WORDS {
        Some(Finding::blocker(format!(
            "Too long ({word_count} words). Clients won't read on mobile. Aim for 150-300 words."
        )))
    } else {
        None
    }
}

fn check_generic_opening(opening: &str) -> Option<Finding> {
    if GENERIC_OPENINGS.iter().any(|p| opening.contains(p)) {
        Some(Finding::blocker(
            "Opening is generic. Start with client's specific pain or project detail (e.g., 'I see your checkout is timing out...')",
        ))
    } else {
        None
    }
}

/// The opening must reference the client's project — shows the job post
/// was actually read.
fn check_specificity(opening: &str) -> Option<Finding> {
    if SPECIFICITY_MARKERS.iter().any(|m| opening.contains(m)) {
        None
    } else {
        Some(Finding::blocker(
            "No specific mention of their project/problem. Reference 2 details from their job post.",
        ))
    }
}

fn check_bullets(bullet_count: usize) -> Option<Finding> {
    if bullet_count < MIN_BULLETS {
        Some(Finding::blocker(format!(
            "Only {bullet_count} bullets found. Need 3-4 clear deliverables (e.g., 'Optimize database queries', 'Set up caching layer')."
        )))
    } else {
        None
    }
}

fn check_milestone(content: &Content) -> Option<Finding> {
    if content.contains_any(MILESTONE_WORDS) {
        None
    } else {
        Some(Finding::blocker(
            "No testable first milestone. Add: 'First milestone: [specific deliverable] within X days.'",
        ))
    }
}

fn check_proof(content: &Content) -> Option<Finding> {
    if patterns::has_proposal_proof(content.text()) {
        None
    } else {
        Some(Finding::blocker(
            "No proof point (number + result or link). Add: 'Reduced load time by 45%' or link to relevant work.",
        ))
    }
}

fn check_timeline(content: &Content) -> Option<Finding> {
    if content.contains_any(TIMELINE_WORDS) {
        None
    } else {
        Some(Finding::blocker(
            "No concrete timeline. Add: 'Timeline: 2 weeks' or 'Available to start by [date]'",
        ))
    }
}

/// Non-blocking: a rate mention is good practice, not a requirement.
fn check_rate(content: &Content) -> Option<Finding> {
    if patterns::has_rate_mention(content.text()) {
        None
    } else {
        Some(Finding::warning(
            "No rate/pricing mentioned. Consider adding: 'Rate: $X/hr' or 'Fixed: $Y'",
        ))
    }
}

/// Long unbroken paragraphs are unreadable on mobile. Bullet lines are
/// exempt regardless of length.
fn check_readability(content: &Content) -> Option<Finding> {
    let long_lines = content
        .lines()
        .filter(|line| line.chars().count() > LINE_WIDTH && !patterns::is_list_marker(line))
        .count();
    if long_lines > MAX_LONG_LINES {
        Some(Finding::blocker(format!(
            "{long_lines} long paragraphs (>{LINE_WIDTH} chars). Break into shorter lines for mobile readability."
        )))
    } else {
        None
    }
}

/// Non-blocking: closing without a next step weakens the proposal but
/// does not invalidate it.
fn check_engagement(content: &Content) -> Option<Finding> {
    if content.contains_any(PROPOSAL_ENGAGEMENT) {
        None
    } else {
        Some(Finding::warning(
            "No engagement question or next step. Close with: 'Happy to discuss' or 'Let's schedule a call'",
        ))
    }
}

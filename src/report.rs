//! Findings, metrics, and the report aggregator/renderer.

use std::fmt::Write;

use serde_derive::Serialize;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Blocks a passing verdict.
    #[serde(rename = "blocker")]
    Blocker,
    /// Reported for awareness only.
    #[serde(rename = "warning")]
    Warning,
}

impl Severity {
    /// Glyph prefixing the finding in text output.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Blocker => "\u{2717}",
            Self::Warning => "\u{26a0}",
        }
    }
}

/// An immutable issue description contributed by a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    /// A finding that flips the verdict to FAIL.
    #[must_use]
    pub fn blocker(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Blocker,
        }
    }

    /// An informational finding that never blocks a PASS.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Keyword hits for one funnel stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTally {
    pub stage: &'static str,
    pub hits: usize,
}

/// Numeric snapshot computed once per run and surfaced in verbose output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub word_count: usize,
    pub bullet_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funnel_stages: Option<Vec<StageTally>>,
}

/// Ordered findings plus the metric snapshot for one validator run.
///
/// The verdict is derived, never stored: FAIL if and only if at least one
/// finding is a [`Severity::Blocker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub metrics: Metrics,
}

impl Report {
    #[must_use]
    pub const fn new(metrics: Metrics) -> Self {
        Self {
            findings: Vec::new(),
            metrics,
        }
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// True when no finding blocks the verdict.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings
            .iter()
            .all(|f| f.severity != Severity::Blocker)
    }
}

/// Per-validator strings used when rendering a report as text.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// Heading of the failure block, e.g. `Post Quality Issues:`.
    pub heading: &'static str,
    /// Success line body (prefixed with `✓`, suffixed with metrics).
    pub success: &'static str,
    /// Failure summary body (prefixed with `✗`).
    pub failure: &'static str,
    /// Heading of the verbose metric block.
    pub analysis: &'static str,
    /// Include the bullet count in the metric suffix.
    pub show_bullets: bool,
    /// Append the metric suffix to the failure summary too.
    pub metrics_on_failure: bool,
}

/// Render a report as human-readable text.
///
/// PASS: a single `✓` line with key metrics. FAIL: the heading, every
/// finding on its own line prefixed by severity glyph, then a `✗` summary.
/// Verbose mode prepends the metric snapshot regardless of verdict.
#[must_use]
pub fn render_text(report: &Report, labels: &Labels, verbose: bool) -> String {
    let mut out = String::new();

    if verbose {
        let _ = writeln!(out, "{} (verbose):", labels.analysis);
        let _ = writeln!(out, "  Word count: {}", report.metrics.word_count);
        if labels.show_bullets {
            let _ = writeln!(out, "  Deliverable bullets: {}", report.metrics.bullet_count);
        }
        if let Some(ref tally) = report.metrics.funnel_stages {
            let joined = tally
                .iter()
                .map(|t| format!("{}={}", t.stage, t.hits))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "  Funnel stage indicators: {joined}");
        }
        out.push('\n');
    }

    let suffix = metric_suffix(&report.metrics, labels.show_bullets);

    if report.passed() {
        let _ = write!(out, "\u{2713} {} {suffix}", labels.success);
    } else {
        let _ = writeln!(out, "{}", labels.heading);
        for finding in &report.findings {
            let _ = writeln!(out, "  {} {}", finding.severity.prefix(), finding.message);
        }
        if labels.metrics_on_failure {
            let _ = write!(out, "\n\u{2717} {} {suffix}", labels.failure);
        } else {
            let _ = write!(out, "\n\u{2717} {}", labels.failure);
        }
    }

    out
}

/// Render a report as JSON (findings, metrics, derived verdict).
///
/// # Errors
/// When serialization fails.
pub fn render_json(report: &Report) -> crate::error::Result<String> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        verdict: &'static str,
        findings: &'a [Finding],
        metrics: &'a Metrics,
    }

    let payload = JsonReport {
        verdict: if report.passed() { "pass" } else { "fail" },
        findings: &report.findings,
        metrics: &report.metrics,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

fn metric_suffix(metrics: &Metrics, show_bullets: bool) -> String {
    if show_bullets {
        format!(
            "({} words, {} bullets)",
            metrics.word_count, metrics.bullet_count
        )
    } else {
        format!("({} words)", metrics.word_count)
    }
}

//! Shared pattern-matching utilities.
//!
//! Bullet detection mixes regex scanning with Unicode-glyph membership, so
//! both live behind a single "is this line a structural bullet" predicate
//! per validator. Regexes are compiled once, on first use.

use std::sync::OnceLock;

use regex::Regex;

/// Unicode glyphs that mark a bullet line regardless of ASCII markers.
pub const BULLET_GLYPHS: [char; 3] = ['\u{2022}', '\u{2023}', '\u{25cf}'];

fn post_bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*[-*]\s+.{15,}|^\s*\d+\.\s+.{15,}|^[A-Z][a-z]+.*?[:→\-]")
            .expect("built-in pattern is valid")
    })
}

fn deliverable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*[-*]\s+[A-Za-z].{15,}|^\s*\d+\.\s+[A-Za-z].{15,}")
            .expect("built-in pattern is valid")
    })
}

fn numbered_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.").expect("built-in pattern is valid"))
}

fn post_proof_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\d+%|\d+[-/]\d+|[$£€]\d+|~?\d+\+?\s+(?:users|companies|people|clients|hours|weeks|days|months|projects)",
        )
        .expect("built-in pattern is valid")
    })
}

fn proposal_proof_res() -> &'static [Regex; 4] {
    static RES: OnceLock<[Regex; 4]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"\d+%").expect("built-in pattern is valid"),
            Regex::new(r"(?i)\d+\+?\s+(?:clients|companies|projects|users|hours)")
                .expect("built-in pattern is valid"),
            Regex::new(r"(?i)(?:reduced|improved|increased|optimized|fixed).*?\d+")
                .expect("built-in pattern is valid"),
            Regex::new(r"(?i)https?://\S+|portfolio|case study|link")
                .expect("built-in pattern is valid"),
        ]
    })
}

fn rate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\$\d+|hourly|fixed|rate|pricing").expect("built-in pattern is valid")
    })
}

fn has_glyph(line: &str) -> bool {
    line.chars().any(|c| BULLET_GLYPHS.contains(&c))
}

/// True when the line is a structural bullet for a social post: an ASCII
/// list marker with at least 15 chars of substance, a `Capitalized
/// lead-in:` line, or any Unicode bullet glyph.
#[must_use]
pub fn is_structural_line(line: &str) -> bool {
    post_bullet_re().is_match(line) || has_glyph(line)
}

/// True when the line is a deliverable bullet for a proposal. Stricter
/// than [`is_structural_line`]: the marker must be followed by a letter,
/// and Unicode-glyph lines only count with more than 20 chars in total.
#[must_use]
pub fn is_deliverable_line(line: &str) -> bool {
    deliverable_re().is_match(line) || (has_glyph(line) && line.chars().count() > 20)
}

/// True when the line opens with a list marker. Used to exempt bullets
/// from the long-line readability check.
#[must_use]
pub fn is_list_marker(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with(['-', '*', '\u{2022}']) || numbered_marker_re().is_match(trimmed)
}

/// True when the text carries a post-grade proof point: a percentage, an
/// `N-M`/`N/M` figure, a currency amount, or a count with a unit noun.
#[must_use]
pub fn has_post_proof(text: &str) -> bool {
    post_proof_re().is_match(text)
}

/// True when the text carries a proposal-grade proof point: a percentage,
/// a count with a unit noun, a result verb followed by a number, or a
/// URL/portfolio/case-study mention.
#[must_use]
pub fn has_proposal_proof(text: &str) -> bool {
    proposal_proof_res().iter().any(|re| re.is_match(text))
}

/// True when the text mentions a rate or pricing model.
#[must_use]
pub fn has_rate_mention(text: &str) -> bool {
    rate_re().is_match(text)
}

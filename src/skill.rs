//! Skill documentation validator.
//!
//! Unlike the copy validators this one short-circuits: each check is a
//! structural precondition for the next (the body can only be sliced once
//! the front matter is known to be well formed), so the first violation
//! halts verification.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde_derive::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const SKILL_FILE: &str = "SKILL.md";
const REFERENCES_DIR: &str = "references";

/// Expectations a skill directory must meet.
///
/// Loadable from YAML so skills other than the built-in one can be
/// verified with the same engine.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillProfile {
    /// Identifier the front matter `name` must equal.
    pub name: String,
    /// Phrase the front matter description must contain.
    #[serde(default = "default_trigger")]
    pub trigger_phrase: String,
    /// Section headings that must all appear in the body.
    pub required_sections: Vec<String>,
    /// Language tag of the required fenced code blocks.
    pub code_fence_lang: String,
    /// Minimum number of fenced code blocks of that language.
    pub min_code_blocks: usize,
    /// At least one of these patterns must appear in the body.
    #[serde(default)]
    pub example_patterns: Vec<String>,
    #[serde(default = "default_min_lines")]
    pub min_lines: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

fn default_trigger() -> String {
    "Use when".to_string()
}

const fn default_min_lines() -> usize {
    100
}

const fn default_max_lines() -> usize {
    600
}

impl SkillProfile {
    /// Built-in profile for the SQLModel schema-design skill.
    #[must_use]
    pub fn sqlmodel() -> Self {
        Self {
            name: "designing-with-sqlmodel".to_string(),
            trigger_phrase: default_trigger(),
            required_sections: [
                "# SQLModel Schema Designer",
                "## When to Use This Skill",
                "## Quick Start",
                "## Core Concepts",
                "## Key Pattern",
                "## Database Models",
                "## Database Connection",
                "## Instructions",
                "## Common Patterns",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            code_fence_lang: "python".to_string(),
            min_code_blocks: 8,
            example_patterns: vec![
                "class Task(SQLModel".to_string(),
                "class Task(TaskBase".to_string(),
            ],
            min_lines: default_min_lines(),
            max_lines: default_max_lines(),
        }
    }

    /// Load a profile from a YAML file.
    ///
    /// # Errors
    /// When the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        Ok(serde_yaml::from_str(&std::fs::read_to_string(path)?)?)
    }
}

/// The front matter keys the validator cares about.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSummary {
    pub name: String,
    pub line_count: usize,
    pub reference_files: usize,
}

fn front_matter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^---\n(.*?)\n---").expect("built-in pattern is valid"))
}

fn fail(message: impl Into<String>) -> Error {
    Error::Structure(message.into())
}

/// Verify a skill directory against the profile.
///
/// # Errors
/// [`Error::Structure`] with the first violated precondition; `Io` when
/// the document exists but cannot be read.
pub fn verify(dir: &Path, profile: &SkillProfile) -> Result<SkillSummary> {
    let skill_md = dir.join(SKILL_FILE);
    if !skill_md.is_file() {
        return Err(fail("SKILL.md not found"));
    }
    let content = std::fs::read_to_string(&skill_md)?;

    if !content.starts_with("---") {
        return Err(fail("Missing YAML frontmatter delimiter"));
    }
    let caps = front_matter_re()
        .captures(&content)
        .ok_or_else(|| fail("Malformed YAML frontmatter"))?;
    let front: FrontMatter =
        serde_yaml::from_str(&caps[1]).map_err(|_| fail("Malformed YAML frontmatter"))?;

    if front.name.as_deref() != Some(profile.name.as_str()) {
        return Err(fail("Missing or incorrect skill name"));
    }
    let description = front
        .description
        .ok_or_else(|| fail("Missing description field"))?;
    if !description.contains(&profile.trigger_phrase) {
        return Err(fail(format!(
            "Description missing '{}' trigger",
            profile.trigger_phrase
        )));
    }

    // Body = everything after the closing front-matter delimiter.
    let body = content.splitn(3, "---").nth(2).unwrap_or("");

    let missing: Vec<&str> = profile
        .required_sections
        .iter()
        .map(String::as_str)
        .filter(|section| !body.contains(section))
        .collect();
    if !missing.is_empty() {
        return Err(fail(format!("Missing sections: {}", missing.join(", "))));
    }

    let fence = format!("```{}", profile.code_fence_lang);
    let code_blocks = body.matches(fence.as_str()).count();
    if code_blocks < profile.min_code_blocks {
        return Err(fail(format!(
            "Only {code_blocks} code examples. Need at least {}.",
            profile.min_code_blocks
        )));
    }

    if !profile.example_patterns.is_empty()
        && !profile.example_patterns.iter().any(|p| body.contains(p))
    {
        return Err(fail(format!(
            "Missing expected example pattern ({})",
            profile.example_patterns.join(" or ")
        )));
    }

    let line_count = content.matches('\n').count();
    if line_count < profile.min_lines {
        return Err(fail(format!(
            "SKILL.md too short ({line_count} lines). Should be 150+ lines."
        )));
    }
    if line_count > profile.max_lines {
        return Err(fail(format!(
            "SKILL.md too long ({line_count} lines). Keep under 500 lines."
        )));
    }

    let references_dir = dir.join(REFERENCES_DIR);
    if !references_dir.is_dir() {
        return Err(fail("Missing references/ directory"));
    }
    let reference_files = std::fs::read_dir(&references_dir)?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .count();
    if reference_files == 0 {
        return Err(fail("No reference files in references/ directory"));
    }

    debug!(name = %profile.name, line_count, reference_files, "skill document verified");
    Ok(SkillSummary {
        name: profile.name.clone(),
        line_count,
        reference_files,
    })
}

#[cfg(test)]
mod test_skill {
    use super::*;

    #[test]
    fn built_in_profile_is_self_consistent() {
        let profile = SkillProfile::sqlmodel();
        assert_eq!(profile.name, "designing-with-sqlmodel");
        assert!(profile.min_lines < profile.max_lines);
        assert!(profile
            .required_sections
            .contains(&"## Instructions".to_string()));
    }

    #[test]
    fn profile_loads_from_yaml() {
        let yaml = r"
name: writing-release-notes
required_sections:
  - '# Release Notes'
  - '## Instructions'
code_fence_lang: markdown
min_code_blocks: 2
";
        let profile: SkillProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.name, "writing-release-notes");
        assert_eq!(profile.trigger_phrase, "Use when");
        assert_eq!(profile.min_lines, 100);
        assert_eq!(profile.max_lines, 600);
        assert!(profile.example_patterns.is_empty());
    }

    #[test]
    fn front_matter_regex_requires_closing_delimiter() {
        assert!(front_matter_re()
            .captures("---\nname: x\n---\nbody")
            .is_some());
        assert!(front_matter_re().captures("---\nname: x\nbody").is_none());
    }
}

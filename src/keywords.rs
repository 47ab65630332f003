//! Fixed keyword tables used by the checks.
//!
//! Kept as named constants rather than inline literals so tests can
//! enumerate and extend them independently of the check logic. Entries are
//! lowercase; matching is substring containment against lowercased content.

/// Pain-point words that qualify an opening as a hook.
pub const PAIN_WORDS: &[&str] = &[
    "problem",
    "struggling",
    "challenge",
    "broken",
    "mistake",
    "loss",
    "wrong",
];

/// Insight-framing words that qualify an opening as a hook.
pub const INSIGHT_WORDS: &[&str] = &[
    "surprising",
    "secret",
    "why",
    "here's",
    "discovered",
    "learned",
];

/// Call-to-action verbs and phrases expected somewhere in a post.
pub const POST_CTA: &[&str] = &[
    "reply",
    "comment",
    "share",
    "dm",
    "message",
    "discuss",
    "let me know",
    "what",
    "tell me",
    "your thoughts",
    "ask",
    "reach out",
    "book",
    "contact",
    "link",
];

/// Openings that read like a template rather than the client's job post.
pub const GENERIC_OPENINGS: &[&str] = &[
    "i am a talented",
    "i have experience",
    "i am an expert",
    "my name is",
    "thanks for the opportunity",
    "interested in this project",
];

/// Markers showing a proposal references the client's actual project.
pub const SPECIFICITY_MARKERS: &[&str] = &[
    "you mentioned",
    "i see your",
    "i notice",
    "your ",
    "based on your",
    "your project",
    "specifically",
    "particular",
    "specific",
];

/// Words that signal a testable first milestone.
pub const MILESTONE_WORDS: &[&str] = &["milestone", "first week", "within", "days", "by", "complete"];

/// Words that signal a concrete timeline.
pub const TIMELINE_WORDS: &[&str] = &["week", "days", "hours", "start", "available"];

/// Closing phrases that invite the client to a next step.
pub const PROPOSAL_ENGAGEMENT: &[&str] = &[
    "question",
    "discuss",
    "chat",
    "call",
    "talk",
    "next",
    "schedule",
    "available",
    "ready",
];

/// Funnel stages with the keywords that signal each one.
pub const FUNNEL_STAGES: &[(&str, &[&str])] = &[
    (
        "TOFU",
        &["trend", "question", "framework", "insight", "why", "problem"],
    ),
    (
        "MOFU",
        &[
            "how",
            "guide",
            "process",
            "step",
            "analyze",
            "framework",
            "methodology",
        ],
    ),
    (
        "BOFU",
        &[
            "result", "save", "reduce", "improve", "roi", "deliver", "client", "proven",
        ],
    ),
];

#[cfg(test)]
mod test_keywords {
    use super::*;

    #[test]
    fn all_tables_are_lowercase() {
        let tables: &[&[&str]] = &[
            PAIN_WORDS,
            INSIGHT_WORDS,
            POST_CTA,
            GENERIC_OPENINGS,
            SPECIFICITY_MARKERS,
            MILESTONE_WORDS,
            TIMELINE_WORDS,
            PROPOSAL_ENGAGEMENT,
        ];
        for table in tables {
            for word in *table {
                assert_eq!(
                    *word,
                    word.to_lowercase(),
                    "keyword {word:?} must be lowercase"
                );
            }
        }
        for (_, words) in FUNNEL_STAGES {
            for word in *words {
                assert_eq!(*word, word.to_lowercase());
            }
        }
    }

    #[test]
    fn every_funnel_stage_has_keywords() {
        assert_eq!(FUNNEL_STAGES.len(), 3);
        for (stage, words) in FUNNEL_STAGES {
            assert!(!words.is_empty(), "stage {stage} has no keywords");
        }
    }
}

//! Skill directory verification against the built-in profile, on real
//! fixture trees.

use copycheck::skill::{self, SkillProfile};
use copycheck::Error;

const SECTIONS: [&str; 9] = [
    "# SQLModel Schema Designer",
    "## When to Use This Skill",
    "## Quick Start",
    "## Core Concepts",
    "## Key Pattern",
    "## Database Models",
    "## Database Connection",
    "## Instructions",
    "## Common Patterns",
];

/// A SKILL.md that satisfies every check of the built-in profile. With
/// `pad` the document is stretched past the minimum line count.
fn skill_md(pad: bool) -> String {
    let mut doc = String::from(
        "---\n\
         name: designing-with-sqlmodel\n\
         description: Design SQLModel table schemas. Use when modeling database tables.\n\
         ---\n\n",
    );
    for section in SECTIONS {
        doc.push_str(section);
        doc.push_str("\n\n```python\nclass Task(SQLModel, table=True):\n    id: int | None = None\n```\n\n");
    }
    if pad {
        while doc.matches('\n').count() < 160 {
            doc.push_str("Field defaults belong on the base model, not the table model.\n");
        }
    }
    doc
}

fn fixture(doc: &str) -> tree_fs::Tree {
    tree_fs::TreeBuilder::default()
        .add("SKILL.md", doc)
        .add("references/models.md", "# Model reference\n")
        .create()
        .expect("Failed to create fixture tree")
}

fn structure_error(res: copycheck::Result<skill::SkillSummary>) -> String {
    match res {
        Err(Error::Structure(msg)) => msg,
        other => panic!("expected a structure error, got {other:?}"),
    }
}

#[test]
fn valid_skill_directory_verifies() {
    let tree = fixture(&skill_md(true));
    let summary = skill::verify(&tree.root, &SkillProfile::sqlmodel()).unwrap();
    assert_eq!(summary.name, "designing-with-sqlmodel");
    assert!(summary.line_count >= 100);
    assert_eq!(summary.reference_files, 1);
}

#[test]
fn missing_skill_file_is_the_first_failure() {
    let tree = tree_fs::TreeBuilder::default()
        .add("references/models.md", "# Model reference\n")
        .create()
        .expect("Failed to create fixture tree");
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "SKILL.md not found");
}

#[test]
fn document_without_front_matter_is_rejected() {
    let tree = fixture("# SQLModel Schema Designer\nNo front matter here.\n");
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Missing YAML frontmatter delimiter");
}

#[test]
fn wrong_skill_name_is_rejected() {
    let doc = skill_md(true).replace("designing-with-sqlmodel", "another-skill");
    let tree = fixture(&doc);
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Missing or incorrect skill name");
}

#[test]
fn description_without_trigger_phrase_is_rejected() {
    let doc = skill_md(true).replace("Use when", "Apply whenever");
    let tree = fixture(&doc);
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Description missing 'Use when' trigger");
}

#[test]
fn missing_section_is_named_in_the_error() {
    let doc = skill_md(true).replace("## Instructions", "## Other Notes");
    let tree = fixture(&doc);
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Missing sections: ## Instructions");
}

#[test]
fn too_few_code_blocks_is_rejected() {
    let doc = skill_md(true).replace("```python", "```text");
    let tree = fixture(&doc);
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Only 0 code examples. Need at least 8.");
}

#[test]
fn short_document_is_rejected() {
    let doc = skill_md(false);
    let lines = doc.matches('\n').count();
    assert!(lines < 100);
    let tree = fixture(&doc);
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(
        msg,
        format!("SKILL.md too short ({lines} lines). Should be 150+ lines.")
    );
}

#[test]
fn missing_references_directory_is_rejected() {
    let tree = tree_fs::TreeBuilder::default()
        .add("SKILL.md", &skill_md(true))
        .create()
        .expect("Failed to create fixture tree");
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Missing references/ directory");
}

#[test]
fn references_directory_needs_at_least_one_markdown_file() {
    let tree = tree_fs::TreeBuilder::default()
        .add("SKILL.md", &skill_md(true))
        .add("references/scratch.txt", "not markdown\n")
        .create()
        .expect("Failed to create fixture tree");
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "No reference files in references/ directory");
}

#[test]
fn name_check_short_circuits_ahead_of_section_checks() {
    let doc = skill_md(true)
        .replace("designing-with-sqlmodel", "another-skill")
        .replace("## Instructions", "## Other Notes");
    let tree = fixture(&doc);
    let msg = structure_error(skill::verify(&tree.root, &SkillProfile::sqlmodel()));
    assert_eq!(msg, "Missing or incorrect skill name");
}

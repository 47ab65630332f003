//! copycheck — heuristic structural quality checks for persuasive copy
//! (social posts, freelance proposals) and skill documentation.
//!
//! The engine is a family of independent validators built from the same
//! shape: a set of checks, each a pure function over a [`Content`], each
//! contributing zero or more severity-tagged findings to a [`Report`].
//! The verdict is derived — FAIL iff any finding is a blocker. The copy
//! validators never short-circuit; the skill validator deliberately does
//! (its checks are ordered structural preconditions).
//!
//! The library holds no global state and does no output configuration of
//! its own; logging and terminal setup belong to the CLI entry point.

pub mod content;
pub mod data;
pub mod error;
pub mod keywords;
pub mod patterns;
pub mod post;
pub mod proposal;
pub mod report;
pub mod skill;

pub use content::Content;
pub use data::CmdExit;
pub use error::{Error, Result};
pub use report::{Finding, Metrics, Report, Severity};

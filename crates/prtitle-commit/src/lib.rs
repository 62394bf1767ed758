//! # prtitle-commit
//!
//! Conventional Commits capability for the pull-request title validator.
//!
//! The grammar is owned by an external engine. This crate wraps it behind
//! the [`ConventionalParser`] trait so the orchestration only ever sees two
//! operations:
//!
//! - [`ConventionalParser::parse`] — text to [`CommitAst`], or a [`CommitError`]
//! - [`ConventionalParser::normalize`] — [`CommitAst`] to the flat
//!   [`NormalizedCommit`] record (`type`, `scope`, `subject`, `notes`)
//!
//! ## Quick Example
//!
//! ```rust
//! use prtitle_commit::{ConventionalParser, GitConventionalParser};
//!
//! let parser = GitConventionalParser::new();
//! let ast = parser.parse("fix(main)!: undo the confrigulators").unwrap();
//! let commit = parser.normalize(&ast);
//! assert_eq!(commit.commit_type, "fix");
//! assert!(commit.is_breaking());
//! ```

pub mod ast;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod parser;

pub use ast::{CommitAst, CommitFooter, CommitHeader};
pub use engine::GitConventionalParser;
pub use error::CommitError;
pub use normalize::{normalize, NormalizedCommit, Note, BREAKING_CHANGE};
pub use parser::ConventionalParser;

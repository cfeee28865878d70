//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (blank, rule, heading, fence, quote, ...)
//!
//! 2. **Block Construction** (`builder`): a `BlockParser` walks a `LineCursor`,
//!    dispatches each line to one rule and emits `ContentBlock`s
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific syntax with owned delimiters (BlockQuote,
//!   CodeFence, CalloutFence, PipeTable, ...)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockParser` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Dispatch precedence is fixed: rule, hero metadata, heading, callout fence,
//!   blockquote, hero bold line, image, emoji shortcut, list, code fence, pipe
//!   table, paragraph
//! - Fenced code and callout bodies are raw zones: no block parsing inside
//! - No input is rejected; unmatched lines become paragraph text

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockParser;
pub use classify::{LineClass, LineClassifier, LineKind};

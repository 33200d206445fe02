//! # Block Segmentation
//!
//! Splits stylesheet text into blocks that can be reordered independently.
//!
//! ## Parsing Phases
//!
//! 1. **Line recognition** (`comments`, `property`): each line is checked on
//!    its own for comment shapes and for a `name: value` declaration start
//!
//! 2. **Segmentation** (`segmenter`): a `Segmenter` state machine walks the
//!    lines once and emits `Block`s, attaching leading comments to the
//!    declaration below them and degrading anything ambiguous to pass-through
//!
//! ## Modules
//!
//! - **`lines`**: `LineEnding` detection and line splitting
//! - **`range`**: `LineRange`, inclusive line spans
//! - **`comments`**: comment recognition and stripping
//! - **`property`**: `extract_property_name`
//! - **`blocks`**: `Block`, `PropertyBlock`, `PassThroughBlock`
//! - **`segmenter`**: the `Segmenter` state machine
//! - **`invariants`**: coverage checks used by tests
//!
//! ## Key Invariants
//!
//! - Block ranges tile the input: contiguous, non-overlapping, every line once
//! - Rendering all blocks in order reproduces the input byte-for-byte
//! - Segmentation never fails; the worst case is all pass-through

pub mod blocks;
pub mod comments;
pub mod invariants;
pub mod lines;
pub mod property;
pub mod range;
pub mod segmenter;

#[cfg(test)]
mod tests;

pub use blocks::{Block, PassThroughBlock, PassThroughKind, PropertyBlock};
pub use lines::{LineEnding, split_lines};
pub use property::extract_property_name;
pub use range::LineRange;
pub use segmenter::{Segmenter, UnterminatedPolicy};

/// Partitions `lines` into property and pass-through blocks.
pub fn segment<S: AsRef<str>>(lines: &[S], unterminated: UnterminatedPolicy) -> Vec<Block> {
    Segmenter::new(lines, unterminated).run()
}

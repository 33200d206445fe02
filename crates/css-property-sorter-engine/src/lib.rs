pub mod editing;
pub mod ordering;
pub mod parsing;
pub mod sorting;

// Re-export key types for easier usage
pub use editing::{Document, Selection, SortOutcome, sort_file, sort_selections};
pub use ordering::{BlockComparator, OrderingPolicy, SortMode, UnknownPlacement};
pub use parsing::{Block, PassThroughKind, PropertyBlock, UnterminatedPolicy, segment};
pub use sorting::{SortedSpan, scan_and_sort, sort_text};

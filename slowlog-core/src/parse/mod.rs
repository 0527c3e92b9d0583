//! Slow-log block reconstruction.
//!
//! A slow-log dump has no record delimiter. Each record is a block of lines:
//!
//! ```text
//! 5            id
//! 1609459200   timestamp (unix seconds)
//! 1500.0       duration (microseconds)
//! GET          command
//! mykey        key         (optional)
//! ...          parameters  (optional, any number)
//! ```
//!
//! Once a block has its four header lines, any following line that parses as
//! an integer exactly one away from the block's id is taken as the id of the
//! next block. Slow-log ids are consecutive, so this is how blocks are split.
//!
//! The parser is a lazy iterator: records are yielded as soon as their
//! boundary is seen and nothing is buffered beyond the block in progress.

mod block;
mod numeric;

pub use block::{BlockParser, HEADER_LINES, parse_file, parse_reader};
pub use numeric::{parse_float, parse_int};

/// What to do with the block still open when the input ends.
///
/// Blocks that have not reached their fourth header line are always dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBlock {
    /// Emit the last block if it has all four header lines.
    #[default]
    Flush,
    /// Never emit the last block.
    Drop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub trailing_block: TrailingBlock,
}

//! Terminal presentation building blocks.
//!
//! This module provides:
//! - [`Theme`], [`Segment`] and [`Tone`] for styling text after layout
//! - [`Table`] for column-aligned rows
//! - [`DirectoryNode`] for box-drawn directory trees
//!
//! # Example
//!
//! ```
//! use lintree::ui::{Segment, Table, Theme, Tone};
//!
//! let mut table = Table::new();
//! table.add_row(vec![Segment::plain(""), Segment::new("1:1", Tone::Position)]);
//! assert_eq!(table.render(&Theme::plain()), "  1:1");
//! ```

pub mod table;
pub mod theme;
pub mod tree;

pub use table::Table;
pub use theme::{should_use_colors, Segment, Theme, Tone};
pub use tree::DirectoryNode;

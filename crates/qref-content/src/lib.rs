//! Compiled-in cheat-sheet catalog for QREF.
//!
//! This crate provides:
//! - [`TopicDocument`]: one unit of displayable content, identified by
//!   (language, title)
//! - [`MenuGroup`]: ordered sidebar grouping of topic titles for one language
//! - [`ContentLibrary`]: the static document store with O(1) lookup and a
//!   load-time invariant check
//!
//! All content is embedded at build time via `include_str!`. The library is
//! built once at startup and never mutated afterwards.
//!
//! # Quick Start
//!
//! ```
//! use qref_content::ContentLibrary;
//!
//! let library = ContentLibrary::builtin();
//! library.validate().expect("catalog is internally consistent");
//!
//! let doc = library.lookup("c", "Linked Lists").unwrap();
//! assert_eq!(doc.group, "Data Structures");
//! ```

mod catalog;
mod document;
mod library;

pub use document::{MenuGroup, TopicDocument};
pub use library::{ContentError, ContentLibrary, LibraryBuilder};

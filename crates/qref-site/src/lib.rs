//! Navigation and content routing for QREF.
//!
//! This crate wires the static [`ContentLibrary`](qref_content::ContentLibrary)
//! to the renderer:
//! - [`Selection`]: the active (language, optional title) pair
//! - [`ContentRouter`]: resolves a selection to rendered content or a
//!   placeholder
//!
//! Resolution is deliberately three-way ([`ResolvedContent`]): no selection,
//! document found, or document missing. Navigation state and content
//! existence are decoupled so a menu entry without a backing document
//! degrades to an "unavailable" placeholder instead of an error.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use qref_content::ContentLibrary;
//! use qref_site::{ContentRouter, ResolvedContent, Selection};
//!
//! let router = ContentRouter::new(Arc::new(ContentLibrary::builtin()));
//! let selection = Selection::new("c").select("Linked Lists");
//!
//! match router.resolve(&selection) {
//!     ResolvedContent::Page(page) => assert!(page.html.contains("Linked Lists")),
//!     _ => unreachable!("built-in catalog has this topic"),
//! }
//! ```

mod router;
mod selection;

pub use router::{ContentRouter, RenderedPage, ResolvedContent};
pub use selection::Selection;

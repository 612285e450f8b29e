//! Markdown-to-HTML renderer for QREF topic documents.
//!
//! [`MarkdownRenderer`] converts a markdown body into HTML, preserving block
//! boundaries (paragraphs, headings with anchor ids, horizontal rules,
//! fenced code blocks) and collecting a table of contents. Fenced code
//! blocks carry a `language-*` class resolved through the
//! [`HighlightRegistry`]; unrecognized tags fall back to the tag itself so
//! an unknown language is never a hard failure.
//!
//! Rendering is stateless and idempotent: the renderer holds only
//! configuration, so the same input always yields the same output.
//!
//! # Example
//!
//! ```
//! use qref_renderer::{HighlightRegistry, MarkdownRenderer};
//!
//! let registry = HighlightRegistry::with_defaults();
//! let renderer = MarkdownRenderer::new(&registry);
//! let result = renderer.render_markdown("## Hello\n\n**Bold** text");
//! assert!(result.html.contains("<strong>Bold</strong>"));
//! ```

mod highlight;
mod renderer;
mod util;

pub use highlight::{HighlightRegistry, HighlightRules};
pub use renderer::{MarkdownRenderer, RenderResult, TocEntry};
pub use util::escape_html;

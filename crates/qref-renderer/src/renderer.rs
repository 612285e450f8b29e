//! Markdown renderer.

use std::collections::HashMap;
use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::highlight::HighlightRegistry;
use crate::util::{escape_html, slugify};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text with inline markup stripped.
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Title extracted from the first H1 heading (if enabled).
    pub title: Option<String>,
    /// Table of contents entries in document order.
    pub toc: Vec<TocEntry>,
}

/// Markdown-to-HTML renderer.
///
/// Holds only configuration (the highlight registry and the title
/// extraction flag), so rendering is a pure function of its input: the same
/// document body always produces the same [`RenderResult`].
pub struct MarkdownRenderer<'r> {
    registry: &'r HighlightRegistry,
    extract_title: bool,
}

impl<'r> MarkdownRenderer<'r> {
    /// Create a renderer using `registry` for code block language classes.
    #[must_use]
    pub fn new(registry: &'r HighlightRegistry) -> Self {
        Self {
            registry,
            extract_title: false,
        }
    }

    /// Enable title extraction from the first H1 heading.
    ///
    /// The H1 is still rendered; its text is additionally reported in
    /// [`RenderResult::title`] and excluded from the table of contents.
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.extract_title = true;
        self
    }

    /// Render markdown text.
    #[must_use]
    pub fn render_markdown(&self, markdown: &str) -> RenderResult {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let mut writer = HtmlWriter::new(self.registry, self.extract_title);

        for event in Parser::new_ext(markdown, options) {
            writer.event(event);
        }
        writer.finish()
    }
}

/// Heading being captured: text for the slug/ToC, HTML for the output.
struct HeadingCapture {
    level: u8,
    text: String,
    html: String,
}

/// Fenced code block being captured.
struct CodeCapture {
    lang: Option<String>,
    content: String,
}

/// Per-render state walking the pulldown-cmark event stream.
struct HtmlWriter<'r> {
    registry: &'r HighlightRegistry,
    extract_title: bool,
    out: String,
    title: Option<String>,
    toc: Vec<TocEntry>,
    slug_counts: HashMap<String, usize>,
    heading: Option<HeadingCapture>,
    code: Option<CodeCapture>,
    image_alt: Option<String>,
    pending_image: Option<(String, String)>,
    in_table_head: bool,
}

impl<'r> HtmlWriter<'r> {
    fn new(registry: &'r HighlightRegistry, extract_title: bool) -> Self {
        Self {
            registry,
            extract_title,
            out: String::with_capacity(4096),
            title: None,
            toc: Vec::new(),
            slug_counts: HashMap::new(),
            heading: None,
            code: None,
            image_alt: None,
            pending_image: None,
            in_table_head: false,
        }
    }

    fn finish(self) -> RenderResult {
        RenderResult {
            html: self.out,
            title: self.title,
            toc: self.toc,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.push_inline(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.out.push_str("<hr>"),
            Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    /// Push inline content to the active heading buffer or the output.
    fn push_inline(&mut self, content: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.html.push_str(content);
        } else {
            self.out.push_str(content);
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.out.push_str("<p>"),
            Tag::Heading { level, .. } => {
                // Written in end_tag once the anchor id is known.
                self.heading = Some(HeadingCapture {
                    level: heading_level_to_num(level),
                    text: String::new(),
                    html: String::new(),
                });
            }
            Tag::BlockQuote(_) => self.out.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => fence_language(info),
                    _ => None,
                };
                self.code = Some(CodeCapture {
                    lang,
                    content: String::new(),
                });
            }
            Tag::List(start) => match start {
                Some(1) => self.out.push_str("<ol>"),
                Some(n) => write!(self.out, r#"<ol start="{n}">"#).unwrap(),
                None => self.out.push_str("<ul>"),
            },
            Tag::Item => self.out.push_str("<li>"),
            Tag::Table(_) => self.out.push_str("<table>"),
            Tag::TableHead => {
                self.in_table_head = true;
                self.out.push_str("<thead><tr>");
            }
            Tag::TableRow => self.out.push_str("<tr>"),
            Tag::TableCell => {
                self.out
                    .push_str(if self.in_table_head { "<th>" } else { "<td>" });
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                let link = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Collect alt text; the tag is written in end_tag.
                self.image_alt = Some(String::new());
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.out.push_str("</p>"),
            TagEnd::Heading(_) => self.complete_heading(),
            TagEnd::BlockQuote(_) => self.out.push_str("</blockquote>"),
            TagEnd::CodeBlock => self.complete_code_block(),
            TagEnd::List(ordered) => {
                self.out.push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.out.push_str("</li>"),
            TagEnd::Table => self.out.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.out.push_str("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.out.push_str("</tr>"),
            TagEnd::TableCell => {
                self.out
                    .push_str(if self.in_table_head { "</th>" } else { "</td>" });
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                let alt = self.image_alt.take().unwrap_or_default();
                if let Some((src, title)) = self.pending_image.take() {
                    self.write_image(&src, &alt, &title);
                }
            }
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = self.code.as_mut() {
            code.content.push_str(text);
        } else if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(text);
        } else if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(text);
            heading.html.push_str(&escape_html(text));
        } else {
            self.out.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        let html = format!("<code>{}</code>", escape_html(code));
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(code);
            heading.html.push_str(&html);
        } else {
            self.out.push_str(&html);
        }
    }

    fn soft_break(&mut self) {
        if let Some(code) = self.code.as_mut() {
            code.content.push('\n');
        } else if let Some(heading) = self.heading.as_mut() {
            heading.text.push(' ');
            heading.html.push('\n');
        } else {
            self.out.push('\n');
        }
    }

    /// Write the completed heading with a deduplicated anchor id.
    fn complete_heading(&mut self) {
        let Some(heading) = self.heading.take() else {
            return;
        };
        let id = self.unique_slug(&heading.text);
        let level = heading.level;
        write!(
            self.out,
            r#"<h{level} id="{id}">{}</h{level}>"#,
            heading.html.trim()
        )
        .unwrap();

        let text = heading.text.trim().to_owned();
        if self.extract_title && level == 1 && self.title.is_none() {
            // First H1 becomes the title and stays out of the ToC.
            self.title = Some(text);
        } else {
            self.toc.push(TocEntry {
                level,
                title: text,
                id,
            });
        }
    }

    /// Write the completed code block with its highlight class.
    fn complete_code_block(&mut self) {
        let Some(code) = self.code.take() else {
            return;
        };
        match code.lang.as_deref() {
            Some(tag) => {
                // Known tags resolve to their canonical id; unknown tags
                // pass through unhighlighted rather than failing.
                let id = self
                    .registry
                    .resolve(tag)
                    .map_or_else(|| escape_html(tag), |rules| rules.id.clone());
                write!(
                    self.out,
                    r#"<pre><code class="language-{id}">{}</code></pre>"#,
                    escape_html(&code.content)
                )
                .unwrap();
            }
            None => {
                write!(
                    self.out,
                    "<pre><code>{}</code></pre>",
                    escape_html(&code.content)
                )
                .unwrap();
            }
        }
    }

    fn write_image(&mut self, src: &str, alt: &str, title: &str) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            self.out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }

    /// Slug for `text`, suffixed with a counter on repeats.
    fn unique_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.slug_counts.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        id
    }
}

/// Language tag from fence info: the first token, up to whitespace or comma.
fn fence_language(info: &str) -> Option<String> {
    let tag = info
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or_default();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_owned())
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

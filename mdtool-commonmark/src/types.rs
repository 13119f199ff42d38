//! Types shared between the processor and its consumers.

/// Switches for the Markdown renderer.
///
/// Every flag defaults to `false`. The value is built once from the command
/// line and handed to [`crate::MarkdownProcessor::new`] by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct RenderOptions {
  /// Pass raw HTML in the source through to the output. When disabled, raw
  /// HTML is escaped.
  pub html: bool,

  /// Enable GFM-style tables.
  pub tables: bool,

  /// Turn bare URLs into links.
  pub linkify: bool,

  /// Typographic substitutions (smart quotes, dashes, ellipses).
  pub typographer: bool,

  /// Emit XHTML-style self-closed void elements.
  pub xhtml: bool,
}

impl RenderOptions {
  /// Enable HTML passthrough, tables, autolinking and typographic
  /// substitutions. Leaves `xhtml` untouched.
  #[must_use]
  pub const fn with_all_extensions(mut self) -> Self {
    self.html = true;
    self.tables = true;
    self.linkify = true;
    self.typographer = true;
    self
  }
}

/// A node of the flattened token sequence.
///
/// Block structure is expressed as open/close pairs. Blocks holding inline
/// content (paragraphs, headings, table cells) carry exactly one
/// [`Token::Inline`] between their open and close tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  HeadingOpen { level: u8 },
  HeadingClose { level: u8 },
  Text { content: String },
  Inline { children: Vec<Self> },
  CodeInline { content: String },
  HtmlInline { content: String },
  SoftBreak,
  HardBreak,
  Open { element: Element },
  Close { element: Element },

  /// Node without children: code blocks, HTML blocks, thematic breaks and
  /// images (whose `content` is the alt text).
  Leaf { element: Element, content: String },
}

impl Token {
  /// Append the readable text of this token to `buf`.
  ///
  /// Only [`Token::Text`] contributes directly; [`Token::Inline`] contributes
  /// its children recursively. Everything else is skipped.
  pub fn push_text(&self, buf: &mut String) {
    match self {
      Self::Text { content } => buf.push_str(content),
      Self::Inline { children } => {
        for child in children {
          child.push_text(buf);
        }
      },
      _ => {},
    }
  }
}

/// Element kinds for tokens that have no dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
  BlockQuote,
  List,
  Item,
  Paragraph,
  Table,
  TableRow,
  TableCell,
  Emphasis,
  Strong,
  Strikethrough,
  Link,
  Image,
  CodeBlock,
  HtmlBlock,
  ThematicBreak,
  Other,
}

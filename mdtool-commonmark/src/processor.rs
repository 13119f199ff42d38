//! Parsing and rendering through comrak.
//!
//! [`MarkdownProcessor::parse`] produces a [`ParsedDocument`] holding the
//! decoded source and its token sequence. [`MarkdownProcessor::render`] only
//! borrows the document, so the tokens can be inspected before or after
//! rendering without affecting the output.
use std::sync::LazyLock;

use comrak::{
  Arena,
  markdown_to_html,
  nodes::{AstNode, NodeValue},
  options::Options,
  parse_document,
};
use log::trace;
use regex::Regex;

use crate::{
  types::{Element, RenderOptions, Token},
  utils,
};

/// Source text and the token sequence parsed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
  source: String,
  tokens: Vec<Token>,
}

impl ParsedDocument {
  /// The flattened token sequence.
  #[must_use]
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

}

/// Markdown processor configured once with [`RenderOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownProcessor {
  options: RenderOptions,
}

impl MarkdownProcessor {
  /// Create a new processor with the given options.
  #[must_use]
  pub const fn new(options: RenderOptions) -> Self {
    Self { options }
  }

  /// Parse raw document bytes into a token sequence.
  ///
  /// Invalid UTF-8 is replaced rather than rejected.
  #[must_use]
  pub fn parse(&self, input: &[u8]) -> ParsedDocument {
    let source = String::from_utf8_lossy(input).into_owned();

    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, &source, &options);

    let flattener = Flattener {
      raw_html: self.options.html,
    };
    let mut tokens = Vec::new();
    for child in root.children() {
      flattener.push_block(child, &mut tokens);
    }
    trace!("Flattened document into {} tokens", tokens.len());

    ParsedDocument { source, tokens }
  }

  /// Render a parsed document to body HTML.
  #[must_use]
  pub fn render(&self, document: &ParsedDocument) -> String {
    let html = markdown_to_html(&document.source, &self.comrak_options());
    if self.options.xhtml {
      html
    } else {
      html5_void_elements(&html)
    }
  }

  /// Build comrak options from [`RenderOptions`].
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    options.extension.table = self.options.tables;
    options.extension.autolink = self.options.linkify;
    options.parse.smart = self.options.typographer;
    options.render.r#unsafe = self.options.html;
    options.render.escape = !self.options.html;
    options
  }
}

/// Rewrite comrak's self-closed void elements (`<br />`) into HTML5 form.
fn html5_void_elements(html: &str) -> String {
  static SELF_CLOSED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(br|hr|img|input)(\s[^<>]*?)?\s*/>").unwrap_or_else(|e| {
      log::error!("Failed to compile SELF_CLOSED_RE regex: {e}");
      utils::never_matching_regex()
    })
  });

  SELF_CLOSED_RE
    .replace_all(html, |caps: &regex::Captures| {
      let tag = &caps[1];
      let attrs = caps.get(2).map_or("", |m| m.as_str().trim_end());
      format!("<{tag}{attrs}>")
    })
    .into_owned()
}

/// Turns comrak's AST into the flat token sequence.
struct Flattener {
  /// Raw HTML is passed through rather than escaped.
  raw_html: bool,
}

impl Flattener {
  fn push_block<'a>(&self, node: &'a AstNode<'a>, tokens: &mut Vec<Token>) {
    let data = node.data.borrow();
    let value = &data.value;
    match value {
      NodeValue::Heading(heading) => {
        tokens.push(Token::HeadingOpen {
          level: heading.level,
        });
        tokens.push(self.inline_token(node));
        tokens.push(Token::HeadingClose {
          level: heading.level,
        });
      },
      NodeValue::Paragraph | NodeValue::TableCell => {
        let element = element_of(value);
        tokens.push(Token::Open { element });
        tokens.push(self.inline_token(node));
        tokens.push(Token::Close { element });
      },
      NodeValue::CodeBlock(block) => {
        tokens.push(Token::Leaf {
          element: Element::CodeBlock,
          content: block.literal.clone(),
        });
      },
      NodeValue::HtmlBlock(block) => {
        tokens.push(Token::Leaf {
          element: Element::HtmlBlock,
          content: block.literal.clone(),
        });
      },
      NodeValue::ThematicBreak => {
        tokens.push(Token::Leaf {
          element: Element::ThematicBreak,
          content: String::new(),
        });
      },
      _ => {
        let element = element_of(value);
        tokens.push(Token::Open { element });
        for child in node.children() {
          self.push_block(child, tokens);
        }
        tokens.push(Token::Close { element });
      },
    }
  }

  fn inline_token<'a>(&self, node: &'a AstNode<'a>) -> Token {
    let mut children = Vec::new();
    for child in node.children() {
      self.push_inline(child, &mut children);
    }
    Token::Inline { children }
  }

  fn push_inline<'a>(&self, node: &'a AstNode<'a>, tokens: &mut Vec<Token>) {
    let data = node.data.borrow();
    let value = &data.value;
    match value {
      NodeValue::Text(text) => {
        tokens.push(Token::Text {
          content: text.to_string(),
        });
      },
      NodeValue::Code(code) => {
        tokens.push(Token::CodeInline {
          content: code.literal.clone(),
        });
      },
      // Escaped raw HTML is visible text.
      NodeValue::HtmlInline(html) if !self.raw_html => {
        tokens.push(Token::Text {
          content: html.to_string(),
        });
      },
      NodeValue::HtmlInline(html) => {
        tokens.push(Token::HtmlInline {
          content: html.to_string(),
        });
      },
      NodeValue::SoftBreak => tokens.push(Token::SoftBreak),
      NodeValue::LineBreak => tokens.push(Token::HardBreak),
      NodeValue::Image(..) => {
        tokens.push(Token::Leaf {
          element: Element::Image,
          content: plain_text(node),
        });
      },
      _ => {
        let element = element_of(value);
        tokens.push(Token::Open { element });
        for child in node.children() {
          self.push_inline(child, tokens);
        }
        tokens.push(Token::Close { element });
      },
    }
  }
}

/// Concatenated text of all descendants, used for image alt text.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for descendant in node.descendants().skip(1) {
    match &descendant.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(c) => text.push_str(&c.literal),
      _ => {},
    }
  }
  text
}

fn element_of(value: &NodeValue) -> Element {
  match value {
    NodeValue::BlockQuote => Element::BlockQuote,
    NodeValue::List(..) => Element::List,
    NodeValue::Item(..) => Element::Item,
    NodeValue::Paragraph => Element::Paragraph,
    NodeValue::Table(..) => Element::Table,
    NodeValue::TableRow(..) => Element::TableRow,
    NodeValue::TableCell => Element::TableCell,
    NodeValue::Emph => Element::Emphasis,
    NodeValue::Strong => Element::Strong,
    NodeValue::Strikethrough => Element::Strikethrough,
    NodeValue::Link(..) => Element::Link,
    _ => Element::Other,
  }
}

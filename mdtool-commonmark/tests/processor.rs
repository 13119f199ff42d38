use mdtool_commonmark::{
  Element,
  MarkdownProcessor,
  RenderOptions,
  Token,
  extract_title,
};

fn title_of(markdown: &str) -> String {
  let processor = MarkdownProcessor::new(RenderOptions::default());
  extract_title(processor.parse(markdown.as_bytes()).tokens())
}

#[test]
fn test_heading_tokens_wrap_single_inline() {
  let processor = MarkdownProcessor::new(RenderOptions::default());
  let document = processor.parse(b"## Hello *World*\n\nBody");
  let tokens = document.tokens();

  assert_eq!(tokens[0], Token::HeadingOpen { level: 2 });
  assert!(matches!(
    &tokens[1],
    Token::Inline { children } if children.contains(&Token::Open {
      element: Element::Emphasis,
    })
  ));
  assert_eq!(tokens[2], Token::HeadingClose { level: 2 });
  assert_eq!(tokens[3], Token::Open {
    element: Element::Paragraph,
  });
}

#[test]
fn test_title_from_first_heading() {
  assert_eq!(title_of("# Hello *World*\n\nSome text."), "Hello World");
  assert_eq!(title_of("Setext Title\n============\n\ntext"), "Setext Title");
  assert_eq!(title_of("### [Linked](https://example.com) title"), "Linked title");
}

#[test]
fn test_no_title_without_leading_heading() {
  assert_eq!(title_of("Body first\n\n# Heading"), "");
  assert_eq!(title_of("- # heading in a list"), "");
  assert_eq!(title_of(""), "");
}

#[test]
fn test_code_spans_are_not_title_text() {
  assert_eq!(title_of("# Use `cargo` here"), "Use  here");
}

#[test]
fn test_invalid_utf8_is_replaced() {
  assert_eq!(title_of_bytes(b"# T\xffitle"), "T\u{fffd}itle");
}

fn title_of_bytes(bytes: &[u8]) -> String {
  let processor = MarkdownProcessor::new(RenderOptions::default());
  extract_title(processor.parse(bytes).tokens())
}

#[test]
fn test_render_default() {
  let processor = MarkdownProcessor::new(RenderOptions::default());
  let document = processor.parse(b"# Title\n\nBody text");
  assert_eq!(
    processor.render(&document),
    "<h1>Title</h1>\n<p>Body text</p>\n"
  );
}

#[test]
fn test_render_leaves_tokens_untouched() {
  let processor = MarkdownProcessor::new(RenderOptions::default());
  let document = processor.parse(b"# Title\n\n* one\n* two\n");
  let before = document.tokens().to_vec();

  let first = processor.render(&document);
  let second = processor.render(&document);

  assert_eq!(first, second);
  assert_eq!(document.tokens(), before.as_slice());
  assert_eq!(extract_title(document.tokens()), "Title");
}

#[test]
fn test_tables_flag() {
  let md = b"| a | b |\n|---|---|\n| 1 | 2 |\n";

  let plain = MarkdownProcessor::new(RenderOptions::default());
  assert!(!plain.render(&plain.parse(md)).contains("<table>"));

  let tables = MarkdownProcessor::new(RenderOptions {
    tables: true,
    ..Default::default()
  });
  let document = tables.parse(md);
  assert!(tables.render(&document).contains("<table>"));
  assert!(document.tokens().contains(&Token::Open {
    element: Element::Table,
  }));
}

#[test]
fn test_html_flag() {
  let md = b"<div class=\"note\">raw</div>\n";

  let escaped = MarkdownProcessor::new(RenderOptions::default());
  let html = escaped.render(&escaped.parse(md));
  assert!(!html.contains("<div"));
  assert!(html.contains("&lt;div"));

  let passthrough = MarkdownProcessor::new(RenderOptions {
    html: true,
    ..Default::default()
  });
  let html = passthrough.render(&passthrough.parse(md));
  assert!(html.contains("<div class=\"note\">raw</div>"));
}

#[test]
fn test_linkify_flag() {
  let md = b"Visit https://example.com today\n";

  let plain = MarkdownProcessor::new(RenderOptions::default());
  assert!(!plain.render(&plain.parse(md)).contains("<a "));

  let linkify = MarkdownProcessor::new(RenderOptions {
    linkify: true,
    ..Default::default()
  });
  assert!(
    linkify
      .render(&linkify.parse(md))
      .contains("<a href=\"https://example.com\">")
  );
}

#[test]
fn test_typographer_flag() {
  let md = b"\"quoted\" -- text...\n";

  let plain = MarkdownProcessor::new(RenderOptions::default());
  assert!(!plain.render(&plain.parse(md)).contains('\u{201c}'));

  let smart = MarkdownProcessor::new(RenderOptions {
    typographer: true,
    ..Default::default()
  });
  let html = smart.render(&smart.parse(md));
  assert!(html.contains("\u{201c}quoted\u{201d}"));
  assert!(html.contains('\u{2026}'));
}

#[test]
fn test_void_elements_follow_xhtml_flag() {
  let md = b"line one  \nline two\n\n***\n";

  let html5 = MarkdownProcessor::new(RenderOptions::default());
  let html = html5.render(&html5.parse(md));
  assert!(html.contains("<br>"));
  assert!(html.contains("<hr>"));
  assert!(!html.contains(" />"));

  let xhtml = MarkdownProcessor::new(RenderOptions {
    xhtml: true,
    ..Default::default()
  });
  let html = xhtml.render(&xhtml.parse(md));
  assert!(html.contains("<br />"));
  assert!(html.contains("<hr />"));
}

#[test]
fn test_code_block_text_is_escaped_not_rewritten() {
  let processor = MarkdownProcessor::new(RenderOptions::default());
  let document = processor.parse(b"```\n<br />\n```\n");
  let html = processor.render(&document);
  assert!(html.contains("&lt;br /&gt;"));
  assert!(matches!(
    document.tokens().first(),
    Some(Token::Leaf {
      element: Element::CodeBlock,
      ..
    })
  ));
}

#[test]
fn test_escaped_inline_html_is_title_text() {
  let escaped = MarkdownProcessor::new(RenderOptions::default());
  let document = escaped.parse(b"# A <b>B</b>");
  assert_eq!(extract_title(document.tokens()), "A <b>B</b>");
  assert!(
    escaped
      .render(&document)
      .contains("<h1>A &lt;b&gt;B&lt;/b&gt;</h1>")
  );

  let passthrough = MarkdownProcessor::new(RenderOptions {
    html: true,
    ..Default::default()
  });
  let document = passthrough.parse(b"# A <b>B</b>");
  assert_eq!(extract_title(document.tokens()), "A B");
  assert!(passthrough.render(&document).contains("<h1>A <b>B</b></h1>"));
}

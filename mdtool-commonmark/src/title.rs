//! Document title recovery from a token sequence.
use crate::types::Token;

/// Extract the document title from a token sequence.
///
/// The title is the flattened text of the heading the document opens with.
/// If the first token is not a [`Token::HeadingOpen`], the title is empty.
/// Otherwise text is collected from the following tokens until the
/// [`Token::HeadingClose`] of the same level, or the end of the sequence if
/// no such token exists. The result is trimmed.
///
/// # Examples
///
/// ```
/// use mdtool_commonmark::{Token, extract_title};
///
/// let tokens = [
///   Token::HeadingOpen { level: 2 },
///   Token::Text { content: "Hello ".into() },
///   Token::Inline {
///     children: vec![Token::Text { content: "World".into() }],
///   },
///   Token::HeadingClose { level: 2 },
///   Token::Text { content: "ignored".into() },
/// ];
/// assert_eq!(extract_title(&tokens), "Hello World");
/// ```
#[must_use]
pub fn extract_title(tokens: &[Token]) -> String {
  let Some((Token::HeadingOpen { level }, rest)) = tokens.split_first() else {
    return String::new();
  };

  let mut title = String::new();
  for token in rest {
    if matches!(token, Token::HeadingClose { level: close } if close == level)
    {
      break;
    }
    token.push_text(&mut title);
  }

  title.trim().to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Element;

  fn text(content: &str) -> Token {
    Token::Text {
      content: content.to_owned(),
    }
  }

  #[test]
  fn empty_sequence_has_no_title() {
    assert_eq!(extract_title(&[]), "");
  }

  #[test]
  fn document_not_opening_with_heading_has_no_title() {
    let tokens = [
      Token::Open {
        element: Element::Paragraph,
      },
      Token::Inline {
        children: vec![text("Just a paragraph")],
      },
      Token::Close {
        element: Element::Paragraph,
      },
      Token::HeadingOpen { level: 1 },
      Token::Inline {
        children: vec![text("Late heading")],
      },
      Token::HeadingClose { level: 1 },
    ];
    assert_eq!(extract_title(&tokens), "");
  }

  #[test]
  fn stops_at_matching_close() {
    let tokens = [
      Token::HeadingOpen { level: 2 },
      text("Hello "),
      Token::Inline {
        children: vec![text("World")],
      },
      Token::HeadingClose { level: 2 },
      text("ignored"),
    ];
    assert_eq!(extract_title(&tokens), "Hello World");
  }

  #[test]
  fn close_of_other_level_does_not_stop() {
    let tokens = [
      Token::HeadingOpen { level: 1 },
      text("  one"),
      Token::HeadingClose { level: 3 },
      text(" two  "),
    ];
    assert_eq!(extract_title(&tokens), "one two");
  }

  #[test]
  fn missing_close_runs_to_end() {
    let tokens = [
      Token::HeadingOpen { level: 1 },
      Token::Inline {
        children: vec![
          text("Nested "),
          Token::Inline {
            children: vec![text("deeply")],
          },
        ],
      },
      Token::SoftBreak,
      text(" tail\n"),
    ];
    assert_eq!(extract_title(&tokens), "Nested deeply tail");
  }

  #[test]
  fn non_text_tokens_contribute_nothing() {
    let tokens = [
      Token::HeadingOpen { level: 1 },
      Token::Inline {
        children: vec![
          text("Use "),
          Token::CodeInline {
            content: "cargo".into(),
          },
          Token::HtmlInline {
            content: "<b>".into(),
          },
        ],
      },
      Token::HeadingClose { level: 1 },
    ];
    assert_eq!(extract_title(&tokens), "Use");
  }
}

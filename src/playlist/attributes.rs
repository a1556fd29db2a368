//! Quote-aware tokenizer for `key="value"` attribute lists
//!
//! Used for both the `#EXTM3U` header line and `#EXTINF` metadata lines:
//!
//! ```text
//! #EXTINF:-1 tvg-id="bbc1.uk" tvg-logo="http://x/logo.png" group-title="News, UK",BBC One
//! ```
//!
//! Quoted values may contain whitespace and commas. A quote inside a value is
//! written as `\"` and a literal backslash as `\\`; any other backslash is kept
//! as-is so Windows paths and odd URLs survive untouched.

use std::collections::BTreeMap;

/// Attribute map keyed by lower-cased attribute name
pub type Attributes = BTreeMap<String, String>;

/// Parsed body of an `#EXTINF` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtinfLine {
    pub attributes: Attributes,
    pub name: String,
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, pred: F) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.bump();
        }
        &self.text[start..self.pos]
    }

    /// Reads a quoted value; the opening quote has already been consumed.
    /// An unterminated value runs to the end of the line.
    fn quoted_value(&mut self) -> String {
        let mut value = String::new();
        while let Some(ch) = self.bump() {
            match ch {
                '"' => return value,
                '\\' => match self.peek() {
                    Some(next @ ('"' | '\\')) => {
                        self.bump();
                        value.push(next);
                    }
                    _ => value.push('\\'),
                },
                other => value.push(other),
            }
        }
        value
    }
}

/// Parse a run of `key="value"` pairs.
///
/// Returns the attributes and the unparsed remainder, which starts at the
/// first token that is not an attribute (a comma, free text, or nothing).
pub fn parse_attributes(text: &str) -> (Attributes, &str) {
    let mut attributes = Attributes::new();
    let mut scanner = Scanner::new(text);

    loop {
        scanner.skip_whitespace();
        let token_start = scanner.pos;
        if matches!(scanner.peek(), None | Some(',')) {
            return (attributes, scanner.rest());
        }

        let key = scanner.take_while(|c| c != '=' && c != ',' && !c.is_whitespace());
        if key.is_empty() || scanner.peek() != Some('=') {
            return (attributes, &text[token_start..]);
        }
        scanner.bump();

        let value = if scanner.peek() == Some('"') {
            scanner.bump();
            scanner.quoted_value()
        } else {
            scanner
                .take_while(|c| c != ',' && !c.is_whitespace())
                .to_string()
        };
        attributes.insert(key.to_lowercase(), value);
    }
}

/// Parse everything after `#EXTINF:`: duration, attributes and display name.
pub fn parse_extinf(body: &str) -> ExtinfLine {
    let body = body.trim_start();
    let duration_len = body
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.')))
        .unwrap_or(body.len());

    let (attributes, rest) = parse_attributes(&body[duration_len..]);
    let name = rest.strip_prefix(',').unwrap_or(rest).trim().to_string();

    ExtinfLine { attributes, name }
}

/// Escape a value so [`parse_attributes`] reads it back unchanged
pub fn escape_value(value: &str) -> String {
    if !value.contains(['"', '\\']) {
        return value.to_string();
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_standard_extinf_line() {
        let line = parse_extinf(
            r#"-1 tvg-id="bbc1.uk" tvg-logo="http://x/logo.png" group-title="News",BBC One"#,
        );
        assert_eq!(line.name, "BBC One");
        assert_eq!(line.attributes.len(), 3);
        assert_eq!(line.attributes["tvg-id"], "bbc1.uk");
        assert_eq!(line.attributes["tvg-logo"], "http://x/logo.png");
        assert_eq!(line.attributes["group-title"], "News");
    }

    #[rstest]
    #[case::plain(r#"-1,Channel"#, "Channel")]
    #[case::comma_in_name(r#"-1 group-title="A",Channel, HD"#, "Channel, HD")]
    #[case::comma_in_value(r#"-1 group-title="News, UK",Channel"#, "Channel")]
    #[case::no_comma(r#"-1 tvg-id="x" Channel Name"#, "Channel Name")]
    #[case::no_duration(r#"tvg-id="x",Channel"#, "Channel")]
    #[case::fractional_duration(r#"0.000 tvg-id="x",Channel"#, "Channel")]
    #[case::empty_name(r#"-1 tvg-id="x","#, "")]
    fn extracts_display_name(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(parse_extinf(body).name, expected);
    }

    #[test]
    fn keys_are_lower_cased() {
        let line = parse_extinf(r#"-1 TVG-ID="abc" Group-Title="Kids",Cartoons"#);
        assert_eq!(line.attributes["tvg-id"], "abc");
        assert_eq!(line.attributes["group-title"], "Kids");
    }

    #[test]
    fn quoted_values_keep_spaces_and_commas() {
        let line = parse_extinf(r#"-1 group-title="Local News, Weather" tvg-name="A B",X"#);
        assert_eq!(line.attributes["group-title"], "Local News, Weather");
        assert_eq!(line.attributes["tvg-name"], "A B");
    }

    #[test]
    fn unquoted_values_stop_at_whitespace_or_comma() {
        let line = parse_extinf(r#"-1 tvg-id=abc tvg-chno=7,Seven"#);
        assert_eq!(line.attributes["tvg-id"], "abc");
        assert_eq!(line.attributes["tvg-chno"], "7");
        assert_eq!(line.name, "Seven");
    }

    #[test]
    fn escaped_quotes_survive() {
        let line = parse_extinf(r#"-1 tvg-name="The \"Best\" One",X"#);
        assert_eq!(line.attributes["tvg-name"], r#"The "Best" One"#);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        let line = parse_extinf(r#"-1 tvg-name="broken,X"#);
        assert_eq!(line.attributes["tvg-name"], "broken,X");
        assert_eq!(line.name, "");
    }

    #[test]
    fn header_attributes_and_remainder() {
        let (attrs, rest) = parse_attributes(r#" x-tvg-url="http://epg/guide.xml" url-tvg="y""#);
        assert_eq!(attrs["x-tvg-url"], "http://epg/guide.xml");
        assert_eq!(attrs["url-tvg"], "y");
        assert_eq!(rest, "");
    }

    #[rstest]
    #[case("plain")]
    #[case(r#"with "quotes""#)]
    #[case(r"C:\path\to\logo.png")]
    #[case(r#"trailing \"#)]
    fn escaped_values_read_back_unchanged(#[case] value: &str) {
        let line = format!(r#"-1 tvg-name="{}",X"#, escape_value(value));
        assert_eq!(parse_extinf(&line).attributes["tvg-name"], value);
    }
}

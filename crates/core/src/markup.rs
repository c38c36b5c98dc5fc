//! Inline markup for question text.
//!
//! The only convention is `*emphasis*`: a run of one or more non-`*`
//! characters between two asterisks. Everything else is plain text.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSegment {
    Plain(String),
    Emphasis(String),
}

#[must_use]
pub fn parse_inline(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(start) = rest.find('*') {
        let after = &rest[start + 1..];
        match after.find('*') {
            Some(end) if end > 0 => {
                plain.push_str(&rest[..start]);
                if !plain.is_empty() {
                    segments.push(TextSegment::Plain(std::mem::take(&mut plain)));
                }
                segments.push(TextSegment::Emphasis(after[..end].to_string()));
                rest = &after[end + 1..];
            }
            Some(_) => {
                // `**`: the first star cannot open emphasis; retry from the second.
                plain.push_str(&rest[..=start]);
                rest = after;
            }
            None => break,
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        segments.push(TextSegment::Plain(plain));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> TextSegment {
        TextSegment::Plain(text.to_string())
    }

    fn emphasis(text: &str) -> TextSegment {
        TextSegment::Emphasis(text.to_string())
    }

    #[test]
    fn text_without_markers_is_plain() {
        assert_eq!(parse_inline("Sort the table."), vec![plain("Sort the table.")]);
    }

    #[test]
    fn delimited_text_is_emphasized() {
        assert_eq!(
            parse_inline("On the *Sales* sheet, sort *Region*."),
            vec![
                plain("On the "),
                emphasis("Sales"),
                plain(" sheet, sort "),
                emphasis("Region"),
                plain("."),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_plain() {
        assert_eq!(parse_inline("5 * 3 = 15"), vec![plain("5 * 3 = 15")]);
        assert_eq!(parse_inline("*open"), vec![plain("*open")]);
    }

    #[test]
    fn double_marker_is_not_empty_emphasis() {
        assert_eq!(parse_inline("a**b"), vec![plain("a**b")]);
        assert_eq!(parse_inline("a**b*"), vec![plain("a*"), emphasis("b")]);
    }

    #[test]
    fn whole_text_emphasized() {
        assert_eq!(parse_inline("*All*"), vec![emphasis("All")]);
        assert_eq!(parse_inline(""), Vec::<TextSegment>::new());
    }
}

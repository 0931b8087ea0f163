//! Depth extraction from marker-prefixed lines.
//!
//! A line such as `>>> foo` has marker depth 3, i.e. nesting 2, and text `foo`.
//! Exactly one character after the marker run is dropped as separator.

use crate::domain::error::{DomainError, DomainResult, MalformedReason};
use crate::domain::Line;

/// Default depth marker.
pub const DEFAULT_MARKER: char = '>';

/// Reject markers that cannot be told apart from the separator.
pub fn validate_marker(marker: char) -> DomainResult<char> {
    if marker.is_whitespace() || marker.is_control() {
        return Err(DomainError::InvalidMarker { marker });
    }
    Ok(marker)
}

/// Split one raw line into nesting depth and remaining text.
///
/// # Errors
/// `MalformedLine` if the line is empty, has no leading marker, or ends right
/// after the marker run.
pub fn extract_depth(line: &str, marker: char) -> DomainResult<Line> {
    if line.is_empty() {
        return Err(DomainError::malformed(MalformedReason::Empty));
    }

    let marker_depth = line.chars().take_while(|&c| c == marker).count();
    if marker_depth == 0 {
        return Err(DomainError::malformed(MalformedReason::MissingMarker));
    }

    let mut rest = line[marker_depth * marker.len_utf8()..].chars();
    if rest.next().is_none() {
        return Err(DomainError::malformed(MalformedReason::MissingSeparator));
    }

    Ok(Line::new(marker_depth - 1, rest.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("> root", 0, "root")]
    #[case(">> child", 1, "child")]
    #[case(">>>> deep one", 3, "deep one")]
    #[case(">>  two spaces", 1, " two spaces")]
    #[case("> ", 0, "")]
    #[case(">-x", 0, "x")]
    fn given_marked_line_when_extracting_then_returns_nesting_and_text(
        #[case] input: &str,
        #[case] nesting: usize,
        #[case] text: &str,
    ) {
        let line = extract_depth(input, DEFAULT_MARKER).unwrap();
        assert_eq!(line, Line::new(nesting, text));
    }

    #[rstest]
    #[case("", MalformedReason::Empty)]
    #[case("no marker", MalformedReason::MissingMarker)]
    #[case(" > indented", MalformedReason::MissingMarker)]
    #[case(">", MalformedReason::MissingSeparator)]
    #[case(">>>", MalformedReason::MissingSeparator)]
    fn given_malformed_line_when_extracting_then_fails(
        #[case] input: &str,
        #[case] reason: MalformedReason,
    ) {
        let err = extract_depth(input, DEFAULT_MARKER).unwrap_err();
        assert_eq!(err, DomainError::MalformedLine { reason });
    }

    #[test]
    fn given_multibyte_marker_and_separator_when_extracting_then_splits_on_chars() {
        let line = extract_depth("»»→tëxt", '»').unwrap();
        assert_eq!(line, Line::new(1, "tëxt"));
    }

    #[test]
    fn given_whitespace_marker_when_validating_then_rejects() {
        assert_eq!(
            validate_marker(' '),
            Err(DomainError::InvalidMarker { marker: ' ' })
        );
        assert_eq!(validate_marker('*'), Ok('*'));
    }
}

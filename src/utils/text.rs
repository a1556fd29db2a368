//! String casing helpers

/// Upper-case the first character, leaving the rest untouched
///
/// # Examples
///
/// ```rust
/// use m3u_indexer::utils::capitalize;
///
/// assert_eq!(capitalize("news"), "News");
/// assert_eq!(capitalize("über"), "Über");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kids", "Kids")]
    #[case("other", "Other")]
    #[case("Already", "Already")]
    #[case("multi word", "Multi word")]
    #[case("1080p", "1080p")]
    fn capitalizes_first_character(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}

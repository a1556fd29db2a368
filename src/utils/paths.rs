//! Path utilities for playlist references and generated links
//!
//! Country playlists are referenced from the root playlist by relative path
//! or URL, and the generated index files point back at group playlists with
//! forward-slash links relative to the base directory.

use std::path::Path;

/// Path helpers used by the aggregator and the index generator
pub struct PathUtils;

impl PathUtils {
    /// Derive a group code from a playlist reference
    ///
    /// The code is the lower-cased file name without its extension. Query
    /// strings and fragments are ignored so URLs work as well as paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use m3u_indexer::utils::PathUtils;
    ///
    /// assert_eq!(PathUtils::code_from_reference("channels/us.m3u"), "us");
    /// assert_eq!(PathUtils::code_from_reference("./channels/FR.m3u8"), "fr");
    /// assert_eq!(PathUtils::code_from_reference("https://x/lists/de.m3u?v=2"), "de");
    /// ```
    pub fn code_from_reference(reference: &str) -> String {
        let reference = reference.trim();
        let reference = reference
            .split(['?', '#'])
            .next()
            .unwrap_or(reference);
        let file_name = reference
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(reference);
        let stem = match file_name.rfind('.') {
            Some(dot) if dot > 0 => &file_name[..dot],
            _ => file_name,
        };
        stem.to_lowercase()
    }

    /// Render `path` as a link relative to `base_dir`
    ///
    /// Separators become `/` and a leading `./` is removed. Paths outside
    /// `base_dir` are rendered as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use m3u_indexer::utils::PathUtils;
    ///
    /// let file = Path::new("./channels/countries/us.m3u");
    /// assert_eq!(PathUtils::link_path(file, Path::new(".")), "channels/countries/us.m3u");
    /// ```
    pub fn link_path(path: &Path, base_dir: &Path) -> String {
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        let link = relative.to_string_lossy().replace('\\', "/");
        let mut link = link.as_str();
        while let Some(rest) = link.strip_prefix("./") {
            link = rest;
        }
        link.to_string()
    }

    /// File name stem for a group code
    ///
    /// Path separators and characters that are invalid in file names on
    /// common platforms are replaced with `_`, so a category such as
    /// `news/weather` stays a single file.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use m3u_indexer::utils::PathUtils;
    ///
    /// assert_eq!(PathUtils::file_stem_for("news/weather"), "news_weather");
    /// assert_eq!(PathUtils::file_stem_for("kids"), "kids");
    /// ```
    pub fn file_stem_for(code: &str) -> String {
        let stem: String = code
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        match stem.as_str() {
            "" | "." | ".." => "_".to_string(),
            _ => stem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("us.m3u", "us")]
    #[case("channels/uk.m3u", "uk")]
    #[case(r"channels\it.m3u", "it")]
    #[case("/abs/path/Int.m3u", "int")]
    #[case("http://host/a/b/ca.m3u8#frag", "ca")]
    #[case("noext", "noext")]
    #[case(".hidden", ".hidden")]
    fn codes_from_references(#[case] reference: &str, #[case] expected: &str) {
        assert_eq!(PathUtils::code_from_reference(reference), expected);
    }

    #[rstest]
    #[case("sport", "sport")]
    #[case("a:b", "a_b")]
    #[case("", "_")]
    #[case("..", "_")]
    fn file_stems(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(PathUtils::file_stem_for(code), expected);
    }

    #[test]
    fn links_are_relative_to_the_base_dir() {
        let base = Path::new("/srv/site");
        assert_eq!(
            PathUtils::link_path(&base.join("channels/languages/en.m3u"), base),
            "channels/languages/en.m3u"
        );
        assert_eq!(
            PathUtils::link_path(Path::new("/elsewhere/x.m3u"), base),
            "/elsewhere/x.m3u"
        );
        assert_eq!(
            PathUtils::link_path(Path::new("./channels/./x.m3u"), Path::new("/srv")),
            "channels/./x.m3u"
        );
    }
}

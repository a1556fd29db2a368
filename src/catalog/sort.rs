//! Deterministic multi-key ordering
//!
//! Outputs are ordered by dotted field paths such as `country.name` or
//! `language.name`. Every path resolves to a string; the comparison is plain
//! byte-wise `str` ordering, key by key, and equal items keep their input order.

use std::borrow::Cow;

use crate::models::Channel;

/// Read access to a record's fields by dotted path
pub trait FieldAccess {
    /// `None` when the path is unknown; sorting treats that as `""`.
    fn get_field(&self, path: &str) -> Option<Cow<'_, str>>;
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn get_field(&self, path: &str) -> Option<Cow<'_, str>> {
        (**self).get_field(path)
    }
}

impl FieldAccess for Channel {
    fn get_field(&self, path: &str) -> Option<Cow<'_, str>> {
        let value = match path {
            "name" => self.name.as_str(),
            "url" => self.url.as_str(),
            "category" => self.category.as_str(),
            "logo" => self.logo.as_str(),
            "country.code" => self.country.code.as_str(),
            "country.name" => self.country.name.as_str(),
            "tvg.id" => self.tvg.id.as_str(),
            "tvg.name" => self.tvg.name.as_str(),
            "tvg.url" => self.tvg.url.as_str(),
            // first language only
            "language.code" => self.languages.first().map_or("", |l| l.code.as_str()),
            "language.name" => self.languages.first().map_or("", |l| l.name.as_str()),
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// Stable ascending sort on the given key paths.
pub fn sort_by<T: FieldAccess>(items: &mut [T], paths: &[&str]) {
    items.sort_by_cached_key(|item| {
        paths
            .iter()
            .map(|path| item.get_field(path).map(Cow::into_owned).unwrap_or_default())
            .collect::<Vec<String>>()
    });
}

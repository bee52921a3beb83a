//! Normalization of raw secret text before casting.

use std::sync::Arc;

use crate::error::BoxError;

/// A shareable clean function.
///
/// Takes the raw text and returns the cleaned text, or the reason cleaning
/// failed.
pub type Cleaner = Arc<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;

/// Default cleaner.
///
/// Trims surrounding whitespace, including the ASCII file, group, record and
/// unit separators (`\x1c`..=`\x1f`), then removes every `\n` and `\r` in
/// the string, so a multi-line value collapses onto one line.
///
/// ```
/// use get_secret::default_clean;
///
/// assert_eq!(default_clean("some title here \n"), "some title here");
/// assert_eq!(default_clean("some \ndescription here \r\n"), "some description here");
/// ```
pub fn default_clean(value: &str) -> String {
    value
        .trim_matches(is_strippable)
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect()
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Wrap a user function as a `Cleaner`.
pub(crate) fn cleaner<F, E>(f: F) -> Cleaner
where
    F: Fn(&str) -> Result<String, E> + Send + Sync + 'static,
    E: Into<BoxError>,
{
    Arc::new(move |value: &str| -> Result<String, BoxError> {
        f(value).map_err(Into::into)
    })
}

/// The `Cleaner` form of `default_clean`.
pub(crate) fn default_cleaner() -> Cleaner {
    Arc::new(|value: &str| -> Result<String, BoxError> { Ok(default_clean(value)) })
}

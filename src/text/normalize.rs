//! Canonical word keys.

use std::borrow::Cow;

/// Lowercase form of `word`, used as the identity of stopwords and dictionary entries.
///
/// Borrows when lowercasing would leave every character unchanged, which is
/// the common case for corpus text. Titlecase letters such as `ǅ` are not
/// uppercase but still fold, so the check compares against the lowercase mapping.
pub fn canonical_key(word: &str) -> Cow<'_, str> {
    if word.chars().all(|c| c.to_lowercase().eq(std::iter::once(c))) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

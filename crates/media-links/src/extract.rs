//! URL extraction from free-form text.

use std::sync::LazyLock;

use regex::Regex;

/// `http(s)://` links plus `spotify:` URIs, each up to the next whitespace.
///
/// `spotify:` must start a word, so `myspotify:x` is not a URI. A `spotify:`
/// prefix glued onto an http link is dropped and only the link is kept.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\bspotify:)?(?P<link>https?://\S+)|\bspotify:\S+").unwrap()
});

/// Returns every URL-looking substring of `text`, in order of appearance.
///
/// The iterator is lazy and borrows `text`; call again to restart. Nothing
/// beyond "starts with a known scheme and contains no whitespace" is checked.
pub fn extract_urls(text: &str) -> impl Iterator<Item = &str> + '_ {
    URL_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.name("link").or_else(|| caps.get(0)))
        .map(|m| m.as_str())
}

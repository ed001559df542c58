//! Accessibility markers in raw HTML

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_LANG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<html[^>]*\blang=(?:["']|[^\s>]+)"#).expect("valid html lang regex")
});

static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]+>").expect("valid img regex"));

/// One attribute: its name in group 1, then an optional quoted or unquoted value
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'=<>/]+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?"#)
        .expect("valid attribute regex")
});

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h1(?:\s[^>]*)?>").expect("valid h1 regex"));

/// Returns true if the `<html>` element declares a `lang` attribute
pub fn has_html_lang(html: &str) -> bool {
    HTML_LANG_RE.is_match(html)
}

/// Image counts for the alt-text check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageAltSummary {
    /// Number of `<img>` tags
    pub total: usize,

    /// Number of `<img>` tags without any `alt` attribute
    pub missing_alt: usize,
}

impl ImageAltSummary {
    /// Scans all `<img>` tags in the document
    ///
    /// A bare `alt` (as minifiers emit for `alt=""`) counts as present.
    pub fn scan(html: &str) -> Self {
        IMG_RE
            .find_iter(html)
            .fold(Self::default(), |mut summary, tag| {
                summary.total += 1;
                if !has_alt_attribute(tag.as_str()) {
                    summary.missing_alt += 1;
                }
                summary
            })
    }
}

/// Returns true if an `<img ...>` tag carries an `alt` attribute
///
/// Only attribute names are compared, so `alt` inside another
/// attribute's value does not count.
fn has_alt_attribute(tag: &str) -> bool {
    let attrs = tag.get("<img".len()..).unwrap_or_default();
    ATTRIBUTE_RE
        .captures_iter(attrs)
        .any(|caps| caps[1].eq_ignore_ascii_case("alt"))
}

/// Counts `<h1>` opening tags
pub fn count_h1_tags(html: &str) -> usize {
    H1_RE.find_iter(html).count()
}

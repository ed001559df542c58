//! Meta tag extraction
//!
//! Pulls the title, `<meta>` name/property pairs, charset and canonical
//! link out of raw HTML. Quoted and unquoted attribute values are both
//! accepted; every field keeps its first match in document order.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("valid title regex"));

static META_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<meta\s+([^>]+)>").expect("valid meta regex"));

static NAME_RE: Lazy<Regex> = Lazy::new(|| attribute_regex("name"));
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| attribute_regex("property"));
static CONTENT_RE: Lazy<Regex> = Lazy::new(|| attribute_regex("content"));

static CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset=["']?([^"'\s>;/]+)"#).expect("valid charset regex"));

static CANONICAL_REL_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<link[^>]+rel=["']?canonical["']?[^>]+href=["']?([^\s"'>]+)"#)
        .expect("valid canonical regex")
});

static CANONICAL_HREF_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<link[^>]+href=["']?([^\s"'>]+)["']?[^>]+rel=["']?canonical\b"#)
        .expect("valid canonical regex")
});

/// Builds a pattern for `attr="v"`, `attr='v'` or `attr=v`
///
/// Capture groups 1, 2 and 3 hold the double-quoted, single-quoted and
/// unquoted value respectively.
fn attribute_regex(attr: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)(?:^|[\s"'/]){attr}\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#
    ))
    .expect("valid attribute regex")
}

fn attribute_value(re: &Regex, attrs: &str) -> Option<String> {
    re.captures(attrs).map(|caps: Captures<'_>| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    })
}

/// Head metadata relevant to search and social previews
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagSet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    pub twitter_card: Option<String>,
    pub canonical: Option<String>,
    pub robots_directive: Option<String>,
    pub viewport: Option<String>,
    pub charset: Option<String>,
}

/// Extracts the meta tag set from an HTML document
///
/// For `og:*` keys a tag is identified by its `property` attribute, falling
/// back to `name`; every other key uses `name`, falling back to `property`.
///
/// # Example
///
/// ```
/// use seo_audit::extract::extract_meta_tags;
///
/// let html = r#"<head><title>Home</title><meta name=description content="Hello"></head>"#;
/// let meta = extract_meta_tags(html);
/// assert_eq!(meta.title.as_deref(), Some("Home"));
/// assert_eq!(meta.description.as_deref(), Some("Hello"));
/// ```
pub fn extract_meta_tags(html: &str) -> MetaTagSet {
    let mut meta = MetaTagSet {
        title: extract_title(html),
        canonical: extract_canonical(html),
        ..MetaTagSet::default()
    };

    for caps in META_RE.captures_iter(html) {
        let attrs = strip_self_closing(&caps[1]);

        if meta.charset.is_none() {
            if let Some(charset) = CHARSET_RE.captures(attrs) {
                meta.charset = Some(charset[1].to_string());
            }
        }

        let Some(content) = attribute_value(&CONTENT_RE, attrs) else {
            continue;
        };
        let content = content.trim().to_string();
        if content.is_empty() {
            continue;
        }

        let name = attribute_value(&NAME_RE, attrs).map(|n| n.to_ascii_lowercase());
        let property = attribute_value(&PROPERTY_RE, attrs).map(|p| p.to_ascii_lowercase());

        let og_key = property.clone().or_else(|| name.clone());
        let plain_key = name.or(property);

        let og_slot = match og_key.as_deref() {
            Some("og:title") => Some(&mut meta.og_title),
            Some("og:description") => Some(&mut meta.og_description),
            Some("og:image") => Some(&mut meta.og_image),
            Some("og:type") => Some(&mut meta.og_type),
            _ => None,
        };
        if let Some(slot) = og_slot {
            slot.get_or_insert_with(|| content.clone());
        }

        let plain_slot = match plain_key.as_deref() {
            Some("description") => Some(&mut meta.description),
            Some("keywords") => Some(&mut meta.keywords),
            Some("robots") => Some(&mut meta.robots_directive),
            Some("viewport") => Some(&mut meta.viewport),
            Some("twitter:card") => Some(&mut meta.twitter_card),
            _ => None,
        };
        if let Some(slot) = plain_slot {
            slot.get_or_insert(content);
        }
    }

    meta
}

/// Text of the first `<title>`, trimmed; `None` when that title is blank
fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Drops a trailing self-closing `/` from a tag's attribute text
///
/// The slash is only a marker when it stands apart from the last value:
/// after whitespace, after a closing quote, or alone. In `content=https://e.com/`
/// it belongs to the unquoted value.
fn strip_self_closing(attrs: &str) -> &str {
    let attrs = attrs.trim_end();
    let Some(rest) = attrs.strip_suffix('/') else {
        return attrs;
    };
    let stands_apart = rest.is_empty()
        || rest.ends_with(|c: char| c.is_whitespace() || c == '"' || c == '\'');
    if stands_apart {
        rest.trim_end()
    } else {
        attrs
    }
}

/// Canonical link href, with `rel` before or after `href`
fn extract_canonical(html: &str) -> Option<String> {
    CANONICAL_REL_FIRST_RE
        .captures(html)
        .or_else(|| CANONICAL_HREF_FIRST_RE.captures(html))
        .map(|caps| caps[1].to_string())
}

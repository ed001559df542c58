//! JSON-LD structured data extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static JSON_LD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script[^>]*type=["']?application/ld\+json["']?[^>]*>(.*?)</script>"#)
        .expect("valid JSON-LD regex")
});

const ORGANIZATION_TYPES: [&str; 3] = [
    "Organization",
    "https://schema.org/Organization",
    "http://schema.org/Organization",
];

/// Parses every inline JSON-LD script block in the document
///
/// Blocks that are not valid JSON are dropped without being reported.
pub fn extract_structured_data(html: &str) -> Vec<Value> {
    JSON_LD_RE
        .captures_iter(html)
        .filter_map(|caps| match serde_json::from_str::<Value>(caps[1].trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Dropping malformed JSON-LD block: {}", e);
                None
            }
        })
        .collect()
}

/// Collects the distinct schema types declared by the given blocks
///
/// Types come from each top-level node, or from each member of its
/// `@graph` array when present. Top-level arrays are treated as lists of
/// nodes. Order is first appearance.
pub fn schema_types(blocks: &[Value]) -> Vec<String> {
    let mut types = Vec::new();
    for block in blocks {
        collect_block_types(block, &mut types);
    }
    types
}

fn collect_block_types(block: &Value, types: &mut Vec<String>) {
    match block {
        Value::Array(nodes) => {
            for node in nodes {
                collect_block_types(node, types);
            }
        }
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(graph)) => {
                for node in graph {
                    collect_node_types(node, types);
                }
            }
            _ => collect_node_types(block, types),
        },
        _ => {}
    }
}

fn collect_node_types(node: &Value, types: &mut Vec<String>) {
    let Some(declared) = node.get("@type").or_else(|| node.get("type")) else {
        return;
    };

    let mut push = |t: &str| {
        if !types.iter().any(|existing| existing == t) {
            types.push(t.to_string());
        }
    };

    match declared {
        Value::String(t) => push(t.as_str()),
        Value::Array(items) => items.iter().filter_map(Value::as_str).for_each(push),
        _ => {}
    }
}

/// Returns true for the schema.org Organization type in short or URL form
pub fn is_organization_type(schema_type: &str) -> bool {
    ORGANIZATION_TYPES.contains(&schema_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quoted_and_unquoted_type() {
        let html = r#"
            <script type="application/ld+json">{"@type":"WebSite"}</script>
            <script type=application/ld+json>{"@type":"Person"}</script>
        "#;
        let blocks = extract_structured_data(html);
        assert_eq!(blocks.len(), 2);
        assert_eq!(schema_types(&blocks), vec!["WebSite", "Person"]);
    }

    #[test]
    fn test_multiline_block() {
        let html = "<SCRIPT TYPE='application/ld+json'>\n{\n  \"@type\": \"Organization\"\n}\n</SCRIPT>";
        let blocks = extract_structured_data(html);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_malformed_block_dropped() {
        let html = r#"
            <script type="application/ld+json">{not json</script>
            <script type="application/ld+json">{"@type":"Article"}</script>
        "#;
        let blocks = extract_structured_data(html);
        assert_eq!(blocks.len(), 1);
        assert_eq!(schema_types(&blocks), vec!["Article"]);
    }

    #[test]
    fn test_other_scripts_ignored() {
        let html = r#"<script>var x = {"@type": "Organization"};</script><script src="/app.js"></script>"#;
        assert!(extract_structured_data(html).is_empty());
    }

    #[test]
    fn test_graph_types() {
        let blocks = vec![serde_json::json!({
            "@context": "https://schema.org",
            "@type": "Ignored",
            "@graph": [
                {"@type": "WebSite"},
                {"@type": "https://schema.org/Organization"},
                {"type": "WebPage"},
                {"name": "untyped"}
            ]
        })];
        assert_eq!(
            schema_types(&blocks),
            vec!["WebSite", "https://schema.org/Organization", "WebPage"]
        );
    }

    #[test]
    fn test_top_level_array() {
        let blocks = vec![serde_json::json!([{"@type": "Organization"}])];
        assert_eq!(schema_types(&blocks), vec!["Organization"]);
    }

    #[test]
    fn test_type_array_and_duplicates() {
        let blocks = vec![
            serde_json::json!({"@type": ["Organization", "LocalBusiness"]}),
            serde_json::json!({"@type": "Organization"}),
        ];
        assert_eq!(schema_types(&blocks), vec!["Organization", "LocalBusiness"]);
    }

    #[test]
    fn test_is_organization_type() {
        assert!(is_organization_type("Organization"));
        assert!(is_organization_type("https://schema.org/Organization"));
        assert!(is_organization_type("http://schema.org/Organization"));
        assert!(!is_organization_type("organization"));
        assert!(!is_organization_type("NGO"));
    }
}

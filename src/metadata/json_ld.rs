//! JSON-LD structured data extraction.
//!
//! Publishers embedding Schema.org JSON-LD are the most reliable metadata
//! source, so this runs before any meta-tag or DOM fallback. The walker
//! looks for the first object whose `@type` contains "article" or
//! "blogposting" (case-insensitive), descending through `@graph` arrays and
//! nested objects with a depth cap against pathological nesting.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;

/// Recursion guard for hostile or broken JSON-LD payloads.
const MAX_DEPTH: usize = 64;

/// Fields pulled from the first article-typed structured data object.
#[derive(Debug, Clone, Default)]
pub struct StructuredArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<String>,
    pub image: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Extract article fields from the document's JSON-LD scripts.
///
/// Scripts are visited in document order; unparseable JSON is skipped. The
/// first article-typed object wins.
#[must_use]
pub fn extract_structured_article(doc: &Document) -> Option<StructuredArticle> {
    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let script_sel = Selection::from(*script);
        let json_text = dom::text_content(&script_sel).trim().to_string();
        if json_text.is_empty() {
            continue;
        }

        let Ok(data) = serde_json::from_str::<Value>(&json_text) else {
            continue;
        };

        if let Some(article) = find_article_object(&data, 0) {
            return Some(article_fields(article));
        }
    }
    None
}

fn is_article_type(map: &Map<String, Value>) -> bool {
    let Some(type_value) = map.get("@type") else {
        return false;
    };

    let matches_article = |s: &str| {
        let lower = s.to_lowercase();
        lower.contains("article") || lower.contains("blogposting")
    };

    match type_value {
        Value::String(s) => matches_article(s),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .any(matches_article),
        _ => false,
    }
}

fn find_article_object(value: &Value, depth: usize) -> Option<&Map<String, Value>> {
    if depth > MAX_DEPTH {
        return None;
    }

    match value {
        Value::Object(map) => {
            if is_article_type(map) {
                return Some(map);
            }
            // Covers @graph arrays and arbitrarily nested containers.
            map.values()
                .find_map(|nested| find_article_object(nested, depth + 1))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_article_object(item, depth + 1)),
        _ => None,
    }
}

fn article_fields(map: &Map<String, Value>) -> StructuredArticle {
    StructuredArticle {
        title: single_string(map, "headline").or_else(|| single_string(map, "name")),
        description: single_string(map, "description"),
        author: map.get("author").and_then(person_name),
        date_published: single_string(map, "datePublished")
            .or_else(|| single_string(map, "dateCreated")),
        image: map.get("image").and_then(image_url),
        keywords: map.get("keywords").and_then(keyword_list),
    }
}

fn single_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Author field shapes: a plain string, an object with a `name`, or a
/// sequence of either (first non-empty wins).
fn person_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Object(map) => single_string(map, "name"),
        Value::Array(items) => items.iter().find_map(person_name),
        _ => None,
    }
}

/// Image field shapes: a URL string, an object with a `url`, or a sequence
/// of either (first non-empty wins).
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Object(map) => single_string(map, "url"),
        Value::Array(items) => items.iter().find_map(image_url),
        _ => None,
    }
}

/// Keywords: a sequence of strings, or one comma-separated string. Entries
/// are trimmed and empties dropped.
fn keyword_list(value: &Value) -> Option<Vec<String>> {
    let keywords: Vec<String> = match value {
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    (!keywords.is_empty()).then_some(keywords)
}

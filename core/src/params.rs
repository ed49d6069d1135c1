//! Query parameters and their URL-encoded form.
//!
//! # Design
//! `RequestParams` is an insertion-ordered JSON mapping so callers can pass
//! strings, numbers, booleans and string arrays without a bespoke value type.
//! `build_search_params` flattens it into `SearchParams`, expanding keys that
//! end in `[]` into one pair per array element (`statuses[]=a&statuses[]=b`).
//! Shapes the API cannot express in a query string are dropped silently.

use std::fmt;

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Query parameters for a single request, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a parameter, builder style.
    ///
    /// ```
    /// use clickup_core::RequestParams;
    ///
    /// let params = RequestParams::new()
    ///     .with("order_by", "due_date")
    ///     .with("statuses[]", vec!["in progress", "completed"]);
    /// assert_eq!(params.len(), 2);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered, URL-encodable key/value pairs.
///
/// `append` always adds a pair; `set` keeps a single pair per key, replacing
/// the first occurrence in place and dropping later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for SearchParams {
    /// `application/x-www-form-urlencoded`, spaces as `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

/// Converts request parameters to query pairs using LHS bracket notation.
pub fn build_search_params(query: &RequestParams) -> SearchParams {
    let mut params = SearchParams::new();

    for (key, value) in query.iter() {
        match value {
            Value::Array(entries) if key.ends_with("[]") => {
                for entry in entries {
                    if let Some(text) = scalar_text(entry) {
                        params.append(key.as_str(), text);
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    params.set(key.as_str(), text);
                }
            }
        }
    }

    params
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JavaScript-style truthiness, used for parameters the API defaults when
/// they are missing or falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_params_build_empty_search_params() {
        let params = build_search_params(&RequestParams::new());
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }

    #[test]
    fn supports_lhs_bracket_notation() {
        let query = RequestParams::new()
            .with("archive", false)
            .with("order_by", "due_date")
            .with("statuses[]", vec!["in progress", "completed"]);

        let params = build_search_params(&query);

        // Keys pass through unchanged; see DESIGN.md on the `archived` fixture.
        assert_eq!(
            params.pairs(),
            pairs(&[
                ("archive", "false"),
                ("order_by", "due_date"),
                ("statuses[]", "in progress"),
                ("statuses[]", "completed"),
            ])
            .as_slice()
        );
        assert_eq!(
            params.to_string(),
            "archive=false&order_by=due_date&statuses%5B%5D=in+progress&statuses%5B%5D=completed"
        );
    }

    #[test]
    fn numbers_and_booleans_are_stringified() {
        let query = RequestParams::new()
            .with("page", 0)
            .with("include_closed", true)
            .with("date_updated_gt", 1_508_369_194_377_u64);
        let params = build_search_params(&query);
        assert_eq!(
            params.pairs(),
            pairs(&[
                ("page", "0"),
                ("include_closed", "true"),
                ("date_updated_gt", "1508369194377"),
            ])
            .as_slice()
        );
    }

    #[test]
    fn nested_objects_and_null_are_skipped() {
        let query: RequestParams = json!({
            "custom_fields": {"id": "abc"},
            "subtasks": null,
            "page": 1,
        })
        .as_object()
        .cloned()
        .unwrap()
        .into();
        let params = build_search_params(&query);
        assert_eq!(params.pairs(), pairs(&[("page", "1")]).as_slice());
    }

    #[test]
    fn arrays_without_brackets_are_skipped() {
        let query = RequestParams::new().with("assignees", vec!["1", "2"]);
        assert!(build_search_params(&query).is_empty());
    }

    #[test]
    fn non_string_array_entries_are_stringified() {
        let query = RequestParams::new().with("assignees[]", json!([183, "184", null, {"x": 1}]));
        let params = build_search_params(&query);
        assert_eq!(
            params.pairs(),
            pairs(&[("assignees[]", "183"), ("assignees[]", "184")]).as_slice()
        );
    }

    #[test]
    fn bracket_key_with_scalar_value_is_set_once() {
        let query = RequestParams::new().with("tags[]", "urgent");
        let params = build_search_params(&query);
        assert_eq!(params.pairs(), pairs(&[("tags[]", "urgent")]).as_slice());
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut params = SearchParams::new();
        params.append("a", "1");
        params.append("b", "2");
        params.append("a", "3");
        params.set("a", "x");
        assert_eq!(params.pairs(), pairs(&[("a", "x"), ("b", "2")]).as_slice());
    }

    #[test]
    fn from_iterator_preserves_order() {
        let params: RequestParams = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn truthiness_matches_javascript() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(2)));
        assert!(is_truthy(&json!([])));
    }
}

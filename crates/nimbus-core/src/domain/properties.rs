//! `key=value` property parsing.
//!
//! Grammar, applied per token:
//!
//! - split on the **first** `=`; everything after it (including further
//!   `=` characters) is the value
//! - a bare `key` with no `=` maps to the empty-string value
//! - an empty token produces no entry
//! - repeated keys fold last-wins

use std::collections::BTreeMap;

/// Parse a single `key=value` token. Returns `None` for an empty token.
pub fn parse_property(token: &str) -> Option<(String, String)> {
    if token.is_empty() {
        return None;
    }
    match token.split_once('=') {
        Some((key, value)) => Some((key.to_string(), value.to_string())),
        None => Some((token.to_string(), String::new())),
    }
}

/// Fold a sequence of `key=value` tokens into a map, last occurrence wins.
pub fn fold_properties<'a, I>(tokens: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = BTreeMap::new();
    for token in tokens {
        if let Some((key, value)) = parse_property(token) {
            map.insert(key, value);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(
            parse_property("a=b=c"),
            Some(("a".to_string(), "b=c".to_string()))
        );
    }

    #[test]
    fn bare_key_maps_to_empty_value() {
        assert_eq!(
            parse_property("flag"),
            Some(("flag".to_string(), String::new()))
        );
    }

    #[test]
    fn empty_token_produces_nothing() {
        assert_eq!(parse_property(""), None);
    }

    #[test]
    fn key_may_be_empty_when_value_present() {
        assert_eq!(parse_property("=v"), Some((String::new(), "v".to_string())));
    }

    #[test]
    fn folding_is_last_wins() {
        let map = fold_properties(["a=1", "b=2", "a=3", ""]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], "3");
        assert_eq!(map["b"], "2");
    }
}

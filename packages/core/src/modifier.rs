//! The capability shared by every query modifier.

use serde_json::Value as JsonValue;
use url::Url;

/// Append one query parameter to a copy of `uri`.
///
/// Existing parameters are preserved and the original URI is left untouched.
/// Values use form encoding (`application/x-www-form-urlencoded`), so a
/// JSON-quoted `"value"` becomes `%22value%22`, a space becomes `+` and a
/// literal `+` becomes `%2B`. Form decoders, including the server's, read the
/// value back unchanged.
pub fn append_query_param(uri: &Url, name: &str, value: &str) -> Url {
    let mut modified = uri.clone();
    modified.query_pairs_mut().append_pair(name, value);
    modified
}

/// A filter or sorter that can be attached to a query.
pub trait Modifier {
    /// The query parameter this modifier renders.
    fn parameter_name(&self) -> &'static str;

    /// The unescaped parameter value.
    fn parameter_value(&self) -> String;

    /// Render this modifier onto a copy of `uri`.
    fn modify_uri(&self, uri: &Url) -> Url {
        append_query_param(uri, self.parameter_name(), &self.parameter_value())
    }

    /// Post-process a raw result. Most modifiers leave it untouched.
    fn modify_value(&self, value: JsonValue) -> JsonValue {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_original() {
        let uri = Url::parse("http://domain.tld").unwrap();
        let modified = append_query_param(&uri, "equalTo", "1");

        assert_eq!(uri.query(), None);
        assert_eq!(modified.query(), Some("equalTo=1"));
    }

    #[test]
    fn append_keeps_existing_parameters() {
        let uri = Url::parse("http://domain.tld/users.json?auth=token").unwrap();
        let modified = append_query_param(&uri, "orderBy", "\"$key\"");

        assert_eq!(modified.query(), Some("auth=token&orderBy=%22%24key%22"));
    }

    #[test]
    fn append_form_encodes_spaces_and_plus() {
        let uri = Url::parse("http://domain.tld").unwrap();
        let modified = append_query_param(&uri, "equalTo", "\"a b+c\"");

        assert_eq!(modified.query(), Some("equalTo=%22a+b%2Bc%22"));
        let (_, value) = modified.query_pairs().next().unwrap();
        assert_eq!(value, "\"a b+c\"");
    }

    #[test]
    fn append_chains() {
        let uri = Url::parse("http://domain.tld").unwrap();
        let modified = append_query_param(&append_query_param(&uri, "a", "1"), "b", "2");
        assert_eq!(modified.query(), Some("a=1&b=2"));
    }
}

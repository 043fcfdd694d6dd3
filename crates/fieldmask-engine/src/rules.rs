use serde_json::Value;
use sha2::{Digest, Sha256};

use fieldmask_core::value_to_text;

/// Replacement written by the `generalized` rule.
pub const GENERALIZED_TOKEN: &str = "****";

const PARTIAL_VISIBLE_CHARS: usize = 3;
const HASH_TOKEN_LEN: usize = 8;

/// Keep the first three characters and star the rest.
///
/// Returns `None` for values of three characters or fewer, which are left as-is.
pub fn partial_mask(value: &str) -> Option<String> {
    let total = value.chars().count();
    if total <= PARTIAL_VISIBLE_CHARS {
        return None;
    }
    let mut masked: String = value.chars().take(PARTIAL_VISIBLE_CHARS).collect();
    masked.push_str(&"*".repeat(total - PARTIAL_VISIBLE_CHARS));
    Some(masked)
}

/// First eight hex digits of the SHA-256 of the value's text form, upper-cased.
///
/// Tokens must match the ones the masking backend has always issued, so null
/// and booleans hash as `None`, `True` and `False`.
pub fn hash_token(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(hash_text(value).as_bytes());
    let digest = hasher.finalize();
    let mut token = hex::encode(digest);
    token.truncate(HASH_TOKEN_LEN);
    token.to_uppercase()
}

fn hash_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => value_to_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_mask_boundary() {
        assert_eq!(partial_mask("Bob"), None);
        assert_eq!(partial_mask("Ann").as_deref(), None);
        assert_eq!(partial_mask("Anna").as_deref(), Some("Ann*"));
        assert_eq!(partial_mask("").as_deref(), None);
    }

    #[test]
    fn partial_mask_counts_characters_not_bytes() {
        assert_eq!(partial_mask("José Álvares").as_deref(), Some("Jos*********"));
        assert_eq!(partial_mask("Zoë"), None);
    }

    #[test]
    fn hash_token_uses_text_form() {
        assert_eq!(hash_token(&json!("Alice")), "3BC51062");
        assert_eq!(hash_token(&json!(3.75)), "C02A87B5");
        assert_eq!(hash_token(&json!(2)), hash_token(&json!("2")));
        assert_eq!(hash_token(&json!(1e16)), "A1448385");
    }

    #[test]
    fn hash_token_renders_null_and_booleans_like_the_backend() {
        assert_eq!(hash_token(&Value::Null), "DC937B59");
        assert_eq!(hash_token(&json!(true)), "3CBC87C7");
        assert_eq!(hash_token(&Value::Null), hash_token(&json!("None")));
        assert_eq!(hash_token(&json!(false)), hash_token(&json!("False")));
    }
}

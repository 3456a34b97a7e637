//! Claims and header types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JWT claims set: a mapping from claim names to JSON values.
///
/// Claims are supplied by the caller and carried through encoding and
/// decoding unchanged, except for the `exp` key which
/// [`encode_with_expiry`](crate::encode_with_expiry) inserts into a clone.
/// A claims set can be built from a map or collected from an association
/// list of pairs:
///
/// ```
/// use serde_json::json;
/// use tokensmith::Claims;
///
/// let claims: Claims = [("iss", json!("issuer-1")), ("role", json!("admin"))]
///     .into_iter()
///     .collect();
/// assert_eq!(claims.get("role"), Some(&json!("admin")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Create an empty claims set.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a claim, returning the previous value if the name was present.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Look up a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether a claim with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of claims in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the claims set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the claims as (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(pairs: I) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// JWT header structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Algorithm identifier, e.g. `"HS256"`.
    pub alg: String,
    /// Token type, always `"JWT"`.
    pub typ: String,
}

impl JwtHeader {
    /// Create a header for the given algorithm identifier.
    #[must_use]
    pub fn new(alg: &str) -> Self {
        Self {
            alg: alg.to_string(),
            typ: "JWT".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn claims_collect_from_pairs() {
        let claims: Claims = [("sub", json!("user-1")), ("count", json!(3))]
            .into_iter()
            .collect();

        assert_eq!(claims.len(), 2);
        assert_eq!(claims.get("sub"), Some(&json!("user-1")));
        assert_eq!(claims.get("count"), Some(&json!(3)));
        assert!(!claims.contains("exp"));
    }

    #[test]
    fn claims_serialize_transparently() {
        let mut claims = Claims::new();
        claims.insert("iss", json!("issuer-1"));

        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"iss":"issuer-1"}"#);

        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claims);
    }

    #[test]
    fn claims_reject_non_object_json() {
        assert!(serde_json::from_str::<Claims>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<Claims>("\"text\"").is_err());
    }

    #[test]
    fn header_is_fixed_shape() {
        let header = JwtHeader::new("HS256");
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }
}

//! Attribute matchers and ordered attribute specifications.

use serde_json::Value;

use crate::pattern::{parse_pattern, Pattern, PatternDescriptor};
use crate::result::{LocatorError, LocatorResult};

/// How a single attribute is matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Attribute equals the string exactly
    Exact(String),
    /// Attribute matches an anchored/unanchored pattern
    Pattern(PatternDescriptor),
}

impl AttributeValue {
    /// Exact-match value
    #[must_use]
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    /// Pattern value, parsed up front so emission cannot fail
    pub fn pattern(pattern: &Pattern) -> LocatorResult<Self> {
        parse_pattern(pattern).map(Self::Pattern)
    }

    /// Validate a JSON value for attribute `name`
    ///
    /// Strings are exact matches and `{"pattern": .., "flags": ..}` objects are
    /// patterns. Every other JSON type is rejected.
    pub fn from_json(name: &str, value: &Value) -> LocatorResult<Self> {
        match value {
            Value::String(s) => Ok(Self::exact(s.as_str())),
            Value::Object(_) => {
                let pattern: Pattern = serde_json::from_value(value.clone()).map_err(|e| {
                    LocatorError::InvalidAttributeObject {
                        name: name.to_string(),
                        message: e.to_string(),
                    }
                })?;
                Self::pattern(&pattern)
            }
            other => Err(LocatorError::UnsupportedAttributeType {
                name: name.to_string(),
                found: json_type_name(other).to_string(),
            }),
        }
    }

    /// Whether this is a pattern match
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::exact(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

impl From<PatternDescriptor> for AttributeValue {
    fn from(descriptor: PatternDescriptor) -> Self {
        Self::Pattern(descriptor)
    }
}

impl TryFrom<&Pattern> for AttributeValue {
    type Error = LocatorError;

    fn try_from(pattern: &Pattern) -> Result<Self, Self::Error> {
        Self::pattern(pattern)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Attribute name to matcher, in insertion order
///
/// ```
/// use xpath_attrs::{AttributeSpec, Pattern};
///
/// let spec = AttributeSpec::new()
///     .with("id", "container")
///     .with_pattern("class", &Pattern::new("is"))
///     .unwrap();
/// assert_eq!(spec.names().collect::<Vec<_>>(), ["id", "class"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSpec {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeSpec {
    /// Create an empty specification
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute matcher
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace an attribute pattern
    pub fn with_pattern(mut self, name: impl Into<String>, pattern: &Pattern) -> LocatorResult<Self> {
        self.insert(name, AttributeValue::pattern(pattern)?);
        Ok(self)
    }

    /// Insert a matcher; an existing name keeps its position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Matcher for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No attributes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Merge `other` into this specification, later entries winning
    pub fn extend(&mut self, other: Self) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Build from a JSON object, preserving key order
    pub fn from_json_value(value: &Value) -> LocatorResult<Self> {
        let Value::Object(map) = value else {
            return Err(LocatorError::InvalidSpecification {
                message: format!("expected a JSON object, found {}", json_type_name(value)),
            });
        };
        let mut spec = Self::new();
        for (name, value) in map {
            spec.insert(name.as_str(), AttributeValue::from_json(name, value)?);
        }
        Ok(spec)
    }

    /// Parse a JSON document such as `{"id": "x", "class": {"pattern": "^a"}}`
    pub fn from_json_str(json: &str) -> LocatorResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSpec
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (name, value) in iter {
            spec.insert(name, value);
        }
        spec
    }
}

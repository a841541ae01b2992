//! Axis locators in `xpath=` notation.
//!
//! ```
//! use xpath_attrs::{child, parent, AttributeSpec};
//!
//! assert_eq!(child(&AttributeSpec::new(), None), "xpath=//*");
//! let spec = AttributeSpec::new().with("id", "container");
//! assert_eq!(parent(&spec, Some("div")), "xpath=ancestor::div[@id='container']");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attribute::AttributeSpec;
use crate::emit;

/// Prefix understood by browser automation engines for XPath locators
pub const XPATH_PREFIX: &str = "xpath=";

/// Node test used when no node name is given
pub const ANY_NODE: &str = "*";

/// Direction of the search relative to the context node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Any descendant, searched with `//`
    Child,
    /// `ancestor::`
    Parent,
    /// `following-sibling::`
    NextSibling,
    /// `preceding-sibling::`
    PrevSibling,
}

impl Axis {
    /// All axes
    pub const ALL: [Self; 4] = [Self::Child, Self::Parent, Self::NextSibling, Self::PrevSibling];

    /// Text placed before the node test
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Child => "//",
            Self::Parent => "ancestor::",
            Self::NextSibling => "following-sibling::",
            Self::PrevSibling => "preceding-sibling::",
        }
    }

    /// Name used on the command line and in serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Parent => "parent",
            Self::NextSibling => "next-sibling",
            Self::PrevSibling => "prev-sibling",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown axis name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown axis {name:?}: expected child, parent, next-sibling or prev-sibling")]
pub struct AxisParseError {
    /// Name as supplied
    pub name: String,
}

impl FromStr for Axis {
    type Err = AxisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.name() == s)
            .ok_or_else(|| AxisParseError {
                name: s.to_string(),
            })
    }
}

/// A single XPath step: axis, node test and optional predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathLocator {
    axis: Axis,
    node: String,
    predicate: Option<String>,
}

impl XPathLocator {
    /// Locator for `attributes` along `axis`, matching any node
    #[must_use]
    pub fn new(axis: Axis, attributes: &AttributeSpec) -> Self {
        let predicate = (!attributes.is_empty()).then(|| emit::predicate(attributes));
        Self {
            axis,
            node: ANY_NODE.to_string(),
            predicate,
        }
    }

    /// Restrict to elements named `node`
    #[must_use]
    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    /// The axis
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The node test
    #[must_use]
    pub fn node_test(&self) -> &str {
        &self.node
    }

    /// The predicate, if any attributes were given
    #[must_use]
    pub fn predicate(&self) -> Option<&str> {
        self.predicate.as_deref()
    }

    /// Whether a bracketed predicate is present
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.predicate.is_some()
    }

    /// XPath without the `xpath=` prefix
    #[must_use]
    pub fn expression(&self) -> String {
        let step = format!("{}{}", self.axis.prefix(), self.node);
        match &self.predicate {
            Some(predicate) => format!("{step}[{predicate}]"),
            None => step,
        }
    }
}

impl fmt::Display for XPathLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{XPATH_PREFIX}{}", self.expression())
    }
}

/// `xpath=<axis><node>[<predicate>]`, node defaulting to `*`
#[must_use]
pub fn path_for(axis: Axis, attributes: &AttributeSpec, node: Option<&str>) -> String {
    let locator = XPathLocator::new(axis, attributes).node(node.unwrap_or(ANY_NODE));
    debug!(%axis, attributes = attributes.len(), "built locator");
    locator.to_string()
}

/// Descendants of the context node
#[must_use]
pub fn child(attributes: &AttributeSpec, node: Option<&str>) -> String {
    path_for(Axis::Child, attributes, node)
}

/// Ancestors of the context node
#[must_use]
pub fn parent(attributes: &AttributeSpec, node: Option<&str>) -> String {
    path_for(Axis::Parent, attributes, node)
}

/// Siblings after the context node
#[must_use]
pub fn next_sibling(attributes: &AttributeSpec, node: Option<&str>) -> String {
    path_for(Axis::NextSibling, attributes, node)
}

/// Siblings before the context node
#[must_use]
pub fn prev_sibling(attributes: &AttributeSpec, node: Option<&str>) -> String {
    path_for(Axis::PrevSibling, attributes, node)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    mod axis_tests {
        use super::*;

        #[test]
        fn test_prefixes() {
            assert_eq!(Axis::Child.prefix(), "//");
            assert_eq!(Axis::Parent.prefix(), "ancestor::");
            assert_eq!(Axis::NextSibling.prefix(), "following-sibling::");
            assert_eq!(Axis::PrevSibling.prefix(), "preceding-sibling::");
        }

        #[test]
        fn test_parse_names() {
            for axis in Axis::ALL {
                assert_eq!(axis.name().parse::<Axis>().unwrap(), axis);
            }
            assert!("sibling".parse::<Axis>().is_err());
        }

        #[test]
        fn test_serde_kebab_case() {
            let json = serde_json::to_string(&Axis::NextSibling).unwrap();
            assert_eq!(json, "\"next-sibling\"");
            let axis: Axis = serde_json::from_str("\"prev-sibling\"").unwrap();
            assert_eq!(axis, Axis::PrevSibling);
        }
    }

    mod helper_tests {
        use super::*;

        #[test]
        fn test_empty_spec_has_no_brackets() {
            let empty = AttributeSpec::new();
            assert_eq!(child(&empty, None), "xpath=//*");
            assert_eq!(parent(&empty, Some("body")), "xpath=ancestor::body");
            assert_eq!(next_sibling(&empty, Some("div")), "xpath=following-sibling::div");
            assert_eq!(prev_sibling(&empty, None), "xpath=preceding-sibling::*");
        }

        #[test]
        fn test_child_exact() {
            let spec = AttributeSpec::new().with("id", "x");
            assert_eq!(child(&spec, None), "xpath=//*[@id='x']");
        }

        #[test]
        fn test_child_multiple_attributes() {
            let spec = AttributeSpec::new()
                .with("id", "container")
                .with_pattern("class", &Pattern::new("is"))
                .unwrap();
            assert_eq!(
                child(&spec, None),
                "xpath=//*[@id='container' and contains(@class, 'is')]"
            );
        }

        #[test]
        fn test_sibling_patterns() {
            let spec = AttributeSpec::new()
                .with_pattern("id", &Pattern::new("2"))
                .unwrap();
            assert_eq!(
                next_sibling(&spec, None),
                "xpath=following-sibling::*[contains(@id, '2')]"
            );
            assert_eq!(
                prev_sibling(&spec, Some("li")),
                "xpath=preceding-sibling::li[contains(@id, '2')]"
            );
        }

        #[test]
        fn test_parent_pattern() {
            let spec = AttributeSpec::new()
                .with_pattern("id", &Pattern::case_insensitive("^Contain"))
                .unwrap();
            assert_eq!(
                parent(&spec, None),
                "xpath=ancestor::*[@id[starts-with(normalize-space(translate(.,'ABCDEFGHIJKLMNOPQRSTUVWXYZ','abcdefghijklmnopqrstuvwxyz')), 'contain')]]"
            );
        }
    }

    mod locator_tests {
        use super::*;

        #[test]
        fn test_expression_without_prefix() {
            let spec = AttributeSpec::new().with("id", "x");
            let locator = XPathLocator::new(Axis::Child, &spec).node("div");
            assert_eq!(locator.expression(), "//div[@id='x']");
            assert_eq!(locator.to_string(), "xpath=//div[@id='x']");
            assert!(locator.is_filtered());
            assert_eq!(locator.predicate(), Some("@id='x'"));
            assert_eq!(locator.node_test(), "div");
            assert_eq!(locator.axis(), Axis::Child);
        }

        #[test]
        fn test_unfiltered_locator() {
            let locator = XPathLocator::new(Axis::Parent, &AttributeSpec::new());
            assert!(!locator.is_filtered());
            assert_eq!(locator.predicate(), None);
            assert_eq!(locator.to_string(), "xpath=ancestor::*");
        }
    }
}

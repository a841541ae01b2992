//! xpath-attrs: attribute matchers to XPath locators
//!
//! Browser tests often want "the element whose `id` starts with `grandchild`"
//! or "whose `class` ends in `-active`, ignoring case". XPath 1.0 has no regex
//! support, so this crate translates a small family of patterns (optional `^`,
//! literal text, optional `$`, optional `i` flag) into the equivalent
//! `starts-with`, `substring` and `contains` expressions.
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────┐    ┌───────────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ Pattern    │───►│ PatternDescriptor │───►│ predicate()  │───►│ XPathLocator│
//! │ /^item/i   │    │ anchors, case,    │    │ @a='x' and … │    │ xpath=//*[…]│
//! └────────────┘    │ content           │    └──────────────┘    └─────────────┘
//!                   └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use xpath_attrs::prelude::*;
//!
//! let spec = AttributeSpec::new()
//!     .with("id", "container")
//!     .with_pattern("class", &Pattern::new("is"))?;
//! assert_eq!(
//!     child(&spec, None),
//!     "xpath=//*[@id='container' and contains(@class, 'is')]"
//! );
//! # Ok::<(), LocatorError>(())
//! ```

#![warn(missing_docs)]

mod attribute;
mod emit;
mod path;
mod pattern;
mod result;

pub use attribute::{AttributeSpec, AttributeValue};
pub use emit::{
    attribute_predicate, descriptor_predicate, exact_predicate, predicate, regex_predicate,
    LOWERCASE, PREDICATE_SEPARATOR, UPPERCASE,
};
pub use path::{
    child, next_sibling, parent, path_for, prev_sibling, Axis, AxisParseError, XPathLocator,
    ANY_NODE, XPATH_PREFIX,
};
pub use pattern::{is_content_char, parse_pattern, Pattern, PatternDescriptor, VALID_FLAGS};
pub use result::{LocatorError, LocatorResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::attribute::*;
    pub use super::emit::*;
    pub use super::path::*;
    pub use super::pattern::*;
    pub use super::result::*;
}

//! XPath predicate emission.
//!
//! Each attribute matcher becomes one XPath 1.0 boolean expression. Patterns
//! pick a template by anchor (start, then end, then neither) and by case
//! sensitivity. Case-insensitive templates fold with `translate()` over the
//! 26 Latin letters, so non-Latin scripts keep their case.
//!
//! Values are interpolated as-is: a single quote in an exact value or in an
//! attribute name produces malformed XPath.

use tracing::{debug, trace};

use crate::attribute::{AttributeSpec, AttributeValue};
use crate::pattern::{parse_pattern, Pattern, PatternDescriptor};
use crate::result::LocatorResult;

/// Upper-case alphabet used as the `translate()` source set
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lower-case alphabet used as the `translate()` target set
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Separator between attribute predicates
pub const PREDICATE_SEPARATOR: &str = " and ";

/// `translate(<expr>,'A..Z','a..z')`
fn lowercase(expr: &str) -> String {
    format!("translate({expr},'{UPPERCASE}','{LOWERCASE}')")
}

/// Predicate for one attribute
#[must_use]
pub fn attribute_predicate(name: &str, value: &AttributeValue) -> String {
    let xpath = match value {
        AttributeValue::Exact(s) => exact_predicate(name, s),
        AttributeValue::Pattern(descriptor) => descriptor_predicate(name, descriptor),
    };
    trace!(attribute = name, %xpath, "emitted predicate");
    xpath
}

/// `@name='value'`
#[must_use]
pub fn exact_predicate(name: &str, value: &str) -> String {
    format!("@{name}='{value}'")
}

/// Parse `pattern` and emit its predicate for attribute `name`
///
/// ```
/// use xpath_attrs::{regex_predicate, Pattern};
///
/// let xpath = regex_predicate("class", &Pattern::new("middle-class")).unwrap();
/// assert_eq!(xpath, "contains(@class, 'middle-class')");
/// ```
pub fn regex_predicate(name: &str, pattern: &Pattern) -> LocatorResult<String> {
    let descriptor = parse_pattern(pattern)?;
    Ok(descriptor_predicate(name, &descriptor))
}

/// Predicate for a parsed pattern
///
/// The start anchor takes precedence: `^abc$` emits the `starts-with` form
/// and the end anchor is not checked.
#[must_use]
pub fn descriptor_predicate(name: &str, descriptor: &PatternDescriptor) -> String {
    let content = descriptor.folded_content();
    let attr = format!("@{name}");

    if descriptor.start_anchor {
        if descriptor.end_anchor {
            debug!(attribute = name, "end anchor ignored alongside start anchor");
        }
        return if descriptor.ignore_case {
            format!(
                "{attr}[starts-with(normalize-space({}), '{content}')]",
                lowercase(".")
            )
        } else {
            format!("{attr}[starts-with(normalize-space(.),'{content}')]")
        };
    }

    if descriptor.end_anchor {
        let subject = if descriptor.ignore_case {
            lowercase(&attr)
        } else {
            attr
        };
        return format!(
            "substring(normalize-space({subject}), string-length(normalize-space({subject})) - string-length('{content}') + 1) = '{content}'"
        );
    }

    if descriptor.ignore_case {
        format!("contains({}, '{content}')", lowercase(&attr))
    } else {
        format!("contains({attr}, '{content}')")
    }
}

/// All attribute predicates joined with ` and `, in specification order
///
/// An empty specification gives an empty string.
#[must_use]
pub fn predicate(attributes: &AttributeSpec) -> String {
    attributes
        .iter()
        .map(|(name, value)| attribute_predicate(name, value))
        .collect::<Vec<_>>()
        .join(PREDICATE_SEPARATOR)
}

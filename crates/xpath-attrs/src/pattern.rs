//! Attribute patterns and their anchor/case decomposition.
//!
//! A [`Pattern`] is a regular expression in the constrained shape the XPath
//! emitter understands: an optional `^`, literal content made of letters,
//! digits, `-`, `_` and whitespace, then an optional `$`. Anything richer
//! (quantifiers, classes, alternation, escapes) is rejected when the pattern
//! is parsed into a [`PatternDescriptor`].
//!
//! ```
//! use xpath_attrs::{parse_pattern, Pattern};
//!
//! let pattern: Pattern = "/^Item/i".parse().unwrap();
//! let descriptor = parse_pattern(&pattern).unwrap();
//! assert!(descriptor.start_anchor);
//! assert!(descriptor.ignore_case);
//! assert_eq!(descriptor.content, "Item");
//! ```

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::result::{LocatorError, LocatorResult};

/// Flag letters accepted in `/source/flags` notation
pub const VALID_FLAGS: &str = "dgimsuvy";

/// A regular expression given as source text plus flag letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PatternFields")]
pub struct Pattern {
    /// Pattern text without delimiters
    #[serde(rename = "pattern")]
    source: String,
    /// Flag letters (only `i` affects the generated XPath)
    flags: String,
}

/// Serialized form, validated into a [`Pattern`]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternFields {
    pattern: String,
    #[serde(default)]
    flags: String,
}

impl TryFrom<PatternFields> for Pattern {
    type Error = LocatorError;

    fn try_from(fields: PatternFields) -> Result<Self, Self::Error> {
        Self::with_flags(fields.pattern, fields.flags)
    }
}

impl Pattern {
    /// Create a case-sensitive pattern
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: String::new(),
        }
    }

    /// Create a case-insensitive pattern (the `i` flag)
    #[must_use]
    pub fn case_insensitive(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: "i".to_string(),
        }
    }

    /// Create a pattern with explicit flags
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::InvalidPatternFlags`] for unknown or repeated letters
    pub fn with_flags(source: impl Into<String>, flags: impl Into<String>) -> LocatorResult<Self> {
        let flags = flags.into();
        validate_flags(&flags)?;
        Ok(Self {
            source: source.into(),
            flags,
        })
    }

    /// Parse `/source/flags` notation
    ///
    /// The source runs up to the last `/`, so `/a/b/` has source `a/b`.
    pub fn from_literal(literal: &str) -> LocatorResult<Self> {
        let malformed = || LocatorError::MalformedPatternLiteral {
            literal: literal.to_string(),
        };
        let body = literal.strip_prefix('/').ok_or_else(malformed)?;
        let close = body.rfind('/').ok_or_else(malformed)?;
        Self::with_flags(&body[..close], &body[close + 1..])
    }

    /// Pattern text without delimiters
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flag letters
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Whether the `i` flag is set
    #[must_use]
    pub fn ignore_case(&self) -> bool {
        self.flags.contains('i')
    }

    /// Compile into a [`Regex`] honouring the `i`, `m` and `s` flags
    ///
    /// Useful for checking an attribute value locally, without a browser.
    pub fn to_regex(&self) -> LocatorResult<Regex> {
        RegexBuilder::new(&self.source)
            .case_insensitive(self.ignore_case())
            .multi_line(self.flags.contains('m'))
            .dot_matches_new_line(self.flags.contains('s'))
            .build()
            .map_err(|e| LocatorError::InvalidRegex {
                pattern: self.to_string(),
                message: e.to_string(),
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl FromStr for Pattern {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s)
    }
}

fn validate_flags(flags: &str) -> LocatorResult<()> {
    let mut seen = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if !VALID_FLAGS.contains(flag) || seen.contains(flag) {
            return Err(LocatorError::InvalidPatternFlags {
                flags: flags.to_string(),
            });
        }
        seen.push(flag);
    }
    Ok(())
}

/// Canonical decomposition of a [`Pattern`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternDescriptor {
    /// Match without regard to ASCII letter case
    pub ignore_case: bool,
    /// Pattern begins with `^`
    pub start_anchor: bool,
    /// Pattern ends with `$`
    pub end_anchor: bool,
    /// Literal text between the anchors
    pub content: String,
}

impl PatternDescriptor {
    /// Content as it appears in the XPath: lowercased when matching ignores case
    #[must_use]
    pub fn folded_content(&self) -> String {
        if self.ignore_case {
            self.content.to_lowercase()
        } else {
            self.content.clone()
        }
    }
}

impl TryFrom<&Pattern> for PatternDescriptor {
    type Error = LocatorError;

    fn try_from(pattern: &Pattern) -> Result<Self, Self::Error> {
        parse_pattern(pattern)
    }
}

/// Characters allowed in pattern content
#[must_use]
pub fn is_content_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c.is_whitespace()
}

/// Decompose a pattern into its anchors, case flag and literal content
///
/// # Errors
///
/// Returns [`LocatorError::UnparsablePatternContent`] when the text between
/// the anchors is empty or contains anything outside `[A-Za-z0-9_\-\s]`.
pub fn parse_pattern(pattern: &Pattern) -> LocatorResult<PatternDescriptor> {
    let raw = pattern.source();
    let start_anchor = raw.starts_with('^');
    let end_anchor = raw.ends_with('$');

    let content = raw.strip_prefix('^').unwrap_or(raw);
    let content = content.strip_suffix('$').unwrap_or(content);
    if content.is_empty() || !content.chars().all(is_content_char) {
        return Err(LocatorError::UnparsablePatternContent {
            pattern: pattern.to_string(),
        });
    }

    debug!(%pattern, start_anchor, end_anchor, "parsed pattern");
    Ok(PatternDescriptor {
        ignore_case: pattern.ignore_case(),
        start_anchor,
        end_anchor,
        content: content.to_string(),
    })
}

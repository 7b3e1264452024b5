//! Field anchors: where each tracked value lives in the template.
//!
//! An anchor is a line-bound pattern with two named groups, `lead` and
//! `tail`, around the numeric literal. Substitution rewrites only the
//! literal and copies both groups through unchanged.

use std::borrow::Cow;

use borefield_cases::TrackedField;
use regex::{Captures, Regex};
use thiserror::Error;

/// How a render treats an anchor that does not match exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// Zero or multiple matches are errors.
    #[default]
    Strict,
    /// A missing anchor leaves the template text as is and is recorded;
    /// with multiple matches only the first is replaced.
    Lenient,
}

/// Errors raised while building or applying anchors.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// The anchor pattern does not compile.
    #[error("invalid anchor pattern for `{field}`: {source}")]
    InvalidPattern {
        /// Field the pattern belongs to.
        field: TrackedField,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// The anchor pattern lacks a required capture group.
    #[error("anchor pattern for `{field}` has no `{group}` group")]
    MissingGroup {
        /// Field the pattern belongs to.
        field: TrackedField,
        /// Name of the absent group.
        group: &'static str,
    },
    /// No template line matches the anchor.
    #[error("anchor for `{field}` not found in template")]
    Missing {
        /// Field whose anchor is absent.
        field: TrackedField,
    },
    /// More than one template line matches the anchor.
    #[error("anchor for `{field}` matched {count} lines, expected exactly one")]
    Ambiguous {
        /// Field whose anchor is ambiguous.
        field: TrackedField,
        /// Number of matching lines.
        count: usize,
    },
}

/// Conductivity and heat capacity accept exponent notation.
const SCIENTIFIC: &str = r"[0-9.eE+\-]+";
const DECIMAL: &str = r"[0-9.]+";

/// A compiled matcher/replacer for one tracked field.
#[derive(Debug, Clone)]
pub struct FieldAnchor {
    /// Field this anchor locates.
    pub field: TrackedField,
    pattern: Regex,
}

impl FieldAnchor {
    /// Compiles an anchor from a pattern with `lead` and `tail` groups.
    ///
    /// The pattern is compiled in multi-line mode so `^` and `$` bind to
    /// template lines.
    ///
    /// # Errors
    ///
    /// Returns [`AnchorError::InvalidPattern`] if the pattern does not
    /// compile, or [`AnchorError::MissingGroup`] if a group is absent.
    pub fn new(field: TrackedField, pattern: &str) -> Result<Self, AnchorError> {
        let pattern = Regex::new(&format!("(?m){pattern}"))
            .map_err(|source| AnchorError::InvalidPattern { field, source })?;
        for group in ["lead", "tail"] {
            if !pattern.capture_names().flatten().any(|name| name == group) {
                return Err(AnchorError::MissingGroup { field, group });
            }
        }
        Ok(Self { field, pattern })
    }

    /// Returns the number of template lines this anchor matches.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    /// Replaces the numeric literal on the first matching line.
    ///
    /// Returns `None` when nothing matches (lenient mode only).
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`AnchorError::Missing`] or
    /// [`AnchorError::Ambiguous`] unless the anchor matches exactly once.
    pub fn apply<'t>(
        &self,
        text: &'t str,
        literal: &str,
        mode: AnchorMode,
    ) -> Result<Option<Cow<'t, str>>, AnchorError> {
        let count = self.count(text);
        match (count, mode) {
            (0, AnchorMode::Strict) => return Err(AnchorError::Missing { field: self.field }),
            (0, AnchorMode::Lenient) => return Ok(None),
            (1, _) | (_, AnchorMode::Lenient) => {}
            (count, AnchorMode::Strict) => {
                return Err(AnchorError::Ambiguous {
                    field: self.field,
                    count,
                })
            }
        }
        let replaced = self.pattern.replacen(text, 1, |caps: &Captures<'_>| {
            let lead = caps.name("lead").map_or("", |m| m.as_str());
            let tail = caps.name("tail").map_or("", |m| m.as_str());
            format!("{lead}{literal}{tail}")
        });
        Ok(Some(replaced))
    }
}

/// The full set of anchors used for a render.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    anchors: Vec<FieldAnchor>,
}

impl AnchorSet {
    /// Returns the anchors of the borehole simulation script.
    ///
    /// | Field | Line shape |
    /// |-------|-----------|
    /// | `k_rock` | `  <n>,  # k_rock … # CHANGED` |
    /// | `rho_c_rock` | `  <n>,  # rho_c_rock … # CHANGED` |
    /// | `borehole_spacing` | `borehole_spacing = <n>  # CHANGED` |
    /// | depth | `  <n>,  # h - borehole depth … # CHANGED` |
    /// | `Q` | `Q = <n>  # heat extraction rate … # CHANGED` |
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in pattern fails to compile.
    pub fn standard() -> Result<Self, AnchorError> {
        let patterns = [
            (
                TrackedField::Conductivity,
                format!(r"^(?P<lead>[ \t]+){SCIENTIFIC}(?P<tail>,[ \t]+# k_rock .* # CHANGED)"),
            ),
            (
                TrackedField::HeatCapacity,
                format!(r"^(?P<lead>[ \t]+){SCIENTIFIC}(?P<tail>,[ \t]+# rho_c_rock .* # CHANGED)"),
            ),
            (
                TrackedField::Spacing,
                format!(r"^(?P<lead>borehole_spacing = ){DECIMAL}(?P<tail>[ \t]+# CHANGED)"),
            ),
            (
                TrackedField::Depth,
                format!(r"^(?P<lead>[ \t]+){DECIMAL}(?P<tail>,[ \t]+# h - borehole depth .* # CHANGED)"),
            ),
            (
                TrackedField::ExtractionRate,
                format!(r"^(?P<lead>Q = ){DECIMAL}(?P<tail>[ \t]+# heat extraction rate .* # CHANGED)"),
            ),
        ];
        let anchors = patterns
            .iter()
            .map(|(field, pattern)| FieldAnchor::new(*field, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { anchors })
    }

    /// Builds a set from caller-supplied anchors.
    #[must_use]
    pub fn from_anchors(anchors: Vec<FieldAnchor>) -> Self {
        Self { anchors }
    }

    /// Iterates the anchors in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldAnchor> {
        self.anchors.iter()
    }

    /// Returns how many lines of `text` each anchor matches.
    #[must_use]
    pub fn census(&self, text: &str) -> Vec<(TrackedField, usize)> {
        self.anchors
            .iter()
            .map(|anchor| (anchor.field, anchor.count(text)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn anchor(field: TrackedField) -> FieldAnchor {
        AnchorSet::standard()
            .unwrap()
            .iter()
            .find(|a| a.field == field)
            .cloned()
            .unwrap()
    }

    #[test]
    fn conductivity_keeps_indent_and_comment() {
        let text = "rock = (\n  2.5,   # k_rock (W/m-K) # CHANGED\n)\n";
        let out = anchor(TrackedField::Conductivity)
            .apply(text, "3.2", AnchorMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(out, "rock = (\n  3.2,   # k_rock (W/m-K) # CHANGED\n)\n");
    }

    #[test]
    fn conductivity_accepts_exponent_literal() {
        let text = "    2.1e0,  # k_rock (W/m-K) # CHANGED\n";
        let out = anchor(TrackedField::Conductivity)
            .apply(text, "4.5", AnchorMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(out, "    4.5,  # k_rock (W/m-K) # CHANGED\n");
    }

    #[test]
    fn spacing_zero_is_written() {
        let text = "borehole_spacing = 25    # CHANGED\n";
        let out = anchor(TrackedField::Spacing)
            .apply(text, "0", AnchorMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(out, "borehole_spacing = 0    # CHANGED\n");
    }

    #[test]
    fn unmarked_line_is_not_an_anchor() {
        let text = "borehole_spacing = 25\nQ = 100  # heat extraction rate (W)\n";
        assert_eq!(anchor(TrackedField::Spacing).count(text), 0);
        assert_eq!(anchor(TrackedField::ExtractionRate).count(text), 0);
    }

    #[test]
    fn strict_missing_anchor_names_field() {
        let err = anchor(TrackedField::Depth)
            .apply("nothing here\n", "1500", AnchorMode::Strict)
            .unwrap_err();
        assert!(matches!(
            err,
            AnchorError::Missing {
                field: TrackedField::Depth
            }
        ));
        assert_eq!(err.to_string(), "anchor for `depth` not found in template");
    }

    #[test]
    fn lenient_missing_anchor_is_none() {
        let out = anchor(TrackedField::Depth)
            .apply("nothing here\n", "1500", AnchorMode::Lenient)
            .unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn strict_rejects_duplicates() {
        let text = "Q = 1  # heat extraction rate (W) # CHANGED\nQ = 2  # heat extraction rate (W) # CHANGED\n";
        let err = anchor(TrackedField::ExtractionRate)
            .apply(text, "9", AnchorMode::Strict)
            .unwrap_err();
        assert!(matches!(err, AnchorError::Ambiguous { count: 2, .. }));
    }

    #[test]
    fn lenient_replaces_first_duplicate_only() {
        let text = "Q = 1  # heat extraction rate (W) # CHANGED\nQ = 2  # heat extraction rate (W) # CHANGED\n";
        let out = anchor(TrackedField::ExtractionRate)
            .apply(text, "9", AnchorMode::Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(
            out,
            "Q = 9  # heat extraction rate (W) # CHANGED\nQ = 2  # heat extraction rate (W) # CHANGED\n"
        );
    }

    #[test]
    fn custom_anchor_requires_groups() {
        let err = FieldAnchor::new(TrackedField::Depth, r"^depth = [0-9]+$").unwrap_err();
        assert!(matches!(err, AnchorError::MissingGroup { group: "lead", .. }));
    }

    #[test]
    fn custom_anchor_rejects_bad_regex() {
        let err = FieldAnchor::new(TrackedField::Depth, r"(?P<lead>[").unwrap_err();
        assert!(matches!(err, AnchorError::InvalidPattern { .. }));
    }

    #[test]
    fn census_counts_every_field() {
        let set = AnchorSet::standard().unwrap();
        let census = set.census("borehole_spacing = 0  # CHANGED\n");
        assert_eq!(census.len(), 5);
        assert!(census.contains(&(TrackedField::Spacing, 1)));
        assert!(census.contains(&(TrackedField::Conductivity, 0)));
    }
}

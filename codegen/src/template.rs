//! The simulation template and per-case rendering.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use borefield_cases::{CaseRecord, TrackedField};

use crate::anchor::{AnchorError, AnchorMode, AnchorSet};

/// File extension of generated simulation inputs.
pub const CASE_EXTENSION: &str = "jl";

/// Default template path, relative to the working directory.
pub const DEFAULT_TEMPLATE: &str = "case_001.jl";

/// Returns the simulation input file name for a case index (`case_007.jl`).
#[must_use]
pub fn case_file_name(index: u32) -> String {
    format!("{}.{CASE_EXTENSION}", borefield_cases::case_stem(index))
}

/// An immutable template document.
#[derive(Debug, Clone)]
pub struct Template {
    path: Option<PathBuf>,
    source: String,
}

impl Template {
    /// Reads a template from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Wraps in-memory template text.
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            path: None,
            source: source.into(),
        }
    }

    /// Returns the path the template was loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the document for one case.
    ///
    /// Anchors are applied in order, each to the output of the previous one.
    /// The template itself is never modified.
    ///
    /// # Errors
    ///
    /// In [`AnchorMode::Strict`], returns the first anchor that does not
    /// match exactly once.
    pub fn render(
        &self,
        case: &CaseRecord,
        anchors: &AnchorSet,
        mode: AnchorMode,
    ) -> Result<RenderedCase, AnchorError> {
        let mut content = self.source.clone();
        let mut missing = Vec::new();
        for anchor in anchors.iter() {
            let literal = anchor.field.literal(case);
            let replaced = anchor
                .apply(&content, &literal, mode)?
                .map(std::borrow::Cow::into_owned);
            match replaced {
                Some(next) => content = next,
                None => missing.push(anchor.field),
            }
        }
        Ok(RenderedCase {
            index: case.index,
            file_name: case_file_name(case.index),
            content,
            missing,
        })
    }
}

/// One generated simulation input, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCase {
    /// Case index.
    pub index: u32,
    /// Output file name (`case_<NNN>.jl`).
    pub file_name: String,
    /// Full document text.
    pub content: String,
    /// Fields left unsubstituted because their anchor was absent.
    pub missing: Vec<TrackedField>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use borefield_cases::{Layout, Sweep};

    const TEMPLATE: &str = include_str!("../tests/fixtures/template.jl");

    fn render(case: &CaseRecord) -> RenderedCase {
        Template::from_source(TEMPLATE)
            .render(case, &AnchorSet::standard().unwrap(), AnchorMode::Strict)
            .unwrap()
    }

    #[test]
    fn fixture_has_every_anchor_once() {
        let census = AnchorSet::standard().unwrap().census(TEMPLATE);
        for (field, count) in census {
            assert_eq!(count, 1, "anchor for {field}");
        }
    }

    #[test]
    fn case_seven_values_substituted() {
        let rendered = render(Sweep::full().get(7).unwrap());
        assert_eq!(rendered.file_name, "case_007.jl");
        assert!(rendered.missing.is_empty());
        assert!(rendered
            .content
            .contains("    2.0,        # k_rock (W/m-K) # CHANGED\n"));
        assert!(rendered
            .content
            .contains("    2100000,    # rho_c_rock (J/m3-K) # CHANGED\n"));
        assert!(rendered.content.contains("borehole_spacing = 0    # CHANGED\n"));
        assert!(rendered
            .content
            .contains("    1800,       # h - borehole depth (m) # CHANGED\n"));
        assert!(rendered
            .content
            .contains("Q = 400000    # heat extraction rate (W) # CHANGED\n"));
    }

    #[test]
    fn untracked_lines_unchanged() {
        let rendered = render(Sweep::full().get(13).unwrap());
        let before: Vec<&str> = TEMPLATE.lines().collect();
        let after: Vec<&str> = rendered.content.lines().collect();
        assert_eq!(before.len(), after.len());
        let changed: Vec<usize> = (0..before.len())
            .filter(|&i| before[i] != after[i])
            .collect();
        assert!(changed.len() <= 5, "changed lines: {changed:?}");
        for i in changed {
            assert!(after[i].ends_with("# CHANGED"), "line {}: {}", i + 1, after[i]);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let case = Sweep::full().get(20).unwrap();
        assert_eq!(render(case), render(case));
    }

    #[test]
    fn lenient_records_missing_fields() {
        let template = Template::from_source("Q = 1  # heat extraction rate (W) # CHANGED\n");
        let case = CaseRecord {
            index: 3,
            layout: Layout::Single,
            conductivity: 2.8,
            heat_capacity: 2.0e6,
            depth: 1500.0,
            extraction_rate: 390_000.0,
            mass_flow: 5.0,
            spacing: 0.0,
        };
        let rendered = template
            .render(&case, &AnchorSet::standard().unwrap(), AnchorMode::Lenient)
            .unwrap();
        assert_eq!(rendered.content, "Q = 390000  # heat extraction rate (W) # CHANGED\n");
        assert_eq!(
            rendered.missing,
            vec![
                TrackedField::Conductivity,
                TrackedField::HeatCapacity,
                TrackedField::Spacing,
                TrackedField::Depth,
            ]
        );
    }

    #[test]
    fn strict_fails_on_first_missing_field() {
        let template = Template::from_source("# empty\n");
        let err = template
            .render(
                Sweep::full().get(1).unwrap(),
                &AnchorSet::standard().unwrap(),
                AnchorMode::Strict,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            AnchorError::Missing {
                field: TrackedField::Conductivity
            }
        ));
    }

    #[test]
    fn load_reports_path() {
        let err = Template::load(Path::new("definitely/not/here.jl")).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.jl"));
    }
}

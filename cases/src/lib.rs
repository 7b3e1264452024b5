//! Borehole sweep case table encoded as typed Rust data.
//!
//! The `borefield-cases` crate provides the complete parameter sweep, 32
//! geothermal borehole configurations across single and 2×2 layouts, as
//! static Rust data along with a JSON serializer for the manifest.
//!
//! # Entry Point
//!
//! ```
//! let sweep = borefield_cases::Sweep::full();
//! assert_eq!(sweep.len(), 32);
//! ```
//!
//! # Serialization
//!
//! ```
//! let sweep = borefield_cases::Sweep::full();
//! let manifest = borefield_cases::serializer::json::to_json(sweep);
//! assert_eq!(manifest["cases"].as_array().map(Vec::len), Some(32));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod table;

pub use model::{case_stem, CaseRecord, Layout, Sweep, TrackedField};

impl Sweep {
    /// Returns the complete borehole sweep.
    ///
    /// Built once on first use; every count, range and file name the
    /// generators emit derives from this table.
    #[must_use]
    pub fn full() -> &'static Sweep {
        static SWEEP: std::sync::OnceLock<Sweep> = std::sync::OnceLock::new();
        SWEEP.get_or_init(|| Sweep {
            name: "borehole heat extraction sweep",
            cases: table::cases(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_count() {
        assert_eq!(Sweep::full().len(), 32);
    }

    #[test]
    fn indices_dense_from_one() {
        assert!(Sweep::full().check_indices().is_empty());
        let indices = Sweep::full().indices();
        assert_eq!(indices.first(), Some(&1));
        assert_eq!(indices.last(), Some(&32));
    }

    #[test]
    fn single_borehole_cases_have_zero_spacing() {
        for case in Sweep::full() {
            match case.layout {
                Layout::Single => assert_eq!(case.spacing, 0.0, "case {}", case.index),
                Layout::Square => assert!(case.spacing > 0.0, "case {}", case.index),
            }
        }
    }

    #[test]
    fn numeric_fields_positive() {
        for case in Sweep::full() {
            assert!(case.conductivity > 0.0);
            assert!(case.heat_capacity > 0.0);
            assert!(case.depth > 0.0);
            assert!(case.extraction_rate > 0.0);
            assert!(case.mass_flow > 0.0);
            assert!(case.spacing >= 0.0);
        }
    }

    #[test]
    fn square_layouts_share_heat_capacity() {
        for case in Sweep::full().iter().filter(|c| c.layout == Layout::Square) {
            assert_eq!(case.heat_capacity, 2_000_000.0, "case {}", case.index);
        }
    }

    #[test]
    fn case_seven_row() {
        let case = Sweep::full().get(7);
        assert_eq!(case.map(|c| c.conductivity), Some(2.0));
        assert_eq!(case.map(|c| c.extraction_rate), Some(400_000.0));
        assert_eq!(case.map(CaseRecord::stem).as_deref(), Some("case_007"));
    }
}

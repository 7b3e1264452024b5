//! Core sweep model types.
//!
//! These types represent one borehole parameter sweep as typed Rust data.
//! The top-level entry point is [`Sweep::full()`](crate::Sweep::full).

use std::fmt;

/// Borefield arrangement simulated by a case.
///
/// - `Single`: one borehole; spacing does not apply and is recorded as `0`
/// - `Square`: a 2×2 field of boreholes at the case's spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Layout {
    /// A single borehole (`1x1`).
    #[cfg_attr(feature = "serde", serde(rename = "1x1"))]
    Single,
    /// A square 2×2 borefield (`2x2`).
    #[cfg_attr(feature = "serde", serde(rename = "2x2"))]
    Square,
}

impl Layout {
    /// Returns the label used in the sweep table and progress output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Single => "1x1",
            Layout::Square => "2x2",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the parameter sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseRecord {
    /// 1-based case number; names every file generated for the case.
    pub index: u32,
    /// Borefield arrangement.
    pub layout: Layout,
    /// Rock thermal conductivity, W/(m·K).
    pub conductivity: f64,
    /// Rock volumetric heat capacity, J/(m³·K).
    pub heat_capacity: f64,
    /// Borehole depth, m.
    pub depth: f64,
    /// Heat extraction rate, W.
    pub extraction_rate: f64,
    /// Circulating fluid mass flow rate, kg/s.
    pub mass_flow: f64,
    /// Borehole spacing, m. Zero for single-borehole cases.
    pub spacing: f64,
}

impl CaseRecord {
    /// Returns the zero-padded stem shared by all files of this case
    /// (e.g. `case_007`).
    #[must_use]
    pub fn stem(&self) -> String {
        case_stem(self.index)
    }
}

/// Returns the zero-padded file stem for a case index (`7` → `case_007`).
#[must_use]
pub fn case_stem(index: u32) -> String {
    format!("case_{index:03}")
}

/// The five numeric fields substituted into the simulation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedField {
    /// Rock thermal conductivity (`k_rock`).
    Conductivity,
    /// Rock volumetric heat capacity (`rho_c_rock`).
    HeatCapacity,
    /// Borehole spacing (`borehole_spacing`).
    Spacing,
    /// Borehole depth (`h`).
    Depth,
    /// Heat extraction rate (`Q`).
    ExtractionRate,
}

impl TrackedField {
    /// All tracked fields, in template order.
    pub const ALL: [TrackedField; 5] = [
        TrackedField::Conductivity,
        TrackedField::HeatCapacity,
        TrackedField::Spacing,
        TrackedField::Depth,
        TrackedField::ExtractionRate,
    ];

    /// Returns the name the simulation script uses for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrackedField::Conductivity => "k_rock",
            TrackedField::HeatCapacity => "rho_c_rock",
            TrackedField::Spacing => "borehole_spacing",
            TrackedField::Depth => "depth",
            TrackedField::ExtractionRate => "Q",
        }
    }

    /// Returns this field's value in `case`.
    #[must_use]
    pub fn value(self, case: &CaseRecord) -> f64 {
        match self {
            TrackedField::Conductivity => case.conductivity,
            TrackedField::HeatCapacity => case.heat_capacity,
            TrackedField::Spacing => case.spacing,
            TrackedField::Depth => case.depth,
            TrackedField::ExtractionRate => case.extraction_rate,
        }
    }

    /// Returns this field's value in `case` spelled as a source literal.
    ///
    /// Conductivity always keeps its decimal point (`2.0`); every other
    /// field drops a trailing `.0` (`1700000`, `0`).
    #[must_use]
    pub fn literal(self, case: &CaseRecord) -> String {
        let text = format!("{}", self.value(case));
        match self {
            TrackedField::Conductivity if !text.contains('.') => format!("{text}.0"),
            _ => text,
        }
    }
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete sweep: every case, in submission order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sweep {
    /// Human-readable sweep name.
    pub name: &'static str,
    /// All case records.
    pub cases: Vec<CaseRecord>,
}

impl Sweep {
    /// Returns the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if the sweep holds no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates the cases in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, CaseRecord> {
        self.cases.iter()
    }

    /// Looks up a case by its index.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&CaseRecord> {
        self.cases.iter().find(|c| c.index == index)
    }

    /// Returns the case indices in table order.
    #[must_use]
    pub fn indices(&self) -> Vec<u32> {
        self.cases.iter().map(|c| c.index).collect()
    }

    /// Checks that indices are unique and dense from 1 to `len()`.
    ///
    /// Returns one message per problem; an empty list means the table is
    /// well formed. Generation never calls this.
    #[must_use]
    pub fn check_indices(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for case in &self.cases {
            if !seen.insert(case.index) {
                problems.push(format!("duplicate case index {}", case.index));
            }
        }
        for (position, case) in self.cases.iter().enumerate() {
            let expected = position as u32 + 1;
            if case.index != expected {
                problems.push(format!(
                    "case at position {} has index {}, expected {}",
                    position + 1,
                    case.index,
                    expected
                ));
            }
        }
        problems
    }
}

impl<'a> IntoIterator for &'a Sweep {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: u32) -> CaseRecord {
        CaseRecord {
            index,
            layout: Layout::Single,
            conductivity: 2.0,
            heat_capacity: 1_700_000.0,
            depth: 1100.0,
            extraction_rate: 170_000.0,
            mass_flow: 5.0,
            spacing: 0.0,
        }
    }

    #[test]
    fn stem_is_zero_padded() {
        assert_eq!(record(7).stem(), "case_007");
        assert_eq!(case_stem(32), "case_032");
        assert_eq!(case_stem(100), "case_100");
    }

    #[test]
    fn literals_follow_table_spelling() {
        let case = record(1);
        assert_eq!(TrackedField::Conductivity.literal(&case), "2.0");
        assert_eq!(TrackedField::HeatCapacity.literal(&case), "1700000");
        assert_eq!(TrackedField::Spacing.literal(&case), "0");
        assert_eq!(TrackedField::Depth.literal(&case), "1100");
        assert_eq!(TrackedField::ExtractionRate.literal(&case), "170000");
    }

    #[test]
    fn conductivity_keeps_fraction() {
        let mut case = record(1);
        case.conductivity = 3.2;
        assert_eq!(TrackedField::Conductivity.literal(&case), "3.2");
    }

    #[test]
    fn conductivity_never_uses_exponent() {
        let mut case = record(1);
        case.conductivity = 0.00001;
        assert_eq!(TrackedField::Conductivity.literal(&case), "0.00001");
        case.conductivity = 1e17;
        assert_eq!(
            TrackedField::Conductivity.literal(&case),
            "100000000000000000.0"
        );
    }

    #[test]
    fn other_fields_never_use_exponent() {
        let mut case = record(1);
        case.heat_capacity = 1e20;
        case.depth = 0.0000025;
        assert_eq!(
            TrackedField::HeatCapacity.literal(&case),
            "100000000000000000000"
        );
        assert_eq!(TrackedField::Depth.literal(&case), "0.0000025");
    }

    #[test]
    fn check_indices_flags_gaps_and_duplicates() {
        let sweep = Sweep {
            name: "test",
            cases: vec![record(1), record(1), record(4)],
        };
        let problems = sweep.check_indices();
        assert!(problems.iter().any(|p| p.contains("duplicate case index 1")));
        assert!(problems.iter().any(|p| p.contains("has index 4, expected 3")));
    }

    #[test]
    fn dense_table_has_no_problems() {
        let sweep = Sweep {
            name: "test",
            cases: vec![record(1), record(2), record(3)],
        };
        assert!(sweep.check_indices().is_empty());
        assert_eq!(sweep.indices(), vec![1, 2, 3]);
        assert_eq!(sweep.get(2).map(|c| c.index), Some(2));
        assert!(sweep.get(9).is_none());
    }
}

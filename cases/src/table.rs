//! The borehole sweep table.
//!
//! Cases 1–12 vary rock properties, depth and load for a single borehole.
//! Cases 13–24 repeat the exercise for a 2×2 field at fixed heat capacity,
//! adding spacing as a variable. Cases 25–32 re-run a subset of both groups.

use crate::model::{CaseRecord, Layout};

/// Builds a case row. Argument order matches the table columns.
#[allow(clippy::too_many_arguments)]
const fn case(
    index: u32,
    layout: Layout,
    conductivity: f64,
    heat_capacity: f64,
    depth: f64,
    extraction_rate: f64,
    mass_flow: f64,
    spacing: f64,
) -> CaseRecord {
    CaseRecord {
        index,
        layout,
        conductivity,
        heat_capacity,
        depth,
        extraction_rate,
        mass_flow,
        spacing,
    }
}

/// Returns every case, in submission order.
#[must_use]
pub fn cases() -> Vec<CaseRecord> {
    use Layout::{Single, Square};
    vec![
        case(1, Single, 2.1, 1700000.0, 1100.0, 170000.0, 5.0, 0.0),
        case(2, Single, 2.4, 2400000.0, 2300.0, 260000.0, 5.0, 0.0),
        case(3, Single, 2.8, 2000000.0, 1500.0, 390000.0, 5.0, 0.0),
        case(4, Single, 3.2, 2600000.0, 2000.0, 210000.0, 5.0, 0.0),
        case(5, Single, 3.6, 1900000.0, 1200.0, 330000.0, 5.0, 0.0),
        case(6, Single, 4.4, 2200000.0, 2500.0, 180000.0, 5.0, 0.0),
        case(7, Single, 2.0, 2100000.0, 1800.0, 400000.0, 5.0, 0.0),
        case(8, Single, 3.9, 1600000.0, 1400.0, 240000.0, 5.0, 0.0),
        case(9, Single, 2.6, 2500000.0, 2100.0, 350000.0, 5.0, 0.0),
        case(10, Single, 4.1, 2000000.0, 1600.0, 290000.0, 5.0, 0.0),
        case(11, Single, 3.0, 1800000.0, 2400.0, 320000.0, 5.0, 0.0),
        case(12, Single, 4.5, 2600000.0, 1000.0, 150000.0, 5.0, 0.0),
        case(13, Square, 2.2, 2000000.0, 1200.0, 250000.0, 5.0, 25.0),
        case(14, Square, 2.8, 2000000.0, 2000.0, 380000.0, 5.0, 35.0),
        case(15, Square, 3.5, 2000000.0, 1500.0, 180000.0, 5.0, 60.0),
        case(16, Square, 4.3, 2000000.0, 2400.0, 320000.0, 5.0, 45.0),
        case(17, Square, 2.0, 2000000.0, 1800.0, 400000.0, 5.0, 20.0),
        case(18, Square, 3.1, 2000000.0, 1100.0, 210000.0, 5.0, 70.0),
        case(19, Square, 3.8, 2000000.0, 2500.0, 260000.0, 5.0, 30.0),
        case(20, Square, 4.5, 2000000.0, 1600.0, 350000.0, 5.0, 55.0),
        case(21, Square, 2.6, 2000000.0, 2200.0, 170000.0, 5.0, 40.0),
        case(22, Square, 3.3, 2000000.0, 1300.0, 300000.0, 5.0, 65.0),
        case(23, Square, 4.0, 2000000.0, 2100.0, 240000.0, 5.0, 28.0),
        case(24, Square, 2.4, 2000000.0, 1400.0, 330000.0, 5.0, 50.0),
        case(25, Single, 2.1, 1700000.0, 1100.0, 170000.0, 5.0, 0.0),
        case(26, Single, 3.2, 2600000.0, 2000.0, 210000.0, 5.0, 0.0),
        case(27, Single, 3.6, 1900000.0, 1200.0, 330000.0, 5.0, 0.0),
        case(28, Single, 4.4, 2200000.0, 2500.0, 180000.0, 5.0, 0.0),
        case(29, Square, 2.8, 2000000.0, 2000.0, 380000.0, 5.0, 35.0),
        case(30, Square, 3.5, 2000000.0, 1500.0, 180000.0, 5.0, 60.0),
        case(31, Square, 4.5, 2000000.0, 1600.0, 350000.0, 5.0, 55.0),
        case(32, Square, 2.0, 2000000.0, 1800.0, 400000.0, 5.0, 20.0),
    ]
}

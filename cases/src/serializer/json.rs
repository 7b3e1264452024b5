//! JSON serializer for the sweep table.
//!
//! Produces one document holding the sweep name, case count and every case
//! record with the file names generated for it.

use serde_json::{json, Value};

use crate::model::Sweep;

/// Serializes the sweep to a JSON manifest `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(sweep: &Sweep) -> Value {
    let cases: Vec<Value> = sweep
        .iter()
        .map(|case| {
            let stem = case.stem();
            json!({
                "index": case.index,
                "layout": case.layout.as_str(),
                "conductivity": case.conductivity,
                "heat_capacity": case.heat_capacity,
                "depth": case.depth,
                "extraction_rate": case.extraction_rate,
                "mass_flow": case.mass_flow,
                "spacing": case.spacing,
                "input": format!("{stem}.jl"),
                "job_script": format!("{stem}.sh")
            })
        })
        .collect();
    json!({
        "name": sweep.name,
        "count": sweep.len(),
        "cases": cases
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_every_case() {
        let value = to_json(Sweep::full());
        assert_eq!(value["count"], 32);
        let cases = value["cases"].as_array().unwrap();
        assert_eq!(cases.len(), 32);
        assert_eq!(cases[6]["index"], 7);
        assert_eq!(cases[6]["input"], "case_007.jl");
        assert_eq!(cases[6]["job_script"], "case_007.sh");
    }

    #[test]
    fn layout_serializes_as_label() {
        let value = to_json(Sweep::full());
        assert_eq!(value["cases"][0]["layout"], "1x1");
        assert_eq!(value["cases"][12]["layout"], "2x2");
    }

    #[test]
    fn every_case_node_is_an_object() {
        let value = to_json(Sweep::full());
        for node in value["cases"].as_array().unwrap() {
            assert!(node.is_object(), "unexpected node: {node}");
            assert!(node["conductivity"].is_f64());
            assert!(node["spacing"].is_number());
        }
        assert_eq!(value["cases"][12]["spacing"], 25.0);
    }
}

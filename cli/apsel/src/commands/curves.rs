//! `apsel curves` — sample the membership curves of one input.

use anyhow::{bail, Context, Result};
use apsel_core::{membership_model, sample_curve, CurvePoint, ModelKind, Scope};
use serde::Serialize;

/// Default distance between samples.
pub const DEFAULT_STEP: f64 = 0.1;

#[derive(Debug, Serialize)]
struct CurveTable {
    input: ModelKind,
    scope: Scope,
    step: f64,
    points: Vec<CurvePoint>,
}

pub fn run(input: &str, step: Option<f64>, format: Option<&str>) -> Result<()> {
    print!("{}", render(input, step, format)?);
    Ok(())
}

pub(crate) fn parse_kind(input: &str) -> Result<ModelKind> {
    match input {
        "flow-rate" | "G" | "g" | "input1" => Ok(ModelKind::FlowRate),
        "temperature" | "T" | "t" | "input2" => Ok(ModelKind::Temperature),
        other => bail!("unknown input '{other}' (expected: flow-rate, temperature)"),
    }
}

pub(crate) fn render(input: &str, step: Option<f64>, format: Option<&str>) -> Result<String> {
    let kind = parse_kind(input)?;
    let model = membership_model(kind);
    let step = step.unwrap_or(DEFAULT_STEP);
    let points = sample_curve(model, step).with_context(|| format!("sampling {kind}"))?;

    match format.unwrap_or("text") {
        "text" => {
            let mut out = format!(
                "{} ({kind}) over {}, step {step}\n",
                kind.symbol(),
                model.scope()
            );
            out.push_str(&format!(
                "{:>10} {:>8} {:>8} {:>8}\n",
                "x", "small", "medium", "big"
            ));
            for p in &points {
                out.push_str(&format!(
                    "{:>10.2} {:>8.4} {:>8.4} {:>8.4}\n",
                    p.x, p.small, p.medium, p.big
                ));
            }
            Ok(out)
        }
        "json" => {
            let table = CurveTable {
                input: kind,
                scope: model.scope(),
                step,
                points,
            };
            let mut json = serde_json::to_string_pretty(&table).context("serializing curves")?;
            json.push('\n');
            Ok(json)
        }
        other => bail!("unknown format '{other}' (expected: text, json)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_aliases() {
        assert_eq!(parse_kind("flow-rate").unwrap(), ModelKind::FlowRate);
        assert_eq!(parse_kind("G").unwrap(), ModelKind::FlowRate);
        assert_eq!(parse_kind("temperature").unwrap(), ModelKind::Temperature);
        assert!(parse_kind("pressure").is_err());
    }

    #[test]
    fn text_table_covers_scope() {
        let out = render("temperature", Some(10.0), None).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("T (temperature) over [110, 150]"));
        // header + 110, 120, 130, 140, 150
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[2].trim_start().starts_with("110.00"));
        assert!(lines[6].trim_start().starts_with("150.00"));
    }

    #[test]
    fn json_lists_points() {
        let out = render("flow-rate", Some(20.0), Some("json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["input"], "flow-rate");
        let points = value["points"].as_array().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0]["x"], 70.0);
        assert_eq!(points[2]["x"], 110.0);
    }

    #[test]
    fn rejects_bad_step() {
        assert!(render("flow-rate", Some(0.0), None).is_err());
        assert!(render("flow-rate", Some(-1.0), None).is_err());
        assert!(render("temperature", Some(1e-300), None).is_err());
        assert!(render("flow-rate", Some(1.0), Some("csv")).is_err());
    }
}

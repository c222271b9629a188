// The JSON summary of a run.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;

use crate::tabulate::*;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub input: String,
    pub output: String,
    pub alternatives: usize,
}

fn criteria_to_json(matrix: &DecisionMatrix, result: &TopsisResult) -> Vec<JSValue> {
    let mut l: Vec<JSValue> = Vec::new();
    for (idx, c) in matrix.criteria().iter().enumerate() {
        l.push(json!({
            "name": c.name,
            "weight": c.weight,
            "impact": c.impact.symbol(),
            "norm": result.norms[idx],
            "idealBest": result.ideal_best[idx],
            "idealWorst": result.ideal_worst[idx],
        }));
    }
    l
}

fn results_to_json(result: &TopsisResult) -> Vec<JSValue> {
    result
        .alternatives
        .iter()
        .map(|a| {
            json!({
                "id": a.id,
                "distanceBest": a.distance_best,
                "distanceWorst": a.distance_worst,
                "score": a.score,
                "rank": a.rank,
            })
        })
        .collect()
}

/// Undefined numbers are written as `null`.
pub fn build_summary_js(args: &Args, matrix: &DecisionMatrix, result: &TopsisResult) -> JSValue {
    let c = SummaryConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        alternatives: matrix.num_alternatives(),
    };
    json!({
        "config": c,
        "criteria": criteria_to_json(matrix, result),
        "results": results_to_json(result),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use topsis::builder::Builder;

    #[test]
    fn undefined_score_is_null() {
        let names = vec!["A".to_string(), "B".to_string()];
        let mut b = Builder::new(&names, &[1.0, 1.0], &[Impact::Benefit, Impact::Cost]).unwrap();
        b.add_alternative("only", &[1.0, 2.0]).unwrap();
        let matrix = b.build();
        let result = run_topsis(&matrix);
        let js = results_to_json(&result);
        assert_eq!(js[0]["id"], "only");
        assert!(js[0]["score"].is_null());
        assert!(js[0]["rank"].is_null());
        assert_eq!(js[0]["distanceBest"], 0.0);
    }

    #[test]
    fn criteria_description() {
        let names = vec!["A".to_string(), "B".to_string()];
        let mut b = Builder::new(&names, &[2.0, 1.0], &[Impact::Benefit, Impact::Cost]).unwrap();
        b.add_alternative("x", &[3.0, 4.0]).unwrap();
        b.add_alternative("y", &[4.0, 3.0]).unwrap();
        let matrix = b.build();
        let result = run_topsis(&matrix);
        let js = criteria_to_json(&matrix, &result);
        assert_eq!(js.len(), 2);
        assert_eq!(js[0]["weight"], 2.0);
        assert_eq!(js[1]["impact"], "-");
        assert_eq!(js[0]["norm"], 5.0);
    }
}

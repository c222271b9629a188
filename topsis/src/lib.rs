mod config;
use log::{debug, info, warn};

pub mod builder;
pub mod manual;

pub use crate::config::*;

/// Runs the TOPSIS scoring on a validated decision matrix.
///
/// The matrix is not modified: normalization and weighting happen on a copy.
/// Scores and ranks are returned in the order of the rows.
///
/// Degenerate inputs do not fail: a criterion whose values are all zero, or an
/// alternative that coincides with both ideal points, produces a NaN score.
/// Such alternatives receive no rank and a warning is logged.
pub fn run_topsis(matrix: &DecisionMatrix) -> TopsisResult {
    info!(
        "Processing {:?} alternatives over {:?} criteria",
        matrix.num_alternatives(),
        matrix.num_criteria()
    );

    let norms = column_norms(matrix);
    debug!("run_topsis: column norms: {:?}", norms);
    for (c, n) in matrix.criteria().iter().zip(norms.iter()) {
        if *n == 0.0 && matrix.num_alternatives() > 0 {
            warn!(
                "Criterion {:?} only contains zeros: its normalized values are undefined",
                c.name
            );
        }
    }

    let weighted = weighted_normalized(matrix, &norms);
    let (ideal_best, ideal_worst) = ideal_points(matrix.criteria(), &weighted);
    debug!("run_topsis: ideal best: {:?}", ideal_best);
    debug!("run_topsis: ideal worst: {:?}", ideal_worst);

    let scored: Vec<(f64, f64, f64)> = weighted
        .iter()
        .map(|row| {
            let d_best = distance(row, &ideal_best);
            let d_worst = distance(row, &ideal_worst);
            (d_best, d_worst, d_worst / (d_best + d_worst))
        })
        .collect();

    let scores: Vec<f64> = scored.iter().map(|s| s.2).collect();
    let ranks = competition_ranks(&scores);

    let alternatives: Vec<ScoredAlternative> = matrix
        .alternatives()
        .iter()
        .zip(scored.iter().zip(ranks))
        .map(|(alt, ((d_best, d_worst, score), rank))| {
            if score.is_nan() {
                warn!(
                    "Alternative {:?} has no defined score (distance to best: {}, distance to worst: {})",
                    alt.id, d_best, d_worst
                );
            }
            ScoredAlternative {
                id: alt.id.clone(),
                distance_best: *d_best,
                distance_worst: *d_worst,
                score: *score,
                rank,
            }
        })
        .collect();

    for a in alternatives.iter() {
        debug!("run_topsis: {:?} score: {} rank: {:?}", a.id, a.score, a.rank);
    }

    TopsisResult {
        alternatives,
        norms,
        ideal_best,
        ideal_worst,
    }
}

// Square root of the sum of squares of each criterion column.
fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
    (0..matrix.num_criteria())
        .map(|c| matrix.column(c).map(|v| v * v).sum::<f64>().sqrt())
        .collect()
}

// Row-major copy of the matrix, each column divided by its norm.
fn normalized(matrix: &DecisionMatrix, norms: &[f64]) -> Vec<Vec<f64>> {
    matrix
        .alternatives()
        .iter()
        .map(|a| {
            a.values
                .iter()
                .zip(norms.iter())
                .map(|(v, n)| v / n)
                .collect()
        })
        .collect()
}

fn weighted_normalized(matrix: &DecisionMatrix, norms: &[f64]) -> Vec<Vec<f64>> {
    let mut rows = normalized(matrix, norms);
    for row in rows.iter_mut() {
        for (v, c) in row.iter_mut().zip(matrix.criteria().iter()) {
            *v *= c.weight;
        }
    }
    rows
}

/// Returns (ideal best, ideal worst), one value per criterion.
fn ideal_points(criteria: &[Criterion], weighted: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
    let mut best: Vec<f64> = Vec::with_capacity(criteria.len());
    let mut worst: Vec<f64> = Vec::with_capacity(criteria.len());
    for (idx, c) in criteria.iter().enumerate() {
        let (min, max) = column_range(weighted.iter().map(|row| row[idx]));
        match c.impact {
            Impact::Benefit => {
                best.push(max);
                worst.push(min);
            }
            Impact::Cost => {
                best.push(min);
                worst.push(max);
            }
        }
    }
    (best, worst)
}

// The NaN values are propagated: a column with a NaN has an undefined range.
fn column_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

fn distance(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point.iter())
        .map(|(v, p)| (v - p) * (v - p))
        .sum::<f64>()
        .sqrt()
}

/// Competition ranking: the rank is one more than the number of strictly
/// greater scores, so ties share the smallest rank of their group (1, 1, 3).
/// NaN scores are not ranked.
fn competition_ranks(scores: &[f64]) -> Vec<Option<u32>> {
    let mut order: Vec<usize> = (0..scores.len()).filter(|&i| !scores[i].is_nan()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks: Vec<Option<u32>> = vec![None; scores.len()];
    let mut current_rank: u32 = 0;
    for (pos, &idx) in order.iter().enumerate() {
        let tied_with_previous = pos > 0 && scores[order[pos - 1]] == scores[idx];
        if !tied_with_previous {
            current_rank = (pos + 1) as u32;
        }
        ranks[idx] = Some(current_rank);
    }
    ranks
}

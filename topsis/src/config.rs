// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The preferred direction of a criterion.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Impact {
    /// Higher values are better (`+`).
    Benefit,
    /// Lower values are better (`-`).
    Cost,
}

impl Impact {
    /// Parses the symbol used on the command line. Only `+` and `-` are accepted.
    pub fn parse(s: &str) -> Option<Impact> {
        match s {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }
}

/// One column of the decision matrix (the identifier column excluded).
#[derive(PartialEq, Debug, Clone)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub impact: Impact,
}

/// One row of the decision matrix.
///
/// The identifier is opaque and passed through unchanged.
#[derive(PartialEq, Debug, Clone)]
pub struct Alternative {
    pub id: String,
    pub values: Vec<f64>,
}

/// A table of raw cells, as read from a file. Nothing is interpreted yet.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A validated decision matrix.
///
/// Invariants, checked once at construction:
/// - there are at least 2 criteria
/// - every alternative has exactly one finite value per criterion
/// - every weight is positive and finite
///
/// It can only be obtained through [`DecisionMatrix::from_table`] or the
/// [`crate::builder::Builder`].
#[derive(PartialEq, Debug, Clone)]
pub struct DecisionMatrix {
    pub(crate) criteria: Vec<Criterion>,
    pub(crate) alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn num_criteria(&self) -> usize {
        self.criteria.len()
    }

    pub fn num_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    /// The values of one criterion, in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives.iter().map(move |a| a.values[idx])
    }
}

// ******** Output data structures *********

#[derive(PartialEq, Debug, Clone)]
pub struct ScoredAlternative {
    pub id: String,
    pub distance_best: f64,
    pub distance_worst: f64,
    /// In [0, 1] for well-formed inputs. NaN when the alternative is at
    /// distance zero of both ideal points or when a criterion column is all zeros.
    pub score: f64,
    /// 1 is the best. Absent when the score is NaN.
    pub rank: Option<u32>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct TopsisResult {
    /// In the same order as the rows of the matrix.
    pub alternatives: Vec<ScoredAlternative>,
    /// Euclidean norm of each raw criterion column.
    pub norms: Vec<f64>,
    /// Ideal points, in the weighted and normalized space.
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
}

/// Errors that prevent a decision matrix from being built.
#[derive(PartialEq, Debug, Clone)]
pub enum TopsisError {
    /// The table has fewer than 3 columns (identifier + 2 criteria).
    TooFewColumns { columns: usize },
    /// The number of weights or impacts does not match the number of criteria.
    ShapeMismatch {
        criteria: usize,
        weights: usize,
        impacts: usize,
    },
    /// An impact is neither `+` nor `-`. The position starts at 1.
    InvalidImpact { position: usize, value: String },
    /// A weight is zero, negative or not finite. The position starts at 1.
    InvalidWeight { position: usize, value: f64 },
    /// A data row does not have as many cells as the header. The row starts at 1.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A criterion cell cannot be read as a finite number. The row starts at 1.
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

impl Error for TopsisError {}

impl Display for TopsisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopsisError::TooFewColumns { columns } => write!(
                f,
                "Input file must have at least 3 columns (found {})",
                columns
            ),
            TopsisError::ShapeMismatch {
                criteria,
                weights,
                impacts,
            } => write!(
                f,
                "Number of weights ({}) and impacts ({}) must match the number of columns excluding the first one ({})",
                weights, impacts, criteria
            ),
            TopsisError::InvalidImpact { position, value } => write!(
                f,
                "Impacts must be either '+' or '-' (got {:?} at position {})",
                value, position
            ),
            TopsisError::InvalidWeight { position, value } => write!(
                f,
                "Weights must be positive numbers (got {} at position {})",
                value, position
            ),
            TopsisError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} values, expected {}",
                row, found, expected
            ),
            TopsisError::NonNumeric { column, row, value } => write!(
                f,
                "Column {} contains non-numeric values (row {}: {:?})",
                column, row, value
            ),
        }
    }
}

pub use crate::config::*;

use log::debug;

/// A builder for decision matrices.
///
/// This is the entry point when the values are already numbers. Tables of text
/// cells read from a file should go through [`DecisionMatrix::from_table`].
///
/// ```
/// use topsis::builder::Builder;
/// use topsis::Impact;
/// # use topsis::TopsisError;
///
/// let mut builder = Builder::new(
///     &["price".to_string(), "storage".to_string()],
///     &[1.0, 2.0],
///     &[Impact::Cost, Impact::Benefit],
/// )?;
///
/// builder.add_alternative("phone-a", &[250.0, 64.0])?;
/// builder.add_alternative("phone-b", &[300.0, 128.0])?;
///
/// let matrix = builder.build();
/// assert_eq!(matrix.num_alternatives(), 2);
///
/// # Ok::<(), TopsisError>(())
/// ```
pub struct Builder {
    pub(crate) _criteria: Vec<Criterion>,
    pub(crate) _alternatives: Vec<Alternative>,
}

impl Builder {
    pub fn new(
        names: &[String],
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<Builder, TopsisError> {
        // The identifier column is counted as well.
        if names.len() < 2 {
            return Err(TopsisError::TooFewColumns {
                columns: names.len() + 1,
            });
        }
        if weights.len() != names.len() || impacts.len() != names.len() {
            return Err(TopsisError::ShapeMismatch {
                criteria: names.len(),
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }
        for (idx, w) in weights.iter().enumerate() {
            if !(w.is_finite() && *w > 0.0) {
                return Err(TopsisError::InvalidWeight {
                    position: idx + 1,
                    value: *w,
                });
            }
        }
        let criteria = names
            .iter()
            .zip(weights.iter())
            .zip(impacts.iter())
            .map(|((name, weight), impact)| Criterion {
                name: name.clone(),
                weight: *weight,
                impact: *impact,
            })
            .collect();
        Ok(Builder {
            _criteria: criteria,
            _alternatives: Vec::new(),
        })
    }

    /// Adds one row. The values must be finite and in the order of the criteria.
    pub fn add_alternative(&mut self, id: &str, values: &[f64]) -> Result<(), TopsisError> {
        let row = self._alternatives.len() + 1;
        if values.len() != self._criteria.len() {
            return Err(TopsisError::RaggedRow {
                row,
                expected: self._criteria.len() + 1,
                found: values.len() + 1,
            });
        }
        if let Some((idx, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(TopsisError::NonNumeric {
                column: self._criteria[idx].name.clone(),
                row,
                value: v.to_string(),
            });
        }
        self._alternatives.push(Alternative {
            id: id.to_string(),
            values: values.to_vec(),
        });
        Ok(())
    }

    pub fn build(self) -> DecisionMatrix {
        DecisionMatrix {
            criteria: self._criteria,
            alternatives: self._alternatives,
        }
    }
}

impl DecisionMatrix {
    /// Validates a raw table and turns it into a decision matrix.
    ///
    /// The first column is the identifier, all the other ones are criteria.
    /// The checks run in this order: number of columns, number of weights and
    /// impacts, impact symbols, weights, row widths, numeric cells.
    pub fn from_table<S: AsRef<str>>(
        table: &RawTable,
        weights: &[f64],
        impacts: &[S],
    ) -> Result<DecisionMatrix, TopsisError> {
        let num_columns = table.header.len();
        if num_columns < 3 {
            return Err(TopsisError::TooFewColumns {
                columns: num_columns,
            });
        }
        let num_criteria = num_columns - 1;
        if weights.len() != num_criteria || impacts.len() != num_criteria {
            return Err(TopsisError::ShapeMismatch {
                criteria: num_criteria,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        let mut parsed_impacts: Vec<Impact> = Vec::with_capacity(num_criteria);
        for (idx, s) in impacts.iter().enumerate() {
            let impact = Impact::parse(s.as_ref()).ok_or_else(|| TopsisError::InvalidImpact {
                position: idx + 1,
                value: s.as_ref().to_string(),
            })?;
            parsed_impacts.push(impact);
        }

        let mut builder = Builder::new(&table.header[1..], weights, &parsed_impacts)?;

        for (idx, cells) in table.rows.iter().enumerate() {
            let row = idx + 1;
            if cells.len() != num_columns {
                return Err(TopsisError::RaggedRow {
                    row,
                    expected: num_columns,
                    found: cells.len(),
                });
            }
            let mut values: Vec<f64> = Vec::with_capacity(num_criteria);
            for (col, cell) in cells.iter().enumerate().skip(1) {
                let v = parse_cell(cell).ok_or_else(|| TopsisError::NonNumeric {
                    column: table.header[col].clone(),
                    row,
                    value: cell.clone(),
                })?;
                values.push(v);
            }
            builder.add_alternative(&cells[0], &values)?;
        }

        let matrix = builder.build();
        debug!(
            "from_table: {} alternatives, criteria: {:?}",
            matrix.num_alternatives(),
            matrix.criteria()
        );
        Ok(matrix)
    }
}

/// Reads a cell as a finite number. Surrounding whitespace is ignored.
pub fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn from_table_ok() {
        let t = table(
            &["Model", "Price", "Storage"],
            &[&["M1", "250", " 16 "], &["M2", "200.5", "1e1"]],
        );
        let m = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["-", "+"]).unwrap();
        assert_eq!(m.num_criteria(), 2);
        assert_eq!(m.num_alternatives(), 2);
        assert_eq!(m.criteria()[0].name, "Price");
        assert_eq!(m.criteria()[0].impact, Impact::Cost);
        assert_eq!(m.alternatives()[1].id, "M2");
        assert_eq!(m.alternatives()[1].values, vec![200.5, 10.0]);
        assert_eq!(m.column(1).collect::<Vec<f64>>(), vec![16.0, 10.0]);
    }

    #[test]
    fn too_few_columns() {
        let t = table(&["Model", "Price"], &[&["M1", "250"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0], &["+"]);
        assert_eq!(res, Err(TopsisError::TooFewColumns { columns: 2 }));
    }

    #[test]
    fn weight_count_mismatch() {
        let t = table(&["Model", "A", "B", "C"], &[&["M1", "1", "2", "3"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+", "+", "+"]);
        assert_eq!(
            res,
            Err(TopsisError::ShapeMismatch {
                criteria: 3,
                weights: 2,
                impacts: 3
            })
        );
    }

    #[test]
    fn impact_count_mismatch() {
        let t = table(&["Model", "A", "B"], &[&["M1", "1", "2"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+"]);
        assert!(matches!(res, Err(TopsisError::ShapeMismatch { impacts: 1, .. })));
    }

    #[test]
    fn invalid_impact() {
        let t = table(&["Model", "A", "B"], &[&["M1", "1", "2"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+", "*"]);
        assert_eq!(
            res,
            Err(TopsisError::InvalidImpact {
                position: 2,
                value: "*".to_string()
            })
        );
    }

    #[test]
    fn shape_is_checked_before_impacts() {
        let t = table(&["Model", "A", "B"], &[&["M1", "1", "2"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0], &["x", "y"]);
        assert!(matches!(res, Err(TopsisError::ShapeMismatch { .. })));
    }

    #[test]
    fn invalid_weight() {
        let t = table(&["Model", "A", "B"], &[&["M1", "1", "2"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, -2.0], &["+", "+"]);
        assert_eq!(
            res,
            Err(TopsisError::InvalidWeight {
                position: 2,
                value: -2.0
            })
        );
        let res = DecisionMatrix::from_table(&t, &[f64::NAN, 1.0], &["+", "+"]);
        assert!(matches!(res, Err(TopsisError::InvalidWeight { position: 1, .. })));
    }

    #[test]
    fn non_numeric_cell_names_column() {
        let t = table(
            &["Model", "Price", "Storage"],
            &[&["M1", "250", "16"], &["M2", "cheap", "32"]],
        );
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["-", "+"]);
        assert_eq!(
            res,
            Err(TopsisError::NonNumeric {
                column: "Price".to_string(),
                row: 2,
                value: "cheap".to_string()
            })
        );
        let msg = res.unwrap_err().to_string();
        assert!(msg.contains("Column Price contains non-numeric values"));
    }

    #[test]
    fn missing_and_infinite_cells_are_rejected() {
        let t = table(&["Model", "A", "B"], &[&["M1", "", "2"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+", "+"]);
        assert!(matches!(res, Err(TopsisError::NonNumeric { .. })));

        let t = table(&["Model", "A", "B"], &[&["M1", "1", "inf"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+", "+"]);
        assert!(matches!(res, Err(TopsisError::NonNumeric { .. })));
    }

    #[test]
    fn ragged_row() {
        let t = table(&["Model", "A", "B"], &[&["M1", "1", "2"], &["M2", "1"]]);
        let res = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+", "+"]);
        assert_eq!(
            res,
            Err(TopsisError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn identifier_is_not_coerced() {
        let t = table(&["Id", "A", "B"], &[&["not a number", "1", "2"]]);
        let m = DecisionMatrix::from_table(&t, &[1.0, 1.0], &["+", "+"]).unwrap();
        assert_eq!(m.alternatives()[0].id, "not a number");
    }

    #[test]
    fn builder_rejects_non_finite_values() {
        let names = vec!["A".to_string(), "B".to_string()];
        let mut b = Builder::new(&names, &[1.0, 1.0], &[Impact::Benefit, Impact::Cost]).unwrap();
        let res = b.add_alternative("x", &[1.0, f64::INFINITY]);
        assert!(matches!(res, Err(TopsisError::NonNumeric { ref column, .. }) if column == "B"));
        let res = b.add_alternative("x", &[1.0]);
        assert!(matches!(res, Err(TopsisError::RaggedRow { .. })));
        assert_eq!(b.build().num_alternatives(), 0);
    }

    #[test]
    fn builder_checks_list_lengths() {
        let names = vec!["A".to_string(), "B".to_string()];
        let res = Builder::new(&names, &[1.0, 1.0, 1.0], &[Impact::Benefit, Impact::Cost]);
        assert!(matches!(
            res,
            Err(TopsisError::ShapeMismatch {
                criteria: 2,
                weights: 3,
                impacts: 2
            })
        ));
        let res = Builder::new(&names, &[1.0, 0.0], &[Impact::Benefit, Impact::Cost]);
        assert!(matches!(res, Err(TopsisError::InvalidWeight { position: 2, .. })));
    }

    #[test]
    fn builder_requires_two_criteria() {
        let names = vec!["A".to_string()];
        let res = Builder::new(&names, &[1.0], &[Impact::Benefit]);
        assert!(matches!(res, Err(TopsisError::TooFewColumns { columns: 2 })));
    }
}

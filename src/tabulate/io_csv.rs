// Primitives for reading and writing CSV files.

use crate::tabulate::*;

pub const SCORE_COLUMN: &str = "Topsis Score";
pub const RANK_COLUMN: &str = "Rank";

/// Reads a table with a header row. All the cells are kept as text.
///
/// Rows of different lengths are accepted here and rejected during validation,
/// which gives a better message.
pub fn read_csv_table(path: &str, delimiter: u8) -> TopsisCliResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    let header: Vec<String> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1usize })?
        .iter()
        .map(|s| s.to_string())
        .collect();
    debug!("read_csv_table: header: {:?}", header);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is the first line.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    debug!("read_csv_table: {} rows", rows.len());
    Ok(RawTable { header, rows })
}

/// Renders the input table followed by the score and rank columns.
///
/// An undefined score is written `NaN` and its rank is left empty.
pub fn write_csv_table(
    table: &RawTable,
    result: &TopsisResult,
    delimiter: u8,
) -> TopsisCliResult<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(&mut buffer);

        let mut header: Vec<&str> = table.header.iter().map(|s| s.as_str()).collect();
        header.push(SCORE_COLUMN);
        header.push(RANK_COLUMN);
        wtr.write_record(&header).context(CsvWriteSnafu {})?;

        for (cells, scored) in table.rows.iter().zip(result.alternatives.iter()) {
            let mut record: Vec<String> = cells.clone();
            record.push(scored.score.to_string());
            record.push(scored.rank.map(|r| r.to_string()).unwrap_or_default());
            wtr.write_record(&record).context(CsvWriteSnafu {})?;
        }
        wtr.flush().context(WritingOutputSnafu { path: "<buffer>" })?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_copied_verbatim() {
        let table = RawTable {
            header: vec!["Name".to_string(), "A".to_string(), "B".to_string()],
            rows: vec![
                vec!["first, quoted".to_string(), "1.50".to_string(), "2".to_string()],
                vec!["second".to_string(), "3".to_string(), "1e0".to_string()],
            ],
        };
        let matrix = DecisionMatrix::from_table(&table, &[1.0, 1.0], &["+", "+"]).unwrap();
        let result = run_topsis(&matrix);
        let bytes = write_csv_table(&table, &result, b',').unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name,A,B,Topsis Score,Rank");
        assert!(lines[1].starts_with("\"first, quoted\",1.50,2,"));
        assert!(lines[2].starts_with("second,3,1e0,"));
    }

    #[test]
    fn read_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("ragged.csv");
        std::fs::write(&p, "Id,A,B\nx,1,2\ny,1\n").unwrap();
        let table = read_csv_table(&p.display().to_string(), b',').unwrap();
        assert_eq!(table.header, vec!["Id", "A", "B"]);
        assert_eq!(table.rows[1], vec!["y", "1"]);
        let res = DecisionMatrix::from_table(&table, &[1.0, 1.0], &["+", "+"]);
        assert!(matches!(res, Err(TopsisError::RaggedRow { row: 2, .. })));
    }
}

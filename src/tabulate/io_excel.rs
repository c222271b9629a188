// Reading tables from Excel workbooks.

use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::tabulate::*;

/// Reads the given worksheet, or the first one, as a table. The first row is the header.
pub fn read_excel_table(path: &str, worksheet_name: Option<&str>) -> TopsisCliResult<RawTable> {
    debug!(
        "read_excel_table: path: {:?} worksheet: {:?}",
        path, worksheet_name
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    let wrange = if let Some(name) = worksheet_name {
        workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?
            .context(OpeningExcelSnafu { path })?
    } else {
        workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path })?
    };

    let mut iter = wrange.rows();
    let header: Vec<String> = match iter.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => Vec::new(),
    };
    debug!("read_excel_table: header: {:?}", header);

    let rows: Vec<Vec<String>> = iter
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok(RawTable { header, rows })
}

// Numbers are rendered the way Excel shows them without formatting (3.0 is "3").
fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Float(f) => f.to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Empty => "".to_string(),
        // Dates and errors are not criteria values, they are rejected during validation.
        other => format!("{:?}", other),
    }
}

use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use topsis::*;

use std::fs;

use text_diff::print_diff;

use crate::args::Args;
use crate::tabulate::io_common::{
    get_delimiter, get_input_type, parse_weights, split_list, InputType,
};

mod io_common;
mod io_csv;
mod io_excel;
mod io_json;

#[derive(Debug, Snafu)]
pub enum TopsisCliError {
    #[snafu(display("Error opening file {path}: {source}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of {path}: {source}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("No worksheet found in {path}"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {name:?} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("Unknown input type {input_type:?} (use csv or xlsx)"))]
    UnknownInputType { input_type: String },
    #[snafu(display("The delimiter {delimiter:?} is not a single byte character"))]
    InvalidDelimiter { delimiter: char },
    #[snafu(display("Weights must be numbers (got {value:?})"))]
    ParsingWeight { value: String },
    #[snafu(display("{source}"))]
    InvalidTable { source: TopsisError },
    #[snafu(display("Error formatting the output table: {source}"))]
    CsvWrite { source: csv::Error },
    #[snafu(display("Error writing file {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error formatting the summary: {source}"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Error opening reference file {path}: {source}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the computed table and the reference {path}"))]
    ReferenceMismatch { path: String },
}

pub type TopsisCliResult<T> = Result<T, TopsisCliError>;

fn read_table(args: &Args, input_type: InputType, delimiter: u8) -> TopsisCliResult<RawTable> {
    info!("Attempting to read input file {:?}", args.input);
    match input_type {
        InputType::Csv => io_csv::read_csv_table(&args.input, delimiter),
        InputType::Excel => {
            io_excel::read_excel_table(&args.input, args.excel_worksheet_name.as_deref())
        }
    }
}

/// Reads the input table, scores it and writes the output table.
///
/// Nothing is written if the input cannot be validated.
pub fn run_topsis_file(args: &Args) -> TopsisCliResult<()> {
    let weights = parse_weights(&args.weights)?;
    let impacts = split_list(&args.impacts);
    let delimiter = get_delimiter(args.delimiter)?;
    debug!("weights: {:?} impacts: {:?}", weights, impacts);

    let input_type = get_input_type(&args.input, args.input_type.as_deref())?;
    let table = read_table(args, input_type, delimiter)?;
    debug!("header: {:?}, {} rows", table.header, table.rows.len());

    let matrix =
        DecisionMatrix::from_table(&table, &weights, &impacts).context(InvalidTableSnafu {})?;
    let result = run_topsis(&matrix);

    // Everything is rendered before anything is written.
    let output_bytes =
        io_csv::write_csv_table(&table, &result, output_delimiter(input_type, delimiter))?;
    let summary_str = match &args.summary {
        Some(_) => {
            let summary_js = io_json::build_summary_js(args, &matrix, &result);
            Some(serde_json::to_string_pretty(&summary_js).context(SerializingJsonSnafu {})?)
        }
        None => None,
    };

    fs::write(&args.output, &output_bytes).context(WritingOutputSnafu {
        path: args.output.clone(),
    })?;
    if let (Some(summary_p), Some(summary_s)) = (&args.summary, summary_str) {
        fs::write(summary_p, summary_s).context(WritingOutputSnafu {
            path: summary_p.clone(),
        })?;
        info!("Summary written to {:?}", summary_p);
    }
    println!("Results saved to {}", args.output);

    // The reference output, if provided for comparison
    if let Some(reference_p) = &args.reference {
        check_reference(reference_p, &String::from_utf8_lossy(&output_bytes))?;
    }

    Ok(())
}

// Excel input is always written with commas.
fn output_delimiter(input_type: InputType, delimiter: u8) -> u8 {
    match input_type {
        InputType::Csv => delimiter,
        InputType::Excel => b',',
    }
}

fn check_reference(reference_path: &str, computed: &str) -> TopsisCliResult<()> {
    let reference = fs::read_to_string(reference_path).context(OpeningReferenceSnafu {
        path: reference_path,
    })?;
    let reference = reference.replace("\r\n", "\n");
    let computed = computed.replace("\r\n", "\n");
    if reference.trim_end() != computed.trim_end() {
        warn!("Found differences with the reference file {:?}", reference_path);
        print_diff(reference.as_str(), computed.as_str(), "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("The computed table matches the reference {:?}", reference_path);
    Ok(())
}

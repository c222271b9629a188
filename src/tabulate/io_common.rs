use std::path::Path;

use crate::tabulate::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Excel,
}

/// The reader to use: the explicit choice if there is one, otherwise based on the extension.
pub fn get_input_type(path: &str, input_type: Option<&str>) -> TopsisCliResult<InputType> {
    match input_type {
        Some("csv") => Ok(InputType::Csv),
        Some("xlsx") | Some("excel") => Ok(InputType::Excel),
        Some(x) => UnknownInputTypeSnafu { input_type: x }.fail(),
        None => {
            let is_excel = Path::new(path)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
                .unwrap_or(false);
            if is_excel {
                Ok(InputType::Excel)
            } else {
                Ok(InputType::Csv)
            }
        }
    }
}

pub fn get_delimiter(delimiter: Option<char>) -> TopsisCliResult<u8> {
    let d = delimiter.unwrap_or(',');
    ensure!(d.is_ascii(), InvalidDelimiterSnafu { delimiter: d });
    Ok(d as u8)
}

/// Splits a comma-separated list from the command line. Items are trimmed.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',').map(|x| x.trim().to_string()).collect()
}

pub fn parse_weights(s: &str) -> TopsisCliResult<Vec<f64>> {
    let mut res: Vec<f64> = Vec::new();
    for item in split_list(s) {
        let w = item
            .parse::<f64>()
            .ok()
            .context(ParsingWeightSnafu { value: item.clone() })?;
        res.push(w);
    }
    Ok(res)
}

use clap::Parser;

/// Ranks alternatives described by numeric criteria with the TOPSIS method.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The table to rank: a header row, an identifier in the first column
    /// and one numeric criterion in each of the other columns.
    #[clap(value_parser)]
    pub input: String,

    /// (list of comma-separated numbers) The weight of each criterion, for example `1,1,2,1`.
    #[clap(value_parser)]
    pub weights: String,

    /// (list of comma-separated '+' or '-') The impact of each criterion: '+' if higher values
    /// are better, '-' if lower values are better. For example `+,-,+,+`.
    #[clap(value_parser, allow_hyphen_values = true)]
    pub impacts: String,

    /// (file path) Where to write the input table with the `Topsis Score` and `Rank` columns.
    #[clap(value_parser)]
    pub output: String,

    /// (csv or xlsx) The type of the input. By default, files ending in `.xlsx` are read as
    /// Excel files and everything else as CSV.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default ',') The field delimiter of CSV files. It is used for both the input and the output.
    /// The output of an Excel input is always separated with ','.
    #[clap(long, value_parser)]
    pub delimiter: Option<char>,

    /// (default: the first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path) If specified, a summary of the computation (ideal points, distances, scores)
    /// will be written in JSON format to the given location.
    #[clap(long, value_parser)]
    pub summary: Option<String>,

    /// (file path) A reference file containing the expected output table. If provided, the
    /// program will check that the computed table matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

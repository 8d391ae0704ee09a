//! CLI tool to count the rows of a tabular records file per record type.

use clap::Parser;
use std::io::{self, Write};
use std::process;
use tabrec::logging::init_logging;
use tabrec::{RowOptions, count_text, parse_records_path, read_input};
use tracing::info;

/// Count rows per record type, in first-seen order.
#[derive(Parser)]
#[command(name = "tabrec-count", version)]
struct Cli {
    /// Input file (`-` for stdin)
    input: String,

    /// Only count rows matching this records path, e.g. 'RT1;RT4:st5|st6'
    #[arg(short, long)]
    records: Option<String>,

    /// 0-based column holding the subtype (default: search the whole row)
    #[arg(short, long)]
    subtype_column: Option<usize>,

    /// Cell delimiter
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,

    /// Log parsing and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let filter = match cli.records.as_deref().map(parse_records_path).transpose() {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Records path error: {e}");
            process::exit(1);
        }
    };

    let input_text = match read_input(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    let options = RowOptions {
        delimiter: cli.delimiter,
        subtype_column: cli.subtype_column,
    };

    match count_text(&input_text, filter, options) {
        Ok((output, input_count, output_count)) => {
            if let Err(e) = writeln!(io::stdout(), "{output}") {
                eprintln!("Error writing output: {e}");
                process::exit(1);
            }
            info!(input_count, output_count, "records in -> records counted");
        }
        Err(e) => {
            eprintln!("Count error: {e}");
            process::exit(1);
        }
    }
}

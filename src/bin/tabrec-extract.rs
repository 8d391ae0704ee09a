//! CLI tool to extract fields from a tabular records file.
//!
//! Usage:
//!   tabrec-extract <input> --fields 'RT1.2|4;RT2:st.XY'
//!   tabrec-extract <input> --fields 'RT1.name' --fieldnames 'RT1:id,name'
//!
//! Prints one line per row that yields at least one field.

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tabrec::logging::init_logging;
use tabrec::{
    OutputFormat, RowOptions, extract_text, parse_fieldnames, parse_fields_path, read_input,
};
use tracing::info;

/// Extract fields from a tabular records file.
#[derive(Parser)]
#[command(name = "tabrec-extract", version)]
struct Cli {
    /// Input file (`-` for stdin)
    input: String,

    /// Fields path, e.g. 'RT1.2|4;RT4:st5.XY'
    #[arg(short, long)]
    fields: String,

    /// Field names per record type, e.g. 'RT1:aaa,bbb;RT2:ccc'
    #[arg(short = 'n', long, default_value = "")]
    fieldnames: String,

    /// 0-based column holding the subtype (default: search the whole row)
    #[arg(short, long)]
    subtype_column: Option<usize>,

    /// Cell delimiter
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,

    /// Print one JSON object per row
    #[arg(long)]
    json: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log parsing and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fieldnames = match parse_fieldnames(&cli.fieldnames) {
        Ok(fieldnames) => fieldnames,
        Err(e) => {
            eprintln!("Fieldnames error: {e}");
            process::exit(1);
        }
    };

    let address = match parse_fields_path(&cli.fields, fieldnames.as_ref()) {
        Ok(address) => address,
        Err(e) => {
            eprintln!("Fields path error: {e}");
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
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Delimited
    };

    match extract_text(&input_text, &address, options, format) {
        Ok((output, input_count, output_count)) => {
            if let Some(out_path) = &cli.output {
                if let Some(parent) = Path::new(out_path.as_str()).parent()
                    && !parent.as_os_str().is_empty()
                    && fs::create_dir_all(parent).is_err()
                {
                    eprintln!("Error creating output directory for '{out_path}'");
                    process::exit(1);
                }
                if let Err(e) = fs::write(out_path, &output) {
                    eprintln!("Error writing output file '{out_path}': {e}");
                    process::exit(1);
                }
            } else {
                if let Err(e) = io::stdout().write_all(output.as_bytes()) {
                    eprintln!("Error writing output: {e}");
                    process::exit(1);
                }
                if !output.is_empty() && !output.ends_with('\n') {
                    println!();
                }
            }
            info!(input_count, output_count, "records in -> rows out");
        }
        Err(e) => {
            eprintln!("Extraction error: {e}");
            process::exit(1);
        }
    }
}

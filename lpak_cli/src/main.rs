use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use path_clean::PathClean;

#[derive(Parser, Debug)]
struct ActionInfo {
    /// Input bundle path
    #[arg(index = 1)]
    input: String,
}

#[derive(Parser, Debug)]
struct ActionList {
    /// Input bundle path
    #[arg(index = 1)]
    input: String,

    /// Only list files matching the given glob pattern
    #[arg(short = 'F', long = "filter", value_name = "PATTERN")]
    filter: Option<String>,
}

#[derive(Parser, Debug)]
struct ActionExtract {
    /// Input bundle path
    #[arg(index = 1)]
    input: String,

    /// Output directory. Defaults to next to input bundle
    #[arg(index = 2)]
    output: Option<String>,

    /// Only extract files matching the given glob pattern
    #[arg(short = 'F', long = "filter", value_name = "PATTERN")]
    filter: Option<String>,

    /// Overwrite existing files
    #[arg(short, long, default_value = "false")]
    overwrite: bool,

    /// Verbose
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print bundle info
    Info(ActionInfo),
    /// List bundled files
    List(ActionList),
    /// Extract bundled files
    Extract(ActionExtract),
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    #[command(subcommand)]
    action: Action,
}

fn main() -> Result<(), lpak::Error> {
    let args = Args::parse();

    match args.action {
        Action::Info(args) => info(args),
        Action::List(args) => list(args),
        Action::Extract(args) => extract(args),
    }
}

fn open(input: &str) -> Result<lpak::LpakReader<BufReader<File>>, lpak::Error> {
    lpak::LpakReader::new(BufReader::new(File::open(input)?))
}

fn pattern(filter: Option<&str>) -> Result<Option<glob::Pattern>, lpak::Error> {
    filter
        .map(glob::Pattern::new)
        .transpose()
        .map_err(|e| lpak::Error::Other(format!("invalid filter pattern: {e}")))
}

// Case-sensitive match against the stored filename, no path normalization.
fn matches(pattern: &Option<glob::Pattern>, filename: &str) -> bool {
    pattern.as_ref().map_or(true, |p| p.matches(filename))
}

fn info(args: ActionInfo) -> Result<(), lpak::Error> {
    let bundle = open(&args.input)?;
    println!("endianness: {}", bundle.endianness());
    println!("version: {}", bundle.version());
    println!("{} file entries", bundle.records().len());
    Ok(())
}

fn list(args: ActionList) -> Result<(), lpak::Error> {
    let bundle = open(&args.input)?;
    let pattern = pattern(args.filter.as_deref())?;
    for record in bundle.records() {
        if matches(&pattern, &record.filename) {
            println!("{}", record.filename);
        }
    }
    Ok(())
}

fn extract(args: ActionExtract) -> Result<(), lpak::Error> {
    let mut bundle = open(&args.input)?;
    let pattern = pattern(args.filter.as_deref())?;
    let output = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&args.input).with_extension(""));
    fs::create_dir_all(&output)?;

    // read_payload_to needs the bundle mutably, so detach the record list
    let records = bundle.records().to_vec();
    for record in records.iter().filter(|r| matches(&pattern, &r.filename)) {
        if record.compressed {
            eprintln!("{}: compressed file not supported, skipping", record.filename);
            continue;
        }
        let file_path = output.join(&record.filename);
        if !file_path.clean().starts_with(&output) {
            eprintln!(
                "{}: path escapes the output directory, skipping",
                record.filename
            );
            continue;
        }
        if file_path.exists() && !args.overwrite {
            eprintln!(
                "{}: already exists, skipping (pass --overwrite to replace)",
                record.filename
            );
            continue;
        }
        if args.verbose {
            println!("extracting {}", record.filename);
        }
        fs::create_dir_all(file_path.parent().expect("will be a file"))?;
        bundle.read_payload_to(record, &mut File::create(&file_path)?)?;
    }
    Ok(())
}

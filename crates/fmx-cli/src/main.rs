use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use fmx_core::CatalogError;
use fmx_export::export_group;
use fmx_parser::parse_catalog;
use serde::{Deserialize, Serialize};

mod inputs;

use inputs::{collect_catalog_files, resolve_input, ResolvedInput};

const EXPORT_SUMMARY_SCHEMA: &str = "export-summary.v1";
const DEFAULT_OUTPUT_DIR_NAME: &str = "ScriptCatalog";

#[derive(Debug, Parser)]
#[command(name = "fmx")]
#[command(about = "FileMaker script catalog export CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Export(ExportArgs),
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Catalog XML file, or a directory scanned recursively for .xml files.
    #[arg(long = "input")]
    input: String,
    /// Output root. Defaults to a ScriptCatalog directory next to the input.
    #[arg(long = "out-dir")]
    out_dir: Option<String>,
    /// Print a machine-readable JSON summary instead of prose.
    #[arg(long = "json")]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportSummary {
    schema_version: String,
    scripts: usize,
    output_root: String,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32, CatalogError> {
    match cli.command {
        Command::Export(args) => {
            let summary = run_export(&args)?;
            emit_summary(&summary, args.json)?;
            Ok(0)
        }
    }
}

fn run_export(args: &ExportArgs) -> Result<ExportSummary, CatalogError> {
    let input = resolve_input(&args.input)?;

    let output_root = match (&args.out_dir, &input) {
        (Some(out_dir), _) => PathBuf::from(out_dir),
        (None, ResolvedInput::File(file)) => file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(DEFAULT_OUTPUT_DIR_NAME),
        (None, ResolvedInput::Directory(dir)) => dir.join(DEFAULT_OUTPUT_DIR_NAME),
    };

    fs::create_dir_all(&output_root).map_err(|error| {
        CatalogError::new(
            "CLI_OUT_DIR_CREATE",
            format!(
                "Could not create output directory {}: {}",
                output_root.display(),
                error
            ),
        )
    })?;

    let scripts = match &input {
        ResolvedInput::File(file) => export_catalog_file(file, &output_root)?,
        ResolvedInput::Directory(dir) => {
            let mut total = 0usize;
            for file in collect_catalog_files(dir)? {
                let stem = file
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("catalog");
                total += export_catalog_file(&file, &output_root.join(stem))?;
            }
            total
        }
    };

    Ok(ExportSummary {
        schema_version: EXPORT_SUMMARY_SCHEMA.to_string(),
        scripts,
        output_root: output_root.display().to_string(),
    })
}

/// Parses one catalog XML file and exports it under `output_root`. A file
/// without a `ScriptCatalog` element contributes zero scripts.
fn export_catalog_file(file: &Path, output_root: &Path) -> Result<usize, CatalogError> {
    let source = fs::read_to_string(file).map_err(|error| {
        CatalogError::new(
            "CLI_INPUT_READ",
            format!("Could not read {}: {}", file.display(), error),
        )
    })?;

    match parse_catalog(&source)? {
        Some(catalog) => export_group(&catalog, output_root),
        None => Ok(0),
    }
}

fn emit_summary(summary: &ExportSummary, json: bool) -> Result<(), CatalogError> {
    if json {
        let payload = serde_json::to_string(summary)
            .map_err(|error| CatalogError::new("CLI_SUMMARY_ENCODE", error.to_string()))?;
        println!("{}", payload);
        return Ok(());
    }

    if summary.scripts == 0 {
        println!("No scripts found to export.");
    } else {
        println!(
            "Exported {} scripts to {}.",
            summary.scripts, summary.output_root
        );
    }
    Ok(())
}

fn emit_error(error: CatalogError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
    );
    1
}

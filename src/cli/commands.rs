//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::Report;

use crate::backend::{assemble, validate, validate_catalog, CodegenOptions, GenerationError, StringsCodegen};
use crate::format::FormatConfig;
use crate::model::{parse_document, StringsTable};

use super::{CliError, CliResult, ExitCode};

/// Maximum model document size (16 MB)
const MAX_MODEL_SIZE: u64 = 16 * 1024 * 1024;

/// Read a model document from disk.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_MODEL_SIZE`
pub fn read_model(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::input(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_MODEL_SIZE {
        return Err(CliError::input(format!(
            "Model file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_MODEL_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::input(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Read and parse a model document into its tables.
pub fn load_tables(path: &Path) -> CliResult<Vec<StringsTable>> {
    let json = read_model(path)?;
    let tables = parse_document(&json).map_err(|e| render(GenerationError::Input(e)))?;
    if tables.is_empty() {
        tracing::warn!(model = %path.display(), "model document contains no tables");
    }
    Ok(tables)
}

/// Render a diagnostic into a CLI error with the matching exit code
fn render(err: GenerationError) -> CliError {
    let exit_code = match err {
        GenerationError::Model(_) => ExitCode::FAILURE,
        GenerationError::Input(_) => ExitCode::INPUT,
    };
    CliError::new(format!("{:?}", Report::new(err)), exit_code)
}

/// Generate Swift source from a model document
pub fn generate(model: &Path, output: Option<&Path>, indent: usize, bare: bool) -> CliResult<ExitCode> {
    let tables = load_tables(model)?;
    let options = CodegenOptions::new()
        .with_source_file(!bare)
        .with_format(FormatConfig::new().with_indent_width(indent));
    let swift = StringsCodegen::with_options(options)
        .generate_all(&tables)
        .map_err(render)?;

    match output {
        Some(path) => {
            fs::write(path, swift)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
            tracing::info!(output = %path.display(), tables = tables.len(), "generated");
        }
        None => print!("{}", swift),
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate every table and report all invalid ones, not just the first
pub fn check(model: &Path) -> CliResult<ExitCode> {
    let tables = load_tables(model)?;
    let errors: Vec<String> = validate_catalog(&tables)
        .err()
        .into_iter()
        .chain(tables.iter().filter_map(|table| validate(table).err()))
        .map(|e| format!("{:?}", Report::new(e)))
        .collect();

    if errors.is_empty() {
        println!("{}: {} table(s) OK", model.display(), tables.len());
        return Ok(ExitCode::SUCCESS);
    }
    Err(CliError::failure(format!(
        "{}\n{}: {} problem(s) in {} table(s)",
        errors.join("\n"),
        model.display(),
        errors.len(),
        tables.len()
    )))
}

/// Print the assembled declaration tree of every table
pub fn dump(model: &Path) -> CliResult<ExitCode> {
    let tables = load_tables(model)?;
    validate_catalog(&tables).map_err(|e| render(e.into()))?;
    for table in tables {
        let decl = assemble(&table).map_err(|e| render(e.into()))?;
        println!("{:#?}", decl);
    }
    Ok(ExitCode::SUCCESS)
}

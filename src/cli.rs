//! Minimal CLI: JSON sample → Go struct definitions
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use clap::{ArgAction, Args, Parser, ValueEnum};
use tracing::debug;

use crate::error::{Error, Result};
use crate::inference::{InferOptions, DEFAULT_ROOT_NAME};
use crate::layout::{order_records, DefinitionOrder};
use crate::sample::Sample;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer Go struct definitions from a single sample JSON document
#[derive(Parser, Debug)]
#[command(name = "json-gostruct", version)]
pub struct CommandLineInterface {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,

    /// raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// path to a JSON file, or '-' for stdin
    input: String,

    /// JSON Pointer to select a subnode of the document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter; its first output is used as the document
    #[arg(long)]
    jq_expr: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// top-level Go type name
    #[arg(long, default_value = DEFAULT_ROOT_NAME)]
    root_type: String,

    /// order of the emitted definitions
    #[arg(long, value_enum, default_value_t = DefinitionOrder::DependencyFirst)]
    order: DefinitionOrder,

    /// output format
    #[arg(long, value_enum, default_value_t = Emit::Go)]
    emit: Emit,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Go struct definitions
    Go,
    /// JSON debug view of the inferred records
    Json,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn origin(&self) -> &str {
        if self.input == crate::source::STDIN { "<stdin>" } else { &self.input }
    }

    /// Read, parse and select the sample document.
    fn load_document(&self) -> Result<Sample> {
        let origin = self.origin();
        let source = crate::source::read_source(&self.input)?;
        let mut json_value = crate::source::parse_document(&source, origin)?;
        if let Some(pointer) = self.json_pointer.as_deref() {
            debug!(pointer, "selecting sub-document");
            json_value = crate::source::select_pointer(json_value, pointer, origin)?;
        }
        if let Some(jq_expr) = self.jq_expr.as_deref() {
            debug!(jq_expr, "applying jq filter");
            json_value = crate::source::apply_jq(&json_value, jq_expr)?;
        }
        Ok(Sample::from(json_value))
    }
}

impl OutputSettings {
    fn infer_options(&self) -> InferOptions {
        InferOptions { root_name: self.root_type.clone(), order: self.order }
    }

    fn render(&self, document: &Sample) -> Result<String> {
        let options = self.infer_options();
        match self.emit {
            Emit::Go => crate::inference::infer_with(document, &options),
            Emit::Json => {
                let schema = crate::inference::infer_schema(document, &options.root_name)?;
                let view = serde_json::json!({
                    "root": schema.root().name,
                    "order": options.order,
                    "records": order_records(&schema, options.order),
                });
                Ok(serde_json::to_string_pretty(&view)?)
            }
        }
    }

    /// Nothing is written unless rendering succeeded.
    fn write(&self, rendered: &str) -> Result<()> {
        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .map_err(|source| Error::Write { path: parent.to_path_buf(), source })?;
                }
                std::fs::write(out, format!("{rendered}\n"))
                    .map_err(|source| Error::Write { path: out.clone(), source })?;
                debug!(path = %out.display(), "wrote output");
                Ok(())
            }
            None => write_stdout(&mut std::io::stdout().lock(), rendered),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        // 1) load the sample
        let document = self.input_settings.load_document()?;

        // 2) infer + render in memory
        let rendered = self.output_settings.render(&document)?;

        // 3) write
        self.output_settings.write(&rendered)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// A reader that went away (`| head`) is not a failure; any other write
/// error is.
fn write_stdout(out: &mut impl Write, rendered: &str) -> Result<()> {
    match writeln!(out, "{rendered}").and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(source) => Err(Error::Write { path: Path::new("<stdout>").to_path_buf(), source }),
    }
}

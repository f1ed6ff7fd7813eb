use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xmlrender::{
    loader::{LoaderConfig, DEFAULT_MAX_DEPTH},
    render,
    utils::load_json_with_config,
    Doctype, XmlDeclaration,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Render JSON markup descriptors to XML", long_about = None)]
struct Args {
    /// Input JSON file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Prefix the output with an XML declaration
    #[arg(short, long)]
    declaration: bool,

    /// XML version for the declaration
    #[arg(long, value_name = "VERSION")]
    xml_version: Option<String>,

    /// Encoding for the declaration
    #[arg(long)]
    encoding: Option<String>,

    /// Standalone value for the declaration
    #[arg(long)]
    standalone: Option<String>,

    /// Root element name for a DOCTYPE declaration
    #[arg(long, value_name = "ROOT")]
    doctype: Option<String>,

    /// Public identifier for the DOCTYPE
    #[arg(long)]
    public_id: Option<String>,

    /// System URI for the DOCTYPE
    #[arg(long)]
    system_uri: Option<String>,

    /// Internal subset for the DOCTYPE, emitted verbatim
    #[arg(long)]
    internal_subset: Option<String>,

    /// Maximum nesting depth accepted in the input
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn xml_declaration(&self) -> Option<XmlDeclaration> {
        let wanted = self.declaration
            || self.xml_version.is_some()
            || self.encoding.is_some()
            || self.standalone.is_some();
        if !wanted {
            return None;
        }

        let mut decl = XmlDeclaration::default();
        if let Some(version) = &self.xml_version {
            decl = decl.version(version);
        }
        if let Some(encoding) = &self.encoding {
            decl = decl.encoding(encoding);
        }
        decl.standalone = self.standalone.clone();
        Some(decl)
    }

    fn doctype(&self) -> Option<Doctype> {
        let wanted = self.doctype.is_some()
            || self.public_id.is_some()
            || self.system_uri.is_some()
            || self.internal_subset.is_some();
        if !wanted {
            return None;
        }

        let mut doctype = self.doctype.as_deref().map(Doctype::new).unwrap_or_default();
        doctype.public_id = self.public_id.clone();
        doctype.system_uri = self.system_uri.clone();
        doctype.internal_subset = self.internal_subset.clone();
        Some(doctype)
    }

    /// Prefixes the rendered body with the requested header lines.
    fn document(&self, body: &str) -> String {
        let mut lines = Vec::new();
        if let Some(decl) = self.xml_declaration() {
            lines.push(decl.to_string());
        }
        if let Some(doctype) = self.doctype() {
            lines.push(doctype.to_string());
        }
        lines.push(body.to_string());

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input = read_input(&args.input)?;
    let config = LoaderConfig::default().with_max_depth(args.max_depth);
    let nodes =
        load_json_with_config(&input, config).context("failed to load markup descriptors")?;
    info!("Rendering {} top-level nodes", nodes.len());

    let output = args.document(&render(&nodes));
    write_output(&args.output, output.as_bytes())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")
        }
    }
}

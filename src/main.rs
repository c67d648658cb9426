use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use modgraph::core::config::{
    DEFAULT_DEPENDENCY_PATTERN, DEFAULT_EXTENSION, DEFAULT_MODULE_ID_PATTERN, DEFAULT_SEPARATOR,
};
use modgraph::core::{ModuleGraphAnalyzer, ScanConfig};
use modgraph::formatters::dot::DEFAULT_TITLE;
use modgraph::formatters::OutputFormat;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "modgraph",
    version = "0.1.0",
    author = "modgraph developers",
    about = "Extract a module dependency graph from a source tree using regular expressions"
)]
struct Cli {
    /// Source directory to walk recursively
    #[arg(value_name = "SOURCE", default_value = ".")]
    source: PathBuf,

    /// Extension of the files to scan, including the leading dot
    #[arg(short = 'e', long = "extensions", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Regex with one group capturing a file's module id
    #[arg(short = 'i', long = "moduleIdRegEx", default_value = DEFAULT_MODULE_ID_PATTERN)]
    module_id_regex: String,

    /// Regex with one group capturing a dependency id
    #[arg(long = "dependencyRegEx", default_value = DEFAULT_DEPENDENCY_PATTERN)]
    dependency_regex: String,

    /// Dependencies matching this regex are dropped
    #[arg(long = "ignoreDependencyRegEx", value_name = "REGEX")]
    ignore_dependency_regex: Option<String>,

    /// Replacement rules as newName!!!regex pairs separated by @@@; first match wins
    #[arg(long = "replaceDependencyRegEx", value_name = "RULES")]
    replace_dependency_regex: Option<String>,

    /// Maximum number of name levels to keep (0 keeps all)
    #[arg(short = 'n', long = "depth", default_value_t = 0)]
    depth: usize,

    /// Character separating name levels for --depth
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,

    /// Emit Graphviz DOT
    #[arg(short = 'd', long = "dot", conflicts_with_all = ["neo4j", "json"])]
    dot: bool,

    /// Emit a Neo4j Cypher creation script
    #[arg(long = "neo4j", conflicts_with = "json")]
    neo4j: bool,

    /// Emit compact JSON
    #[arg(long = "json")]
    json: bool,

    /// Title of the DOT diagram
    #[arg(long = "dotDiagramTitle", default_value = DEFAULT_TITLE)]
    dot_diagram_title: String,

    /// Write the graph to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log per-file progress
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.dot {
            OutputFormat::Dot
        } else if self.neo4j {
            OutputFormat::Cypher
        } else if self.json {
            OutputFormat::JsonCompact
        } else {
            OutputFormat::PlainText
        }
    }

    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::default()
            .with_extension(&self.extension)
            .with_module_id_pattern(&self.module_id_regex)
            .with_dependency_pattern(&self.dependency_regex)
            .with_max_depth(self.depth)
            .with_separator(self.separator);
        if let Some(ignore) = &self.ignore_dependency_regex {
            config = config.with_ignore_pattern(ignore);
        }
        if let Some(replacements) = &self.replace_dependency_regex {
            config = config.with_replacements(replacements);
        }
        config
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output_format();
    let config = cli.scan_config();
    log::debug!("Output format: {}", format.as_str());

    // printed with the graph output, independent of the log level
    for part in config.malformed_replacements() {
        println!("Error parsing replaceDependencyRegEx {part}");
    }

    let analyzer = ModuleGraphAnalyzer::new(&config).context("invalid scan configuration")?;
    let graph = analyzer
        .analyze(&cli.source)
        .with_context(|| format!("failed to analyze {}", cli.source.display()))?;

    let formatter = format.formatter(&cli.dot_diagram_title);
    match &cli.output {
        Some(path) => {
            formatter
                .format_to_file(&graph, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {} graph to {}", format.as_str(), path.display());
        }
        None => formatter
            .write_to(&graph, &mut io::stdout().lock())
            .context("failed to write graph to stdout")?,
    }

    Ok(())
}

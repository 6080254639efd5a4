//! UA Fixture Sources CLI
//!
//! Command-line interface for reading user agents and test cases out of
//! third-party fixture directories.

mod console;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use console::ConsoleProgress;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use ua_fixture_sources_common::{BrowscapProperties, SourcesConfig};
use ua_fixture_sources_parser::browscap::DEFAULT_BROWSCAP_ISSUES_PATH;
use ua_fixture_sources_parser::piwik::DEFAULT_PIWIK_PATH;
use ua_fixture_sources_parser::{BrowscapIssuesSource, PiwikSource, Source};
use ua_fixture_sources_writer::{ExportFormat, FixtureWriter};

#[derive(Parser)]
#[command(name = "ua-fixture-sources")]
#[command(version, about = "Read user agents and test cases from third-party fixture suites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the distinct user agents of a fixture suite, one per line
    #[command(after_help = "EXAMPLES:\n  \
        # All device-detector user agents\n  \
        ua-fixture-sources agents\n\n  \
        # First 100 from a local checkout\n  \
        ua-fixture-sources agents --path ./device-detector/Tests/fixtures --limit 100")]
    Agents {
        #[command(flatten)]
        source: SourceArgs,

        /// Stop after this many user agents (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print test cases as JSON lines
    #[command(after_help = "EXAMPLES:\n  \
        # Raw test cases (request only)\n  \
        ua-fixture-sources tests\n\n  \
        # Mapped test cases as browscap properties\n  \
        ua-fixture-sources tests --map --properties --companies ./companies.yaml")]
    Tests {
        #[command(flatten)]
        source: SourceArgs,

        /// Translate fixture fields through the default mappers
        #[arg(short, long)]
        map: bool,

        /// Print the flat browscap property view instead of the test case
        #[arg(short, long)]
        properties: bool,

        /// Stop after this many test cases (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Write test cases into chunked fixture files
    #[command(after_help = "EXAMPLES:\n  \
        # Export mapped piwik test cases as YAML\n  \
        ua-fixture-sources export --map --output ./out\n\n  \
        # JSON files of 500 test cases each\n  \
        ua-fixture-sources export --map --format json --chunk-size 500 --output ./out")]
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Translate fixture fields through the default mappers
        #[arg(short, long)]
        map: bool,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Export file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Test cases per file
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Stop after this many test cases (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Where fixtures come from
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Fixture suite to read
    #[arg(short, long, value_enum, default_value_t = SourceKind::Piwik)]
    source: SourceKind,

    /// Fixture root directory (defaults to the vendor path of the suite)
    #[arg(long)]
    path: Option<PathBuf>,

    /// YAML company list merged over the built-in one
    #[arg(long)]
    companies: Option<PathBuf>,

    /// Sources configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// matomo/device-detector fixtures
    Piwik,
    /// browscap issue fixtures
    Browscap,
}

impl SourceKind {
    fn name(&self) -> &'static str {
        match self {
            SourceKind::Piwik => "piwik",
            SourceKind::Browscap => "browscap",
        }
    }

    fn default_path(&self) -> &'static str {
        match self {
            SourceKind::Piwik => DEFAULT_PIWIK_PATH,
            SourceKind::Browscap => DEFAULT_BROWSCAP_ISSUES_PATH,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => ExportFormat::Yaml,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Agents { source, limit } => {
            agents_command(&source, limit, cli.verbose)?;
        }
        Commands::Tests {
            source,
            map,
            properties,
            limit,
        } => {
            tests_command(&source, map, properties, limit, cli.verbose)?;
        }
        Commands::Export {
            source,
            map,
            output,
            format,
            chunk_size,
            limit,
        } => {
            export_command(ExportOptions {
                source: &source,
                map,
                output: &output,
                format,
                chunk_size,
                limit,
                verbose: cli.verbose,
            })?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn agents_command(args: &SourceArgs, limit: Option<usize>, verbose: bool) -> Result<()> {
    let config = load_config(args)?;
    let source = build_source(args, &config, false)?;
    let progress = ConsoleProgress::new(verbose);

    let mut stdout = io::stdout().lock();
    let mut count = 0;
    for user_agent in source.user_agents(&progress, resolve_limit(limit, &config)) {
        writeln!(stdout, "{}", user_agent).context("Failed to write to stdout")?;
        count += 1;
    }

    eprintln!("{} {} user agents", "✓".green(), count);
    Ok(())
}

fn tests_command(
    args: &SourceArgs,
    map: bool,
    properties: bool,
    limit: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let config = load_config(args)?;
    let source = build_source(args, &config, map)?;
    let progress = ConsoleProgress::new(verbose);

    let mut stdout = io::stdout().lock();
    let mut count = 0;
    for case in source.tests(&progress, resolve_limit(limit, &config)) {
        let line = if properties {
            serde_json::to_string(&BrowscapProperties::from(&case))
        } else {
            serde_json::to_string(&case)
        }
        .context("Failed to serialize test case")?;

        writeln!(stdout, "{}", line).context("Failed to write to stdout")?;
        count += 1;
    }

    eprintln!("{} {} test cases", "✓".green(), count);
    Ok(())
}

struct ExportOptions<'a> {
    source: &'a SourceArgs,
    map: bool,
    output: &'a Path,
    format: OutputFormat,
    chunk_size: Option<usize>,
    limit: Option<usize>,
    verbose: bool,
}

fn export_command(options: ExportOptions) -> Result<()> {
    let config = load_config(options.source)?;
    let source = build_source(options.source, &config, options.map)?;
    let progress = ConsoleProgress::new(options.verbose);
    let chunk_size = options.chunk_size.unwrap_or(config.export.chunk_size);

    println!(
        "{} Exporting {} test cases to {}",
        "→".cyan(),
        source.name().yellow(),
        options.output.display()
    );

    let writer = FixtureWriter::new(options.output, options.format.into())
        .context("Failed to create fixture writer")?
        .with_chunk_size(chunk_size);
    let summary = writer
        .write(
            source.name(),
            source.tests(&progress, resolve_limit(options.limit, &config)),
        )
        .context("Failed to export test cases")?;

    println!("\n{}", "✓ Export complete!".green().bold());
    println!("  Test cases: {}", summary.total);
    println!("\n{}", "Written files:".bold());
    for file in &summary.files {
        println!("  {}/{}", options.output.display(), file);
    }
    println!("  {}/summary.md", options.output.display());

    Ok(())
}

fn load_config(args: &SourceArgs) -> Result<SourcesConfig> {
    match &args.config {
        Some(path) => SourcesConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SourcesConfig::default()),
    }
}

/// Flag, then config file, then unlimited
fn resolve_limit(flag: Option<usize>, config: &SourcesConfig) -> Option<usize> {
    match flag {
        Some(0) => None,
        Some(limit) => Some(limit),
        None => config.effective_limit(),
    }
}

/// Flag, then config file, then the vendor default
fn resolve_path(args: &SourceArgs, config: &SourcesConfig) -> PathBuf {
    args.path
        .clone()
        .or_else(|| {
            config
                .source(args.source.name())
                .and_then(|settings| settings.path.clone())
        })
        .unwrap_or_else(|| PathBuf::from(args.source.default_path()))
}

fn build_source(args: &SourceArgs, config: &SourcesConfig, map: bool) -> Result<Box<dyn Source>> {
    let path = resolve_path(args, config);
    let extensions = config
        .source(args.source.name())
        .and_then(|settings| settings.extensions.clone());

    tracing::debug!(source = %args.source, path = %path.display(), map, "building source");

    let source: Box<dyn Source> = match args.source {
        SourceKind::Piwik => {
            let mut source = PiwikSource::with_path(path);
            if let Some(extensions) = extensions {
                source = source.with_extensions(extensions);
            }
            if map {
                let companies = args.companies.as_deref().or(config.companies.as_deref());
                let mapping = ua_fixture_sources_mapper::default_mapping(companies)
                    .context("Failed to set up mapping")?;
                source = source.with_mapping(mapping);
            }
            Box::new(source)
        }
        SourceKind::Browscap => {
            if map {
                tracing::warn!("browscap issue fixtures carry no vendor fields, ignoring --map");
            }
            let mut source = BrowscapIssuesSource::with_path(path);
            if let Some(extensions) = extensions {
                source = source.with_extensions(extensions);
            }
            Box::new(source)
        }
    };

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn source_args(source: SourceKind, path: Option<&str>) -> SourceArgs {
        SourceArgs {
            source,
            path: path.map(PathBuf::from),
            companies: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tests_command() {
        let cli = Cli::try_parse_from([
            "ua-fixture-sources",
            "tests",
            "--map",
            "--properties",
            "--source",
            "piwik",
            "--limit",
            "10",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Tests {
                source,
                map,
                properties,
                limit,
            } => {
                assert_eq!(source.source, SourceKind::Piwik);
                assert!(map);
                assert!(properties);
                assert_eq!(limit, Some(10));
            }
            _ => panic!("expected tests command"),
        }
    }

    #[test]
    fn test_resolve_limit() {
        let config = SourcesConfig::from_yaml("limit: 50").unwrap();
        assert_eq!(resolve_limit(Some(5), &config), Some(5));
        assert_eq!(resolve_limit(Some(0), &config), None);
        assert_eq!(resolve_limit(None, &config), Some(50));
        assert_eq!(resolve_limit(None, &SourcesConfig::default()), None);
    }

    #[test]
    fn test_resolve_path() {
        let config =
            SourcesConfig::from_yaml("sources:\n  piwik:\n    path: /srv/piwik\n").unwrap();

        assert_eq!(
            resolve_path(&source_args(SourceKind::Piwik, Some("./local")), &config),
            PathBuf::from("./local")
        );
        assert_eq!(
            resolve_path(&source_args(SourceKind::Piwik, None), &config),
            PathBuf::from("/srv/piwik")
        );
        assert_eq!(
            resolve_path(&source_args(SourceKind::Browscap, None), &config),
            PathBuf::from(DEFAULT_BROWSCAP_ISSUES_PATH)
        );
    }

    #[test]
    fn test_build_source_names() {
        let config = SourcesConfig::default();
        let piwik = build_source(&source_args(SourceKind::Piwik, None), &config, true).unwrap();
        assert_eq!(piwik.name(), "piwik");

        let browscap =
            build_source(&source_args(SourceKind::Browscap, None), &config, true).unwrap();
        assert_eq!(browscap.name(), "browscap");
    }
}

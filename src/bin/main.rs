use anyhow::{Context, Result};
use changelog_merge::{ChangelogMerger, HeadingStyle, MergeConfig, MergeReport};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "changelog-merge")]
#[command(version, about = "merge per-task changelog fragments into CHANGELOG.md", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// project root, relative paths resolve against it (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// configuration file (defaults to changelog-merge.toml in the project root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    /// enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// prepend the merged fragments to the changelog and delete them
    Merge {
        #[command(flatten)]
        overrides: Overrides,

        /// destination changelog file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// keep the fragment files after merging
        #[arg(short, long)]
        keep_fragments: bool,
    },

    /// print the block that would be merged without writing anything
    Preview {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(Args)]
struct Overrides {
    /// directory holding the changelog fragments
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// locale of the release date, e.g. de_DE or en_US
    #[arg(short, long)]
    locale: Option<String>,

    /// topic header level (h1 or h2)
    #[arg(long)]
    heading: Option<HeadingStyle>,
}

impl Overrides {
    fn apply(&self, mut config: MergeConfig) -> MergeConfig {
        if let Some(dir) = &self.dir {
            config = config.changelog_dir(dir);
        }
        if let Some(locale) = &self.locale {
            config = config.locale(locale);
        }
        if let Some(heading) = self.heading {
            config = config.heading_style(heading);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = load_config(&cli.path, cli.config.as_deref())?;

    match &cli.command {
        Commands::Merge {
            overrides,
            output,
            keep_fragments,
        } => {
            let mut config = overrides.apply(config);
            if let Some(output) = output {
                config = config.changelog_file(output);
            }
            if *keep_fragments {
                config = config.delete_merged_files(false);
            }
            handle_merge(config.resolve_paths(&cli.path), &cli.format)?;
        }
        Commands::Preview { overrides } => {
            let config = overrides.apply(config);
            handle_preview(config.resolve_paths(&cli.path), &cli.format)?;
        }
    }

    Ok(())
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<MergeConfig> {
    let config = match explicit {
        Some(path) => MergeConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => MergeConfig::load_or_default(root).context("failed to load configuration")?,
    };
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn handle_merge(config: MergeConfig, format: &OutputFormat) -> Result<()> {
    let merger = ChangelogMerger::new(config).context("invalid configuration")?;
    let report = merger.merge().context("failed to merge changelog fragments")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if !report.has_fragments() {
                println!(
                    "no changelog fragments found in {}",
                    merger.config().changelog_dir.display()
                );
                return Ok(());
            }

            if !report.deleted.is_empty() {
                println!("deleted {} merged file(s)", report.deleted.len());
            }
            println!("new changelog entry in {}:", report.destination.display());
            print_block(&report);
        }
    }

    Ok(())
}

fn handle_preview(config: MergeConfig, format: &OutputFormat) -> Result<()> {
    let merger = ChangelogMerger::new(config).context("invalid configuration")?;
    let report = merger
        .preview()
        .context("failed to read changelog fragments")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!(
                "{} fragment(s), {} public and {} private entries",
                report.fragments.len(),
                report.public_entries,
                report.private_entries
            );
            println!();
            print_block(&report);
        }
    }

    Ok(())
}

fn print_block(report: &MergeReport) {
    println!("{}", report.block);
}

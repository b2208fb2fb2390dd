//! md2site: CLI tool to build a static knowledge-base site from mdlite articles

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use config::{CONFIG_FILE_NAME, Config};
use md2site_core::{WriterOptions, markdown_to_html_with_options, parse, to_json};
use md2site_site::{ArticleStore, SiteBuildOptions, SiteBuilder, split_front_matter};

#[derive(Parser, Debug)]
#[command(name = "md2site")]
#[command(about = "Convert mdlite Markdown articles into a static site")]
#[command(version)]
#[command(after_help = "Examples:
  md2site convert article.md              # Print the HTML fragment
  md2site convert article.md -o out.html  # Write to a file
  md2site convert article.md --ast        # Dump the parsed AST as JSON
  md2site build articles/ -o _site/       # Build the whole site
  md2site build articles/ -j4             # Use 4 parallel jobs
  md2site init                            # Write a sample _md2site.toml")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single Markdown file to an HTML fragment
    Convert(ConvertArgs),
    /// Build a site from a directory of articles
    Build(BuildArgs),
    /// Write a sample configuration file
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input Markdown file (front matter, if any, is skipped)
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Escape <, > and & in text content
    #[arg(long)]
    escape_html: bool,

    /// Print the parsed document as JSON instead of HTML
    #[arg(long)]
    ast: bool,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Directory containing .md articles
    input: PathBuf,

    /// Output directory [default: _site]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file [default: <input>/_md2site.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of parallel jobs (defaults to number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Absolute site URL for canonical links and the sitemap
    #[arg(long)]
    base_url: Option<String>,

    /// Do not write sitemap.xml
    #[arg(long)]
    no_sitemap: bool,

    /// Write articles.json with the article listing
    #[arg(long)]
    index_json: bool,

    /// Escape <, > and & in article bodies
    #[arg(long)]
    escape_html: bool,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Output path [default: _md2site.toml]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the JSON schema of the configuration file instead
    #[arg(long)]
    schema: bool,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Convert(args) => convert_file(&args),
        Command::Build(args) => build_site(&args, cli.quiet),
        Command::Init(args) => init_config(&args, cli.quiet),
    }
}

/// Set up env_logger; `RUST_LOG` takes precedence over `-v`/`-q`
fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// Convert a single Markdown file
fn convert_file(args: &ConvertArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;

    let (front, body) = split_front_matter(&content);
    if front.is_some() {
        debug!("Skipping front matter of {}", args.input.display());
    }

    let mut output = if args.ast {
        to_json(&parse(body)).context("Failed to serialize AST")?
    } else {
        let options = WriterOptions {
            escape_html: args.escape_html,
        };
        markdown_to_html_with_options(body, &options)
    };
    if !output.is_empty() {
        output.push('\n');
    }

    match &args.output {
        Some(path) => {
            write_file(path, &output)?;
            info!("{} -> {}", args.input.display(), path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Build a site from a directory of articles
fn build_site(args: &BuildArgs, quiet: bool) -> Result<()> {
    if !args.input.is_dir() {
        anyhow::bail!("Input directory does not exist: {}", args.input.display());
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => match Config::load_from_dir(&args.input)? {
            Some(config) => {
                debug!("Using {}", args.input.join(CONFIG_FILE_NAME).display());
                config
            }
            None => Config::default(),
        },
    };

    let recursive = args.recursive || config.build.recursive.unwrap_or(false);
    let store = ArticleStore::from_directory(&args.input, recursive)
        .with_context(|| format!("Failed to load articles from {}", args.input.display()))?;

    if store.is_empty() {
        warn!("No .md articles found in {}", args.input.display());
    } else {
        info!("Loaded {} article(s)", store.len());
    }

    let mut site = config.site.to_site_info();
    if let Some(base_url) = &args.base_url {
        site.base_url = base_url.clone();
    }

    let options = SiteBuildOptions {
        output_dir: args
            .output
            .clone()
            .or_else(|| config.output.dir.clone())
            .unwrap_or_else(|| PathBuf::from("_site")),
        site,
        writer: WriterOptions {
            escape_html: args.escape_html || config.output.escape_html.unwrap_or(false),
        },
        sitemap: !args.no_sitemap && config.output.sitemap.unwrap_or(true),
        index_json: args.index_json || config.output.index_json.unwrap_or(false),
        parallel_jobs: args.jobs.or(config.build.jobs),
        ..SiteBuildOptions::default()
    };
    let output_dir = options.output_dir.clone();

    let result = SiteBuilder::new(&store, options)
        .build()
        .with_context(|| format!("Failed to build site into {}", output_dir.display()))?;

    if !quiet {
        for file in &result.output_files {
            println!("{}", file.display());
        }
    }

    for (slug, e) in &result.failed_pages {
        error!("Error writing {}: {}", slug, e);
    }

    info!(
        "Built {} pages, {} failed",
        result.success_count,
        result.failed_pages.len()
    );

    if !result.failed_pages.is_empty() {
        anyhow::bail!("{} pages failed to build", result.failed_pages.len());
    }

    Ok(())
}

/// Write a sample configuration file or print the schema
fn init_config(args: &InitArgs, quiet: bool) -> Result<()> {
    if args.schema {
        let schema = Config::json_schema_string()?;
        match &args.output {
            Some(path) => write_file(path, &schema)?,
            None => println!("{}", schema),
        }
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    write_file(&path, &Config::sample().to_toml_with_schema()?)?;

    if !quiet {
        println!("{}", path.display());
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))
}

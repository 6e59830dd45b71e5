mod styled;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;
use notionmd_config::{Config, resolve_token_in};
use notionmd_engine::{
    DatabaseSchema, PageWithBlocks, PropertyStyle, QueryRequest, block_requests_json,
    format_property_value, parse_markdown, parse_notion_id, query_request_json, read_markdown,
    read_page, read_page_from, read_schema, read_schema_from, render_page_markdown,
};
use std::io::{self, Read};
use std::path::Path;
use std::process;

const STDIN: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "notionmd", version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a fetched page (JSON) as Markdown
    Render {
        /// Page JSON file, or `-` for stdin
        input: String,

        /// Plain Markdown even on a terminal
        #[arg(long)]
        md: bool,
    },
    /// Convert Markdown into block write requests (JSON)
    Parse {
        /// Markdown file, or `-` for stdin
        #[arg(conflicts_with = "message")]
        input: Option<String>,

        /// Inline Markdown text
        #[arg(short, long)]
        message: Option<String>,

        #[arg(long)]
        pretty: bool,
    },
    /// List a page's properties as `name<TAB>value`
    Props {
        /// Page JSON file, or `-` for stdin
        input: String,
    },
    /// Build a database query body (JSON) from filters and sorts
    Query {
        /// Database JSON file providing the schema, or `-` for stdin
        schema: String,

        /// `Property=Value`, repeatable; several filters are combined with `and`
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// `Property` or `Property:desc`, repeatable
        #[arg(short, long = "sort")]
        sorts: Vec<String>,

        #[arg(long)]
        pretty: bool,
    },
    /// Normalize a page id or URL
    Id {
        input: String,

        /// Print in dashed 8-4-4-4-12 form
        #[arg(long)]
        uuid: bool,
    },
    /// Manage saved profiles
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Inspect authentication
    #[command(subcommand)]
    Auth(AuthCommand),
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// List saved profiles
    List,
    /// Switch the active profile
    Use { name: String },
    /// Remove a saved profile
    Remove { name: String },
}

#[derive(Debug, Subcommand)]
enum AuthCommand {
    /// Show which token would be used
    Status,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { input, md } => {
            let page = load_page(&input)?;
            let markdown = render_page_markdown(&page);
            if !md && io::stdout().is_tty() {
                print!("{}", styled::style_markdown(&markdown));
            } else {
                print!("{markdown}");
            }
        }
        Command::Parse {
            input,
            message,
            pretty,
        } => {
            let markdown = match message {
                Some(text) => text,
                None => load_markdown(input.as_deref().unwrap_or(STDIN))?,
            };
            let blocks = parse_markdown(&markdown);
            if blocks.is_empty() {
                eprintln!("Nothing to append.");
                return Ok(());
            }
            println!("{}", block_requests_json(&blocks, pretty)?);
        }
        Command::Props { input } => {
            let page = load_page(&input)?;
            for (name, value) in &page.page.properties {
                println!(
                    "{name}\t{}",
                    format_property_value(value, PropertyStyle::Cell)
                );
            }
        }
        Command::Query {
            schema,
            filters,
            sorts,
            pretty,
        } => {
            let schema = load_schema(&schema)?;
            let request = QueryRequest::build(&filters, &sorts, &schema)?;
            println!("{}", query_request_json(&request, pretty)?);
        }
        Command::Id { input, uuid } => {
            let id = parse_notion_id(&input)?;
            if uuid {
                println!("{}", id.to_uuid());
            } else {
                println!("{id}");
            }
        }
        Command::Profile(command) => run_profile(command)?,
        Command::Auth(AuthCommand::Status) => {
            let cwd = std::env::current_dir().context("Cannot determine working directory")?;
            let resolved = resolve_token_in(&cwd)?;
            println!("Source: {}", resolved.source);
            println!("Token: {}", resolved.preview());
        }
    }
    Ok(())
}

fn run_profile(command: ProfileCommand) -> Result<()> {
    let mut config = Config::load()?;
    match command {
        ProfileCommand::List => {
            if config.profiles.is_empty() {
                println!("No profiles configured.");
                return Ok(());
            }
            for name in config.profile_names() {
                println!("{}", profile_line(&config, name));
            }
        }
        ProfileCommand::Use { name } => {
            config.use_profile(&name)?;
            config.save()?;
            eprintln!("Switched to profile \"{name}\".");
        }
        ProfileCommand::Remove { name } => {
            config.remove_profile(&name)?;
            config.save()?;
            eprintln!("Profile \"{name}\" removed.");
        }
    }
    Ok(())
}

fn profile_line(config: &Config, name: &str) -> String {
    let active = config.is_active(name);
    let marker = if active { "* " } else { "  " };
    let label = if active { " (active)" } else { "" };
    let workspace = config
        .profiles
        .get(name)
        .and_then(|p| p.workspace_name.as_deref())
        .map(|w| format!(" [{w}]"))
        .unwrap_or_default();
    format!("{marker}{name}{label}{workspace}")
}

fn load_page(input: &str) -> Result<PageWithBlocks> {
    let page = if input == STDIN {
        read_page_from(io::stdin().lock())?
    } else {
        read_page(Path::new(input)).with_context(|| format!("Cannot load page from {input}"))?
    };
    Ok(page)
}

fn load_schema(input: &str) -> Result<DatabaseSchema> {
    let schema = if input == STDIN {
        read_schema_from(io::stdin().lock())?
    } else {
        read_schema(Path::new(input)).with_context(|| format!("Cannot load schema from {input}"))?
    };
    Ok(schema)
}

fn load_markdown(input: &str) -> Result<String> {
    if input == STDIN {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Cannot read Markdown from stdin")?;
        return Ok(text);
    }
    Ok(read_markdown(Path::new(input))?)
}

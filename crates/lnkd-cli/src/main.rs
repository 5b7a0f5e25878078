//! `lnkd`: inspect API XML documents from the command line.
//!
//! # Usage
//!
//! ```text
//! lnkd profile person.xml
//! lnkd updates network.xml --links markdown
//! lnkd update one.xml --type SHAR --json
//! ```
//!
//! Options are read from `lnkd.toml` (or `--config`) and `LNKD_*`
//! environment variables; flags win over both.

use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use lnkd_core::{LinkStyle, Update};
use lnkd_xml::{Lookup, Options};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lnkd", author, version, about = "Inspect social-network API XML")]
struct Cli {
  /// Path to a TOML file holding extraction options.
  #[arg(short, long, global = true, default_value = "lnkd.toml")]
  config: PathBuf,

  /// Resolve profile fields anywhere below their node, not only as children.
  #[arg(long, global = true)]
  descendant: bool,

  /// Keep the source XML on parsed profiles.
  #[arg(long, global = true)]
  capture_xml: bool,

  /// How links are written into rendered messages.
  #[arg(long, global = true, value_enum)]
  links: Option<Links>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Parse a `<person>` document and print it as JSON.
  Profile { file: PathBuf },

  /// Parse a feed of `<update>` elements.
  Updates {
    file: PathBuf,

    /// Print records as JSON instead of rendered messages.
    #[arg(long)]
    json: bool,
  },

  /// Parse one `<update>` envelope with an explicit type tag.
  Update {
    file: PathBuf,

    /// The update type tag, e.g. `CONN`.
    #[arg(long = "type", value_name = "TAG")]
    tag: String,

    #[arg(long)]
    json: bool,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Links {
  Html,
  Markdown,
  Plain,
}

impl From<Links> for LinkStyle {
  fn from(links: Links) -> Self {
    match links {
      Links::Html => LinkStyle::Html,
      Links::Markdown => LinkStyle::Markdown,
      Links::Plain => LinkStyle::Plain,
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let options = load_options(&cli)?;

  match &cli.command {
    Command::Profile { file } => {
      let profile = lnkd_xml::parse_profile(&read(file)?, &options)
        .with_context(|| format!("parsing profile {}", file.display()))?;
      print_json(&profile)
    }
    Command::Updates { file, json } => {
      let results = lnkd_xml::parse_updates(&read(file)?, &options)
        .with_context(|| format!("parsing feed {}", file.display()))?;
      let mut updates = Vec::with_capacity(results.len());
      for (index, result) in results.into_iter().enumerate() {
        match result {
          Ok(update) => updates.push(update),
          Err(e) => eprintln!("update {index}: {e}"),
        }
      }
      if *json {
        print_json(&updates)
      } else {
        updates.iter().for_each(|u| print_message(u, &options));
        Ok(())
      }
    }
    Command::Update { file, tag, json } => {
      let update = lnkd_xml::parse_update(&read(file)?, tag, &options)
        .with_context(|| format!("parsing {tag} update {}", file.display()))?;
      if *json {
        print_json(&update)
      } else {
        print_message(&update, &options);
        Ok(())
      }
    }
  }
}

/// Config file, then environment, then flags.
fn load_options(cli: &Cli) -> anyhow::Result<Options> {
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("LNKD"))
    .build()
    .context("failed to read config file")?;

  let mut options: Options = settings
    .try_deserialize()
    .context("failed to deserialise Options")?;

  if cli.descendant {
    options.profile_lookup = Lookup::Descendant;
  }
  if cli.capture_xml {
    options.capture_xml = true;
  }
  if let Some(links) = cli.links {
    options.link_style = links.into();
  }
  tracing::debug!(?options, "loaded options");
  Ok(options)
}

fn read(path: &Path) -> anyhow::Result<String> {
  fs::read_to_string(path)
    .with_context(|| format!("reading {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn print_message(update: &Update, options: &Options) {
  let at = update
    .posted_at()
    .map(|t| t.to_rfc3339())
    .unwrap_or_else(|| update.timestamp.to_string());
  println!(
    "[{at}] {}: {}",
    update.update_type,
    update.message_with(options.link_style)
  );
}

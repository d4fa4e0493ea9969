//! Command-line interface for the parser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::TEXT_WRAP_WIDTH;
use crate::document::{
    Constitution, ConsumerRightsAct, CustomProfile, GenericDocument, LegalDocument, Level,
    Locator, Statute,
};
use crate::error::{ParserError, Result};
use crate::fragment::TocEntry;

/// Ustawa - Browse the structure of Polish legal texts.
#[derive(Parser, Debug)]
#[command(name = "ustawa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Document type of FILE
    #[arg(short, long, value_enum, default_value_t = DocumentKind::Constitution)]
    pub kind: DocumentKind,

    /// Profile YAML for `--kind custom`
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Plain-text document (UTF-8)
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    /// Constitution of the Republic of Poland
    Constitution,
    /// Consumer Rights Act
    ConsumerRights,
    /// Any document, segmented with a profile file
    Custom,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the table of contents of the document or of one unit.
    Toc {
        #[command(flatten)]
        locator: LocatorArgs,
    },

    /// Print the text of the document or of one unit.
    Show {
        #[command(flatten)]
        locator: LocatorArgs,

        #[command(flatten)]
        wrap: WrapArgs,
    },

    /// Print consecutive units of one level (e.g. `range article 5 7`).
    Range {
        /// section, chapter, article, paragraph, point or letter
        #[arg(value_parser = parse_level)]
        level: Level,

        /// First unit number
        start: String,

        /// Last unit number (inclusive)
        end: String,

        /// Unit to search in
        #[command(flatten)]
        scope: LocatorArgs,

        #[command(flatten)]
        wrap: WrapArgs,
    },

    /// Print the first fragment with an exact identifier (e.g. "Art. 12.").
    Find {
        identifier: String,

        #[command(flatten)]
        wrap: WrapArgs,
    },

    /// Dump the fragment tree as YAML.
    Outline,
}

/// Numbers of the enclosing units, outermost first.
#[derive(Args, Debug, Clone, Default)]
pub struct LocatorArgs {
    /// Division (DZIAŁ), arabic or roman
    #[arg(long)]
    pub section: Option<String>,

    /// Chapter (Rozdział)
    #[arg(long)]
    pub chapter: Option<String>,

    /// Article (Art.), e.g. 7a
    #[arg(long)]
    pub article: Option<String>,

    /// Paragraph (ustęp), needs --article
    #[arg(long)]
    pub paragraph: Option<String>,

    /// Point (punkt), needs --article
    #[arg(long)]
    pub point: Option<String>,

    /// Letter (litera), needs --point
    #[arg(long)]
    pub letter: Option<String>,
}

impl From<LocatorArgs> for Locator {
    fn from(args: LocatorArgs) -> Self {
        Locator {
            section: args.section,
            chapter: args.chapter,
            article: args.article,
            paragraph: args.paragraph,
            point: args.point,
            letter: args.letter,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WrapArgs {
    /// Wrap long lines
    #[arg(short, long)]
    pub wrap: bool,

    /// Wrap width (implies --wrap)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,
}

impl WrapArgs {
    fn width(self) -> Option<usize> {
        self.width
            .map(usize::from)
            .or(self.wrap.then_some(TEXT_WRAP_WIDTH))
    }
}

fn parse_level(value: &str) -> std::result::Result<Level, String> {
    value.parse().map_err(|e: ParserError| e.to_string())
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute parsed arguments.
pub fn execute(cli: Cli) -> Result<()> {
    let statute = load(&cli)?;

    match cli.command {
        Commands::Toc { locator } => toc_command(statute.as_ref(), &locator.into()),
        Commands::Show { locator, wrap } => {
            let text = statute.content(&locator.into())?;
            print_text(&text, wrap.width());
            Ok(())
        }
        Commands::Range {
            level,
            start,
            end,
            scope,
            wrap,
        } => range_command(statute.as_ref(), &scope.into(), level, &start, &end, wrap.width()),
        Commands::Find { identifier, wrap } => {
            let fragment = statute.document().find(&identifier)?;
            print_text(&fragment.full_text(), wrap.width());
            Ok(())
        }
        Commands::Outline => {
            print!("{}", statute.document().outline_yaml()?);
            Ok(())
        }
    }
}

/// Parse FILE with the façade matching `--kind`.
fn load(cli: &Cli) -> Result<Box<dyn Statute>> {
    if cli.profile.is_some() && cli.kind != DocumentKind::Custom {
        tracing::warn!("--profile is only used with --kind custom");
    }

    let statute: Box<dyn Statute> = match cli.kind {
        DocumentKind::Constitution => Box::new(Constitution::open(&cli.file)?),
        DocumentKind::ConsumerRights => Box::new(ConsumerRightsAct::open(&cli.file)?),
        DocumentKind::Custom => {
            let path = cli.profile.as_deref().ok_or_else(|| {
                ParserError::InvalidArgument("--kind custom needs --profile".to_string())
            })?;
            let profile = CustomProfile::load(path)?;
            Box::new(GenericDocument::new(LegalDocument::open(&cli.file, &profile)?))
        }
    };
    Ok(statute)
}

fn toc_command(statute: &dyn Statute, locator: &Locator) -> Result<()> {
    let entries = if locator.is_empty() {
        statute.table_of_contents()
    } else {
        statute.table_of_contents_for(locator)?
    };

    if entries.is_empty() {
        println!("{}", style("(no structure found)").dim());
    }
    for entry in &entries {
        print_toc_entry(entry);
    }
    Ok(())
}

fn range_command(
    statute: &dyn Statute,
    scope: &Locator,
    level: Level,
    start: &str,
    end: &str,
    width: Option<usize>,
) -> Result<()> {
    let parts = statute
        .resolve_range(scope, level, start, end)
        .map_err(|e| e.context("Couldn't get range."))?;

    for part in parts {
        print_text(&part.full_text(), width);
    }
    Ok(())
}

fn print_toc_entry(entry: &TocEntry) {
    let indent = "  ".repeat(entry.depth.saturating_sub(1));
    let identifier = if entry.depth <= 1 {
        style(&entry.identifier).bold()
    } else {
        style(&entry.identifier).cyan()
    };
    match &entry.title {
        Some(title) => println!("{indent}{identifier} {title}"),
        None => println!("{indent}{identifier}"),
    }
}

fn print_text(text: &str, width: Option<usize>) {
    let text = match width {
        Some(width) => textwrap::fill(text, width),
        None => text.to_string(),
    };
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::models::{DEFAULT_DURATION, FileScanResult, SearchConfig};
use crate::scanner::{HistoryScanner, scan_history_tree};
use crate::utils::{get_history_base_dir, resolve_search_root, strip_ansi_codes};

const HEADER_RULE: &str = "-----------------";

#[derive(Parser)]
#[command(name = "search-directory-history")]
#[command(version = "0.1.0")]
#[command(about = "Search per-directory shell history files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for a term or terms in the directory history files.
    ///
    /// Terms can be combined with | and &. ORs are split first, then the ANDs
    /// between them:
    ///
    ///   search "kubectl & namespace | kubectl & statefulset"
    ///
    /// searches for both sides of the | separately. Parentheses are not
    /// supported: "kubectl & (namespace | statefulset)" will not do what it looks
    /// like.
    ///
    ///   search "statefulset | configmap | deployment"
    #[command(visible_alias = "s", verbatim_doc_comment)]
    Search(SearchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search expression
    pub terms: String,

    /// Show full multiline commands with match
    #[arg(short, long)]
    pub multiline: bool,

    /// Suppress the directory name output
    #[arg(short, long)]
    pub terse: bool,

    /// Print lines exactly as stored. By default escape sequences and control
    /// characters other than tab are removed before printing.
    #[arg(long)]
    pub raw: bool,

    /// Specify a starting relative path to start the search under
    #[arg(long, default_value = "/")]
    pub pathstart: String,

    /// Specify a starting relative path to start the search under
    #[arg(long, default_value = "/")]
    pub startpath: String,

    /// Specify how far back to search, in y,m,w,d
    #[arg(long, default_value = DEFAULT_DURATION)]
    pub searchfrom: String,

    /// Specify duration to search from 'searchfrom', in y,m,w,d
    #[arg(long, default_value = DEFAULT_DURATION)]
    pub searchduration: String,

    /// How many lines on each side of match to display
    #[arg(long, default_value_t = 0)]
    pub context: usize,
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::new(&self.terms)
            .with_from(&self.searchfrom)
            .with_window(&self.searchduration)
            .with_multiline(self.multiline)
            .with_terse(self.terse)
            .with_context(self.context)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Search(args)) => {
            search(args)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn search(args: &SearchArgs) -> Result<()> {
    let base = get_history_base_dir()?;
    let root = resolve_search_root(&base, &args.startpath, &args.pathstart);
    let scanner = HistoryScanner::local(args.to_config());
    let style = OutputStyle { terse: scanner.config().terse, raw: args.raw };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;

    scan_history_tree(&root, &scanner, |result| {
        if write_error.is_none()
            && let Err(e) = print_file_result(&mut out, result, style)
        {
            write_error = Some(e);
        }
    })?;

    if let Some(e) = write_error {
        return Err(e).context("Failed to write search results");
    }

    Ok(())
}

/// How scan results are written to the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputStyle {
    /// Omit the per-file path header
    pub terse: bool,
    /// Skip escape-sequence stripping
    pub raw: bool,
}

/// Print one file's lines, preceded by its path unless `terse`
///
/// Files without output print nothing at all.
pub fn print_file_result<W: Write>(
    out: &mut W,
    result: &FileScanResult,
    style: OutputStyle,
) -> io::Result<()> {
    if !result.has_output() {
        return Ok(());
    }

    if !style.terse {
        writeln!(out)?;
        writeln!(out, "{}:", result.path.display())?;
        writeln!(out, "{}", HEADER_RULE)?;
    }
    for line in &result.lines {
        if style.raw {
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", strip_ansi_codes(line))?;
        }
    }

    Ok(())
}

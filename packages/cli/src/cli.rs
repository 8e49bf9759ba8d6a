//! Command-line interface for tafqit.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use tafqit_engine::{wordify, wordify_detailed, GrammaticalCase, WordifyOptions};

use crate::config::resolve_options;
use crate::error::{CliError, Result};

/// Tafqit - Spell out numbers in Arabic words.
#[derive(Parser)]
#[command(name = "tafqit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spell out a number.
    Spell {
        /// Non-negative integer, up to 24 digits
        #[arg(allow_hyphen_values = true)]
        number: String,

        #[command(flatten)]
        options: OptionFlags,
    },

    /// Show how each digit group of a number is spelled.
    Explain {
        /// Non-negative integer, up to 24 digits
        #[arg(allow_hyphen_values = true)]
        number: String,

        #[command(flatten)]
        options: OptionFlags,
    },

    /// Spell out one number per line from a file or stdin.
    Batch {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        #[command(flatten)]
        options: OptionFlags,
    },
}

/// Flags shared by every command. Each flag switches one option on.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionFlags {
    /// The counted noun is feminine
    #[arg(long)]
    pub feminine: bool,

    /// Spell hundred as مئة instead of مائة
    #[arg(long)]
    pub miah: bool,

    /// Put an Arabic comma between groups
    #[arg(long)]
    pub comma: bool,

    /// Write 300-900 as two words (ثلاث مائة)
    #[arg(long)]
    pub split_hundred: bool,

    /// Name 10^9 بليون instead of مليار
    #[arg(long)]
    pub billions: bool,

    /// A counted noun follows the number (construct-state duals)
    #[arg(long)]
    pub text_after: bool,

    /// Grammatical case: nominative, accusative or genitive
    #[arg(long)]
    pub case: Option<GrammaticalCase>,

    /// YAML options file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Spell { number, options } => spell_command(&number, &resolve_options(&options)?),
        Commands::Explain { number, options } => {
            explain_command(&number, &resolve_options(&options)?)
        }
        Commands::Batch { file, options } => {
            batch_command(file.as_deref(), &resolve_options(&options)?)
        }
    }
}

/// Execute the spell command.
fn spell_command(number: &str, options: &WordifyOptions) -> Result<()> {
    println!("{}", wordify(number, options)?);
    Ok(())
}

/// Execute the explain command.
fn explain_command(number: &str, options: &WordifyOptions) -> Result<()> {
    let result = wordify_detailed(number, options)?;
    println!("{}", result.render_tree());
    Ok(())
}

/// Execute the batch command.
fn batch_command(file: Option<&Path>, options: &WordifyOptions) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (total, failed) = spell_lines(reader, &mut out, options)?;
    out.flush()?;

    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}

/// Spell out each non-blank line, writing `number<TAB>words`.
///
/// Returns `(total, failed)`. Failures are reported on stderr and do not
/// stop the batch.
pub fn spell_lines(
    reader: impl BufRead,
    out: &mut impl Write,
    options: &WordifyOptions,
) -> Result<(usize, usize)> {
    let mut total = 0;
    let mut failed = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = line.trim();
        if number.is_empty() {
            continue;
        }
        total += 1;

        match wordify(number, options) {
            Ok(words) => writeln!(out, "{number}\t{words}")?,
            Err(e) => {
                failed += 1;
                eprintln!(
                    "{} line {}: {e}",
                    style("skipped").yellow().bold(),
                    index + 1
                );
            }
        }
    }

    tracing::debug!(total, failed, "Batch finished");
    Ok((total, failed))
}

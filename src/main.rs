//! Caesar Entropy - CLI
//!
//! Cracks rotation ciphers by ranking every rotation by letter or bigram entropy.

use anyhow::{Result, bail};
use caesar_entropy::{
    commands::{CrackConfig, analyze_text, crack_messages, encode_text},
    output::{print_analysis_result, print_crack_result, print_records},
};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "caesar_entropy",
    about = "Crack Caesar ciphers by ranking every rotation by English letter entropy",
    version,
    author
)]
#[command(long_about = "
Tries all 25 rotations of each ciphertext and ranks the candidate plaintexts by how
closely their letter (or letter-pair) distribution matches English. Lower entropy is
more English-like. Short ciphertexts give low-confidence rankings.

EXAMPLES:
    caesar_entropy crack Ohkwzvo -n 6
    caesar_entropy crack --bigrams --strip 'Drsc sc kx ohkwzvo'
    cat messages.txt | caesar_entropy crack --plain
    caesar_entropy encode 'Example' -r 10
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate plaintexts for each ciphertext (default, reads stdin)
    Crack {
        /// Ciphertexts to crack; one per stdin line if omitted
        messages: Vec<String>,

        /// Number of candidates to show per ciphertext
        #[arg(
            short = 'n',
            long = "return",
            default_value = "1",
            value_parser = clap::value_parser!(u8).range(1..=25)
        )]
        return_count: u8,

        /// Remove whitespace before deciphering
        #[arg(short, long)]
        strip: bool,

        /// Score letter pairs instead of single letters
        #[arg(short, long)]
        bigrams: bool,

        /// Tab-separated records instead of tables
        #[arg(short, long)]
        plain: bool,
    },

    /// Report the entropy of a text without rotating it
    Analyze {
        /// Text to analyze
        text: String,
    },

    /// Encipher a plaintext with a rotation
    Encode {
        /// Plaintext to encipher
        text: String,

        /// Rotation to apply
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(i64).range(1..=25)
        )]
        rotation: i64,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to cracking stdin if no command given
    let command = cli.command.unwrap_or(Commands::Crack {
        messages: Vec::new(),
        return_count: 1,
        strip: false,
        bigrams: false,
        plain: false,
    });

    match command {
        Commands::Crack {
            messages,
            return_count,
            strip,
            bigrams,
            plain,
        } => run_crack_command(messages, return_count, strip, bigrams, plain),
        Commands::Analyze { text } => {
            print_analysis_result(&analyze_text(&text));
            Ok(())
        }
        Commands::Encode { text, rotation } => {
            println!("{}", encode_text(&text, rotation)?);
            Ok(())
        }
    }
}

fn run_crack_command(
    messages: Vec<String>,
    return_count: u8,
    strip: bool,
    bigrams: bool,
    plain: bool,
) -> Result<()> {
    let messages = if messages.is_empty() {
        read_stdin_messages()?
    } else {
        messages
    };

    let mut config = CrackConfig::new(messages);
    config.return_count = usize::from(return_count);
    config.strip = strip;
    config.bigrams = bigrams;

    let result = crack_messages(&config)?;

    if plain {
        print_records(&result);
    } else {
        print_crack_result(&result);
    }
    Ok(())
}

/// Read one message per non-empty stdin line
fn read_stdin_messages() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no ciphertext given: pass messages as arguments or pipe them on stdin");
    }

    let mut messages = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            messages.push(line);
        }
    }

    tracing::debug!(count = messages.len(), "read messages from stdin");
    Ok(messages)
}

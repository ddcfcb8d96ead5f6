mod debug_report;

use anyhow::Context as _;
use clap::{ArgAction, ArgGroup, Parser};
use palaver::{Responder, Session, SessionOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Rule-based conversational responder.
///
/// Without a message, starts an interactive session on stdin/stdout (type
/// 'bye', 'goodbye', 'exit' or 'quit' to leave). With a message, prints a
/// single reply.
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about, long_about = None)]
#[command(group(ArgGroup::new("input").args(["words", "message"])))]
struct Cli {
    /// Message to answer once, instead of starting a session.
    #[arg(value_name = "MESSAGE")]
    words: Vec<String>,

    /// Message to answer once (alternative to the positional form).
    #[arg(short, long, value_name = "TEXT", conflicts_with = "words")]
    message: Option<String>,

    /// Seed for response selection, for reproducible output.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print how a one-shot reply was matched (requires a message).
    #[arg(long, requires = "input")]
    explain: bool,

    /// Force ANSI color in the --explain report.
    #[arg(long, conflicts_with = "no_color", requires = "explain")]
    color: bool,

    /// Disable ANSI color in the --explain report.
    #[arg(long, requires = "explain")]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("parsed CLI arguments: {:?}", cli);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let responder = Responder::default();

    let message = cli.message.clone().or_else(|| (!cli.words.is_empty()).then(|| cli.words.join(" ")));
    match message {
        Some(text) => {
            let reply = responder.reply_with(&text, &mut rng);
            if cli.explain {
                let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
                debug_report::print_reply(&responder, &reply, color);
            } else {
                println!("{}", reply.response);
            }
        }
        None => {
            let session = Session::new(&responder, SessionOptions::default());
            session.run_with(io::stdin().lock(), io::stdout().lock(), &mut rng).context("interactive session failed")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder().with_env_filter(filter).with_writer(io::stderr).with_target(false).compact().init();
}

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

use chess_position::board::{MoveRequest, Position, START_FEN};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play moves against a chess position from stdin", long_about = None)]
struct Args {
    /// Starting position
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let args = Args::parse();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(args.log_level);
    }

    let mut position = match Position::from_fen(&args.fen) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("Invalid FEN '{}': {err}", args.fen);
            std::process::exit(1);
        }
    };

    println!("{position}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        match line.parse::<MoveRequest>() {
            Ok(request) => match position.play_request(&request) {
                Ok(_) => println!("{position}"),
                Err(err) => println!("Illegal move: {err}"),
            },
            Err(err) => println!("Could not read move: {err}"),
        }
        let _ = stdout.flush();
    }
}

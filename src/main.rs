use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use chess_match::chess_errors::ChessError;
use chess_match::game_match::match_config::MatchConfig;
use chess_match::game_match::match_events::MatchEvent;
use chess_match::game_match::match_machine::ChessMatch;
use chess_match::game_match::match_session::MatchSession;
use chess_match::utils::move_notation::{describe_history, describe_move};
use chess_match::utils::render_board::render_snapshot;
use env_logger::Env;
use log::{error, info};

const HELP: &str = "moves as e2e4 or e7e8q | board | history | fen | help | quit";

fn main() {
    let env = Env::default().filter_or("CHESS_MATCH_LOG", "info");
    env_logger::Builder::from_env(env).init();

    if let Err(err) = run() {
        error!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChessError> {
    let cfg_path: Option<PathBuf> = std::env::var_os("CHESS_MATCH_CONFIG").map(PathBuf::from);
    let config = MatchConfig::load(cfg_path.as_deref())?;
    info!(
        "starting local match, {}s per side, +{}s increment",
        config.initial_clock_seconds, config.increment_seconds
    );

    let game = ChessMatch::with_config(config)?;
    let mut session = MatchSession::start(game);
    session.subscribe(|event: &MatchEvent| {
        if let Some(record) = event.applied_move() {
            println!("{}. {} ({})", event.sequence, describe_move(record), event.status);
        } else {
            println!("{} forfeits on time", event.active_player);
        }
    });

    println!("{}", render_snapshot(&session.snapshot()));
    println!("{HELP}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => println!("{}", render_snapshot(&session.snapshot())),
            "history" => {
                for entry in describe_history(&session.snapshot().move_history) {
                    println!("{entry}");
                }
            }
            "fen" => println!("{}", session.with_match(|game| game.to_fen())),
            text => match session.request_move_lan(text) {
                Ok(_) => println!("{}", render_snapshot(&session.snapshot())),
                Err(err) => println!("{err}"),
            },
        }
        io::stdout().flush().ok();

        if session.snapshot().status.is_terminal() {
            println!("{}", render_snapshot(&session.snapshot()));
            break;
        }
    }

    session.stop();
    Ok(())
}

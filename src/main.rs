use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::{Board, Player},
    rules::{self, GameState},
    solver::Solver,
    EngineError, COLUMNS,
};

mod config;
use config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // keep log lines off stdout, where the board is drawn
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;
    info!(
        depth = config.depth,
        first = ?config.first,
        parallel = config.parallel,
        "configuration loaded"
    );

    let (mut board, mut turn) = match &config.moves {
        Some(moves) => {
            let board = Board::from_moves(moves, Player::Human)
                .with_context(|| format!("could not replay moves '{}'", moves))?;
            let turn = if moves.len() % 2 == 0 {
                Player::Human
            } else {
                Player::Computer
            };
            (board, turn)
        }
        None => (Board::new(), config.first.choose()),
    };

    println!("Welcome to Connect 4\n");
    match turn {
        Player::Human => println!("You start."),
        Player::Computer => println!("Computer starts."),
    }

    let stdin = stdin();

    // game loop
    loop {
        board.display().context("failed to draw board")?;

        match rules::game_state(&board) {
            GameState::Playing => {}
            GameState::Won(Player::Human) => {
                println!("Congratulations! You win!");
                break;
            }
            GameState::Won(Player::Computer) => {
                println!("The computer wins! You lose.");
                break;
            }
            GameState::Draw => {
                println!("It's a tie!");
                break;
            }
        }

        let column = match turn {
            Player::Computer => computer_move(&board, &config)?,
            Player::Human => {
                print!("Enter your move (0-{}): ", COLUMNS - 1);
                stdout().flush()?;

                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    // stdin closed
                    println!();
                    break;
                }
                match input_str.trim().parse::<usize>() {
                    Err(_) => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                    Ok(column) => column,
                }
            }
        };

        if let Err(err) = rules::apply_move(&mut board, column, turn) {
            println!("{}", err);
            // try the move again
            continue;
        }
        debug!(player = ?turn, column, "move played");
        turn = turn.opponent();
    }
    Ok(())
}

/// Searches for the computer's move, showing progress while it thinks
fn computer_move(board: &Board, config: &Config) -> Result<usize> {
    let mut solver = Solver::new(Player::Computer);

    let result = if config.parallel {
        let progress = ProgressBar::new(rules::legal_moves(board).len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Computer is thinking: {bar:20.cyan/blue} {pos}/{len} moves")
                .progress_chars("█▓▒░  "),
        );
        let result = solver.solve_parallel(board, config.depth, Some(&progress));
        progress.finish_and_clear();
        result
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Computer is thinking...");
        spinner.enable_steady_tick(100);
        let result = solver.solve(board, config.depth);
        spinner.finish_and_clear();
        result
    };
    let result = result?;
    let column = result.column.ok_or(EngineError::NoLegalMoves)?;

    println!(
        "Computer plays column {} (score {}, {} positions searched)",
        column, result.score, solver.node_count
    );
    Ok(column)
}

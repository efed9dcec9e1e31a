//! Tic-Tac-Toe command - Query the solver or play against it

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::warn;

use crate::{
    cli::output::{format_board, print_kv, print_section},
    tictactoe::{Board, Game, GameOutcome, Move, Player, Solver},
};

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
pub struct TicTacToeArgs {
    #[command(subcommand)]
    pub command: TicTacToeCommand,
}

#[derive(Subcommand, Debug)]
pub enum TicTacToeCommand {
    /// Show the optimal move and value for a position
    Best {
        /// Board as nine cells in row-major order, e.g. "XX.|OO.|..."
        board: String,
    },

    /// Let the solver play both sides from the empty board
    SelfPlay,

    /// Play against the solver on stdin
    Play {
        /// Which mark you play (X always moves first)
        #[arg(long, value_enum, default_value = "x")]
        human: Side,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

pub fn execute(args: TicTacToeArgs) -> Result<()> {
    let mut solver = Solver::new();
    match args.command {
        TicTacToeCommand::Best { board } => best(&board, &mut solver),
        TicTacToeCommand::SelfPlay => self_play(&mut solver),
        TicTacToeCommand::Play { human } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let outcome = play_interactive(stdin.lock(), stdout.lock(), human.into(), &mut solver)?;
            println!("{}", describe_outcome(outcome));
            Ok(())
        }
    }
}

fn best(board_str: &str, solver: &mut Solver) -> Result<()> {
    let board = Board::from_string(board_str)?;
    if !board.is_valid() {
        warn!("{} cannot arise from legal play", board.encode());
    }

    print_section("Position");
    print!("{}", format_board(&board));

    if let Some(outcome) = GameOutcome::of(&board) {
        println!("\nGame over: {}", describe_outcome(outcome));
        return Ok(());
    }

    let evaluation = solver.evaluate(&board);
    println!();
    print_kv("To move", &board.player().to_string());
    print_kv("Value", &describe_value(evaluation.value));
    if let Some(mv) = evaluation.best_move {
        print_kv("Best move", &mv.to_string());
    }

    println!("\nMove values:");
    for (mv, value) in solver.evaluate_moves(&board) {
        println!("  {mv}: {}", describe_value(value));
    }
    Ok(())
}

fn self_play(solver: &mut Solver) -> Result<()> {
    let game = Game::self_play(solver)?;
    let states = game.state_sequence()?;

    for (turn, state) in game.turns.iter().zip(states.iter().skip(1)) {
        println!("{} plays {}", turn.player, turn.mv);
        println!("{}\n", format_board(state));
    }

    let outcome = game
        .outcome
        .ok_or_else(|| anyhow!("self-play stopped before the game ended"))?;
    println!("{}", describe_outcome(outcome));
    Ok(())
}

/// Parse `row col` (also `row,col`) into a move
pub fn parse_move(input: &str) -> Result<Move> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        bail!("expected `row col`, got '{}'", input.trim());
    };
    Ok(Move::new(row.parse()?, col.parse()?)?)
}

/// Play a full game: the human's moves come from `input`, the solver answers.
pub fn play_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    human: Player,
    solver: &mut Solver,
) -> Result<GameOutcome> {
    let mut game = Game::new();

    while game.outcome.is_none() {
        let board = game.current_state()?;

        if board.player() != human {
            let mv = solver
                .best_move(&board)
                .ok_or_else(|| anyhow!("solver found no move on a running game"))?;
            writeln!(output, "Computer ({}) plays {mv}", board.player())?;
            game.play(mv)?;
            continue;
        }

        write!(output, "{}Your move ({human}), as `row col`: ", format_board(&board))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }

        let attempt = parse_move(&line).and_then(|mv| game.play(mv).map_err(Into::into));
        if let Err(e) = attempt {
            writeln!(output, "{e}")?;
        }
    }

    let board = game.current_state()?;
    writeln!(output, "{}", format_board(&board))?;
    game.outcome
        .ok_or_else(|| anyhow!("game loop ended without an outcome"))
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "X wins".to_string(),
        -1 => "O wins".to_string(),
        0 => "draw".to_string(),
        other => format!("{other}"),
    }
}

fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "Draw".to_string(),
    }
}

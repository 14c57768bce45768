//! Console front end: play Indigo against the computer.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use indigo::{
    Command, ComputerStrategy, Game, GameEvent, GameState, Move, MoveSource, Observer, Side,
    TurnView, parse_yes_no,
};
use rand::RngCore;
use tracing::{Level, info, warn};

/// Play the Indigo card game against the computer.
#[derive(Debug, Parser)]
#[command(name = "indigo", version, about)]
struct Args {
    /// Seed for the shuffle and the computer's choices. Defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Prints events the way the game has always looked on the console.
///
/// The first write error is kept and nothing more is written.
struct ConsoleObserver<W> {
    output: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    const fn new(output: W) -> Self {
        Self {
            output,
            error: None,
        }
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_event(&mut self, event: &GameEvent) {
        // The human knows what they played.
        let own_play = matches!(
            event,
            GameEvent::CardPlayed {
                side: Side::Player,
                ..
            }
        );
        if own_play || self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.output, "{event}") {
            self.error = Some(err);
        }
    }
}

/// Reads the human's answers, prompting on `output`.
///
/// A failed prompt is kept in `error` and ends the game like `exit`.
struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// Prints `question` and reads one line, or `None` once input is closed
    /// or unreadable.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(err) => {
                warn!(%err, "failed to read from stdin");
                Ok(None)
            }
        }
    }

    fn ask_play_first(&mut self) -> io::Result<Option<Side>> {
        loop {
            let Some(line) = self.prompt("Play first?")? else {
                return Ok(None);
            };
            if let Some(first) = parse_yes_no(&line) {
                return Ok(Some(if first { Side::Player } else { Side::Computer }));
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    fn choose_move(&mut self, turn: &TurnView<'_>, _rng: &mut dyn RngCore) -> Move {
        let question = format!("Choose a card to play (1-{}):", turn.hand.len());
        loop {
            let line = match self.prompt(&question) {
                Ok(Some(line)) => line,
                Ok(None) => return Move::Exit,
                Err(err) => {
                    self.error = Some(err);
                    return Move::Exit;
                }
            };

            match Command::parse(&line) {
                Some(Command::Exit) => return Move::Exit,
                Some(command) => {
                    if let Some(index) = command.card_index(turn.hand.len()) {
                        return Move::Play(index);
                    }
                }
                None => {}
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed, "starting game");

    writeln!(io::stdout(), "Indigo Card Game").context("writing to stdout")?;

    let mut human = ConsolePlayer::new(io::stdin().lock(), io::stdout());
    let Some(first) = human.ask_play_first().context("writing to stdout")? else {
        return Ok(());
    };

    let mut game = Game::new(first, seed);
    let mut observer = ConsoleObserver::new(io::stdout());
    let state = game.run(&mut human, &mut ComputerStrategy::new(), &mut observer)?;

    if let Some(err) = observer.error.or(human.error) {
        return Err(err).context("writing to stdout");
    }
    if state == GameState::Aborted {
        info!("player left the game");
    }

    Ok(())
}

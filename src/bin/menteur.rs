//! Terminal front end: seats humans and AIs and plays one match on
//! stdin/stdout.
//!
//! `MENTEUR_SEED` fixes the seed; `RUST_LOG` sets the log level (logs go to
//! stderr).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use menteur::{
    AiPlayer, GameRng, HumanPlayer, InputProvider, MatchController, MenteurError, PlayerColor,
    Result, RuleSet, SeatSpec, Strategy, TextRenderer, TurnEvent, TABLE_SEATS,
};

const STARTING_BALANCE: i64 = 100;

/// Reads answers from standard input, one per line.
struct StdinInput;

impl InputProvider for StdinInput {
    fn prompt(&mut self, text: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let line = read_line(&format!("{} [{}-{}] ", text, min, max))?;
            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => println!("Please answer with a number from {} to {}.", min, max),
            }
        }
    }
}

/// Print `text` and read one line. End of input cancels.
fn read_line(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush().map_err(|_| MenteurError::PromptCancelled)?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => Err(MenteurError::PromptCancelled),
        Ok(_) => Ok(line.trim_end().to_string()),
    }
}

fn seed_from_env() -> u64 {
    std::env::var("MENTEUR_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
}

fn seat_humans(input: &mut StdinInput) -> Result<Vec<SeatSpec>> {
    let humans = input.prompt("How many human players?", 0, TABLE_SEATS as i64)? as usize;
    let mut colors: Vec<PlayerColor> = PlayerColor::ALL.to_vec();
    let mut seats = Vec::with_capacity(TABLE_SEATS);

    for n in 1..=humans {
        let mut name = read_line(&format!("Name of player {}: ", n))?;
        if name.is_empty() {
            name = format!("Player_{}", n);
        }

        let menu: Vec<String> = colors
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}) {}", i + 1, c))
            .collect();
        let pick = input.prompt(&format!("Color ({})", menu.join(", ")), 1, colors.len() as i64)?;
        let color = colors.remove(pick as usize - 1);

        let spec = SeatSpec::new(name, color, Strategy::Human(HumanPlayer::new(StdinInput)))
            .with_balance(STARTING_BALANCE);
        seats.push(spec);
    }
    Ok(seats)
}

fn fill_with_ai(seats: &mut Vec<SeatSpec>, rng: &mut GameRng) {
    let free: Vec<PlayerColor> = PlayerColor::ALL
        .into_iter()
        .filter(|c| !seats.iter().any(|s| s.color == *c))
        .collect();
    let mut colors = free.into_iter();
    let mut n = 1;
    while seats.len() < TABLE_SEATS {
        let color = colors.next().unwrap_or(PlayerColor::Black);
        let strategy = Strategy::Ai(AiPlayer::new(rng.fork()));
        seats.push(SeatSpec::new(format!("AI_{}", n), color, strategy).with_balance(STARTING_BALANCE));
        n += 1;
    }
}

fn take_bets(ctrl: &mut MatchController, input: &mut StdinInput) -> Result<()> {
    let humans: Vec<_> = ctrl
        .active_players()
        .iter()
        .filter(|p| p.is_human())
        .map(|p| (p.id(), p.name().to_string(), p.balance()))
        .collect();

    for (id, name, balance) in humans {
        let amount = input.prompt(&format!("{}, your bet (0 to skip)?", name), 0, balance)?;
        if amount > 0 {
            ctrl.place_bet(id, amount)?;
        }
    }
    Ok(())
}

fn describe(ctrl: &MatchController, event: &TurnEvent) -> String {
    let name = |id| ctrl.player(id).map_or("?", |p| p.name()).to_string();
    match event {
        TurnEvent::RoundStarted { round, master_rank, players } => {
            format!("Round {}: {} players, master rank is {}.", round, players, master_rank)
        }
        TurnEvent::Played { player, count, cards_left } => format!(
            "{} plays {} card(s), {} left in hand.",
            name(*player),
            count,
            cards_left
        ),
        TurnEvent::Declined { player, accused } => {
            format!("{} lets {}'s last play stand.", name(*player), name(*accused))
        }
        TurnEvent::Challenged(report) => {
            let cards: Vec<String> = report.revealed.iter().map(ToString::to_string).collect();
            let verdict = if report.truthful { "told the truth" } else { "lied" };
            let fate = match report.roll.remaining_life() {
                0 => "is eliminated".to_string(),
                life => format!("drops to {} life", life),
            };
            format!(
                "{} calls {}: [{}]. {} {}, {} {}.",
                name(report.accuser),
                name(report.accused),
                cards.join(" "),
                name(report.accused),
                verdict,
                name(report.roller),
                fate
            )
        }
        TurnEvent::RoundEnded { round, reason } => format!("Round {} over ({:?}).", round, reason),
        TurnEvent::MatchEnded { winner, pot } => {
            format!("{} wins the match and a pot of {}!", name(*winner), pot)
        }
    }
}

fn play() -> Result<()> {
    let seed = seed_from_env();
    let mut input = StdinInput;
    let mut rng = GameRng::new(seed);

    let mut seats = seat_humans(&mut input)?;
    fill_with_ai(&mut seats, &mut rng);

    let mut ctrl =
        MatchController::new(RuleSet::default(), seats, seed)?.with_renderer(TextRenderer);
    info!(seed, "starting match");
    take_bets(&mut ctrl, &mut input)?;

    loop {
        let event = match ctrl.step() {
            Ok(event) => event,
            Err(err) if err.is_recoverable() => {
                // The round was halted; the next step deals again.
                warn!(error = %err, "round abandoned");
                println!("Round abandoned: {}.", err);
                continue;
            }
            Err(err) => return Err(err),
        };
        println!("{}", describe(&ctrl, &event));
        if let TurnEvent::MatchEnded { .. } = event {
            return Ok(());
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match play() {
        Ok(()) => ExitCode::SUCCESS,
        Err(MenteurError::PromptCancelled) => {
            println!();
            println!("Game abandoned.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

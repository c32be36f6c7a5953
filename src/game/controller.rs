//! Turn and round state machine.
//!
//! ```text
//! RoundStart -> PlayerTurn -> PlayerTurn -> ... -> RoundEnd -> RoundStart
//!                  |  ^                                 |
//!                  v  |                                 v
//!            challenge resolution                   MatchEnd
//! ```
//!
//! Each call to [`MatchController::step`] performs exactly one transition
//! and reports it as a [`TurnEvent`].
//!
//! ## Turn order
//!
//! The active players are kept in seating order and `cursor` points at the
//! player whose turn it is, wrapping around. Before an eliminated player is
//! removed the cursor is re-anchored on the id of whoever is due next, so
//! removal never skips or repeats a turn.
//!
//! ## Final call
//!
//! A play that empties its author's hand still gets answered: the next
//! player may challenge it or let it stand, and the round ends right after.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::event::{ChallengeReport, MatchOutcome, Phase, RoundEndReason, TurnEvent};
use super::life::life_chance_roll;
use crate::cards::{Card, CardCollection, Rank};
use crate::core::{GameRng, MenteurError, PlayerId, Result, RuleSet};
use crate::dealer::Dealer;
use crate::players::{Claim, Player, SeatSpec};
use crate::render::Renderer;

/// Runs one match from the first deal to the last player standing.
pub struct MatchController {
    rules: RuleSet,
    dealer: Dealer,
    rng: GameRng,
    active: Vec<Player>,
    eliminated: Vec<Player>,
    cursor: usize,
    stack: CardCollection,
    pool: CardCollection,
    /// Most recent play, until it is answered.
    last_play: Option<Claim>,
    /// The last play emptied its author's hand.
    final_call: bool,
    phase: Phase,
    pending_end: Option<RoundEndReason>,
    round: u32,
    turns: u64,
    winner: Option<PlayerId>,
    pot: i64,
    renderer: Option<Box<dyn Renderer>>,
}

impl std::fmt::Debug for MatchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchController")
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("active", &self.active.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl MatchController {
    /// Seat `seats` in order and prepare the first round.
    ///
    /// Seat `i` gets `PlayerId(i)`. The dealer and the rules draw from
    /// separate streams derived from `seed`.
    pub fn new(rules: RuleSet, seats: Vec<SeatSpec>, seed: u64) -> Result<Self> {
        if !rules.accepts_player_count(seats.len()) {
            return Err(MenteurError::config(format!(
                "{} players seated, rules allow {} to {}",
                seats.len(),
                rules.min_players(),
                rules.max_players()
            )));
        }

        let root = GameRng::new(seed);
        let active = seats
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                let id = u8::try_from(i)
                    .map_err(|_| MenteurError::config(format!("seat {} has no player id", i)))?;
                Ok(Player::new(PlayerId::new(id), spec, rules.initial_life()))
            })
            .collect::<Result<Vec<Player>>>()?;

        info!(players = active.len(), seed, "match created");

        Ok(Self {
            dealer: Dealer::new(root.for_context("deal")),
            rng: root.for_context("rules"),
            rules,
            active,
            eliminated: Vec::new(),
            cursor: 0,
            stack: CardCollection::new(),
            pool: CardCollection::new(),
            last_play: None,
            final_call: false,
            phase: Phase::RoundStart,
            pending_end: None,
            round: 0,
            turns: 0,
            winner: None,
            pot: 0,
            renderer: None,
        })
    }

    /// Render hands and revealed plays through `renderer`.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds dealt so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub fn master_rank(&self) -> Rank {
        self.rules.master_rank()
    }

    /// Players still in the match, in turn order.
    #[must_use]
    pub fn active_players(&self) -> &[Player] {
        &self.active
    }

    /// Eliminated players, first out first.
    #[must_use]
    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.active.get(self.cursor)
    }

    /// Look a player up by id, active or not.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.active
            .iter()
            .chain(self.eliminated.iter())
            .find(|p| p.id() == id)
    }

    #[must_use]
    pub fn stack(&self) -> &CardCollection {
        &self.stack
    }

    #[must_use]
    pub fn pool(&self) -> &CardCollection {
        &self.pool
    }

    /// The play that is open to a challenge, if any.
    #[must_use]
    pub fn last_play(&self) -> Option<&Claim> {
        self.last_play.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::MatchEnd
    }

    /// Summary of the match once it is over.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let winner = self.winner?;
        Some(MatchOutcome {
            winner,
            rounds: self.round,
            turns: self.turns,
            eliminated: self.eliminated.iter().map(Player::id).collect(),
            pot: self.pot,
        })
    }

    // === Stakes ===

    /// Stake `amount` of a player's balance on the match.
    pub fn place_bet(&mut self, player: PlayerId, amount: i64) -> Result<()> {
        self.ensure_running()?;
        let seat = self
            .active
            .iter_mut()
            .find(|p| p.id() == player)
            .ok_or_else(|| MenteurError::illegal_state(format!("{} is not in the match", player)))?;
        seat.place_bet(amount)
    }

    // === State machine ===

    /// Perform one transition.
    ///
    /// Errors from a player's decision halt the current round: the phase
    /// moves to `RoundEnd` and the next step redeals. Stepping a finished
    /// match is an `IllegalState` error.
    pub fn step(&mut self) -> Result<TurnEvent> {
        match self.phase {
            Phase::MatchEnd => Err(MenteurError::illegal_state("the match is over")),
            Phase::RoundStart => self.start_round(),
            Phase::PlayerTurn => self.play_turn().map_err(|err| {
                warn!(round = self.round, error = %err, "round halted");
                self.close_round(RoundEndReason::Halted);
                err
            }),
            Phase::RoundEnd => self.finish_round(),
        }
    }

    /// Step until the match ends.
    pub fn run(&mut self) -> Result<MatchOutcome> {
        loop {
            if let TurnEvent::MatchEnded { .. } = self.step()? {
                return self
                    .outcome()
                    .ok_or_else(|| MenteurError::illegal_state("match ended without a winner"));
            }
        }
    }

    /// Check that no card was lost or duplicated and that the turn cursor
    /// points at an active player.
    pub fn audit(&self) -> Result<()> {
        if !self.active.is_empty() && self.cursor >= self.active.len() {
            return Err(MenteurError::illegal_state(format!(
                "cursor {} outside {} active players",
                self.cursor,
                self.active.len()
            )));
        }
        if let Some(p) = self.active.iter().find(|p| !p.is_alive()) {
            return Err(MenteurError::illegal_state(format!("{} is active with no life", p.id())));
        }
        if self.round == 0 {
            return Ok(());
        }

        let cards: Vec<&Card> = self
            .active
            .iter()
            .chain(self.eliminated.iter())
            .flat_map(|p| p.hand().iter())
            .chain(self.stack.iter())
            .chain(self.pool.iter())
            .collect();

        let expected = Dealer::deck_size(&self.rules);
        if cards.len() != expected {
            return Err(MenteurError::illegal_state(format!(
                "{} cards in play, deck has {}",
                cards.len(),
                expected
            )));
        }

        let ids: FxHashSet<_> = cards.iter().map(|c| c.id()).collect();
        if ids.len() != cards.len() {
            return Err(MenteurError::illegal_state("a card appears twice"));
        }
        Ok(())
    }

    fn ensure_running(&self) -> Result<()> {
        if self.phase == Phase::MatchEnd {
            return Err(MenteurError::illegal_state("the match is over"));
        }
        Ok(())
    }

    fn start_round(&mut self) -> Result<TurnEvent> {
        if self.active.len() < 2 {
            return Err(MenteurError::illegal_state("cannot deal to fewer than two players"));
        }

        let dealt = self.dealer.deal_round(&self.rules, self.active.len())?;
        let master = self.rules.reroll_master_rank(&mut self.rng);

        for (player, hand) in self.active.iter_mut().zip(dealt.hands) {
            player.receive_hand(hand);
        }
        self.pool = dealt.pool;
        self.stack.clear();
        self.last_play = None;
        self.final_call = false;
        self.cursor %= self.active.len();
        self.round += 1;
        self.phase = Phase::PlayerTurn;

        if let Some(renderer) = &self.renderer {
            for player in &self.active {
                let label = format!("{} hand", player.id());
                debug!("{}", renderer.render(&label, player.hand().cards()));
            }
        }
        info!(round = self.round, master = %master, players = self.active.len(), "round started");

        Ok(TurnEvent::RoundStarted {
            round: self.round,
            master_rank: master,
            players: self.active.len(),
        })
    }

    fn play_turn(&mut self) -> Result<TurnEvent> {
        let current = self.active[self.cursor].id();

        if let Some(claim) = self.last_play {
            let accuse = self.active[self.cursor].choose_challenge(&self.rules, &claim)?;
            if accuse {
                let report = self.resolve_challenge(claim)?;
                self.turns += 1;
                if self.active.len() < 2 {
                    self.close_round(RoundEndReason::TooFewPlayers);
                } else if self.final_call {
                    self.close_round(RoundEndReason::HandEmptied(claim.player));
                }
                return Ok(TurnEvent::Challenged(report));
            }
            if self.final_call {
                self.last_play = None;
                self.turns += 1;
                debug!(player = %current, accused = %claim.player, "final play let stand");
                self.close_round(RoundEndReason::HandEmptied(claim.player));
                return Ok(TurnEvent::Declined {
                    player: current,
                    accused: claim.player,
                });
            }
        }

        let selection = self.active[self.cursor].choose_play(&self.rules)?;
        let played = self.active[self.cursor].commit_play(&selection, &self.rules)?;
        let count = played.len();
        self.stack.extend(played);

        let cards_left = self.active[self.cursor].hand().len();
        self.last_play = Some(Claim {
            player: current,
            count,
            master: self.rules.master_rank(),
        });
        self.final_call = cards_left == 0;
        self.cursor = (self.cursor + 1) % self.active.len();
        self.turns += 1;

        debug!(player = %current, count, cards_left, "played");
        Ok(TurnEvent::Played {
            player: current,
            count,
            cards_left,
        })
    }

    /// Reveal the accused play and roll for whoever was wrong.
    ///
    /// Fails without touching anything when the roller is not seated.
    fn resolve_challenge(&mut self, claim: Claim) -> Result<ChallengeReport> {
        let accuser = self.active[self.cursor].id();
        let revealed = self.stack.peek_last_play(claim.count).to_vec();
        let wildcard = self.rules.wildcard();
        let truthful = revealed.iter().all(|c| c.satisfies(claim.master, wildcard));
        let roller = if truthful { accuser } else { claim.player };
        let index = self
            .active
            .iter()
            .position(|p| p.id() == roller)
            .ok_or_else(|| MenteurError::illegal_state(format!("{} is not in the match", roller)))?;

        if let Some(renderer) = &self.renderer {
            let label = format!("{} revealed", claim.player);
            info!("{}", renderer.render(&label, &revealed));
        }

        // Turn passes to whoever sits after the accuser.
        let next = self.active[(self.cursor + 1) % self.active.len()].id();

        let roll = life_chance_roll(self.active[index].life(), &mut self.rng);
        self.active[index].set_life(roll.remaining_life());
        self.last_play = None;

        info!(
            accuser = %accuser,
            accused = %claim.player,
            truthful,
            roller = %roller,
            life = roll.remaining_life(),
            "challenge resolved"
        );

        if roll.is_eliminated() {
            let mut out = self.active.remove(index);
            self.pool.extend(out.surrender_hand());
            info!(player = %out.id(), remaining = self.active.len(), "player eliminated");
            self.eliminated.push(out);
        }
        self.cursor = self.active.iter().position(|p| p.id() == next).unwrap_or(0);

        Ok(ChallengeReport {
            accuser,
            accused: claim.player,
            revealed,
            truthful,
            roller,
            roll,
        })
    }

    fn close_round(&mut self, reason: RoundEndReason) {
        self.phase = Phase::RoundEnd;
        self.pending_end = Some(reason);
        self.final_call = false;
    }

    fn finish_round(&mut self) -> Result<TurnEvent> {
        let reason = self.pending_end.take().unwrap_or(RoundEndReason::Halted);
        info!(round = self.round, ?reason, "round ended");

        match self.active.as_slice() {
            [] => Err(MenteurError::illegal_state("no players left")),
            [last] => {
                let winner = last.id();
                self.pot = self.settle_bets(winner);
                self.winner = Some(winner);
                self.phase = Phase::MatchEnd;
                info!(winner = %winner, rounds = self.round, pot = self.pot, "match over");
                Ok(TurnEvent::MatchEnded { winner, pot: self.pot })
            }
            _ => {
                self.phase = Phase::RoundStart;
                Ok(TurnEvent::RoundEnded {
                    round: self.round,
                    reason,
                })
            }
        }
    }

    /// Pay every outstanding bet to `winner`.
    fn settle_bets(&mut self, winner: PlayerId) -> i64 {
        let pot: i64 = self
            .active
            .iter_mut()
            .chain(self.eliminated.iter_mut())
            .map(Player::take_bet)
            .sum();
        if let Some(p) = self.active.iter_mut().find(|p| p.id() == winner) {
            p.credit(pot);
        }
        pot
    }
}

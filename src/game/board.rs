//! file: board.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:40:57 Saturday
//! brief: turn-taking state machine for the match game
//!
//! Nothing here knows about time. Every operation that starts a transition
//! returns the `Flip` to play, and the player reports back through
//! `flip_halfway` and `flip_complete`.

use std::mem;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{Card, CardStatus, ConcealReason, Deck, Flip, Outcome, Phase};

pub const MOVE_BUDGET: u32 = 15;

pub struct MatchGame {
    deck: Deck,
    moves_remaining: u32,
    open_selection: Vec<usize>,
    matched_count: usize,
    phase: Phase,
    halfway_done: bool,
    outcome: Option<Outcome>,
    rng: StdRng,
}

impl Default for MatchGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchGame {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let deck = Deck::new(&mut rng);
        let mut game = Self {
            deck,
            moves_remaining: MOVE_BUDGET,
            open_selection: Vec::with_capacity(2),
            matched_count: 0,
            phase: Phase::Idle,
            halfway_done: false,
            outcome: None,
            rng,
        };
        game.initialize();
        game
    }

    /// Starts a fresh round with every card face down.
    pub fn initialize(&mut self) {
        self.reset_board();
        self.deck.cover_all();
    }

    fn reset_board(&mut self) {
        self.deck.reshuffle(&mut self.rng);
        self.matched_count = 0;
        self.moves_remaining = MOVE_BUDGET;
        self.open_selection.clear();
        self.phase = Phase::Idle;
        self.halfway_done = false;
        info!(cards = self.deck.len(), moves = MOVE_BUDGET, "new round");
    }

    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn open_selection(&self) -> &[usize] {
        &self.open_selection
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_input_locked(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The completion signal of the last finished round, handed out once.
    pub fn take_outcome(&mut self) -> Option<Outcome> {
        self.outcome.take()
    }

    pub fn select_card(&mut self, position: usize) -> Option<Flip> {
        if self.is_input_locked() {
            debug!(position, phase = ?self.phase, "input locked, selection dropped");
            return None;
        }
        let Some(card) = self.deck.get_mut(position) else {
            debug!(position, "selection out of range");
            return None;
        };
        if !card.is_selectable() {
            debug!(position, status = ?card.status, "card already face up");
            return None;
        }

        card.status = CardStatus::Open;
        debug!(position, "revealing card");
        Some(self.begin(Phase::Revealing { position }, Flip::reveal(position)))
    }

    fn begin(&mut self, phase: Phase, flip: Flip) -> Flip {
        self.phase = phase;
        self.halfway_done = false;
        flip
    }

    /// Swaps the painted face of the cards in flight. Only the first call per
    /// flip has an effect.
    pub fn flip_halfway(&mut self) {
        if self.halfway_done {
            return;
        }
        match &self.phase {
            Phase::Idle => return,
            Phase::Revealing { position } => {
                if let Some(card) = self.deck.get_mut(*position) {
                    card.face = Some(card.identity);
                }
            }
            Phase::Concealing { targets, .. } => {
                for &position in targets {
                    if let Some(card) = self.deck.get_mut(position) {
                        card.face = None;
                    }
                }
            }
        }
        self.halfway_done = true;
    }

    /// Finishes the flip in flight and returns the next one to play, if any.
    pub fn flip_complete(&mut self) -> Option<Flip> {
        self.flip_halfway();

        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => None,
            Phase::Revealing { position } => {
                self.open_selection.push(position);
                if self.open_selection.len() == 2 {
                    self.on_selection_complete()
                } else {
                    None
                }
            }
            Phase::Concealing {
                targets,
                reason: ConcealReason::Mismatch,
            } => {
                for position in targets {
                    if let Some(card) = self.deck.get_mut(position) {
                        card.status = CardStatus::Hidden;
                    }
                }
                self.open_selection.clear();
                self.check_terminal()
            }
            Phase::Concealing {
                reason: ConcealReason::Reset,
                ..
            } => None,
        }
    }

    fn on_selection_complete(&mut self) -> Option<Flip> {
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        self.judge()
    }

    fn judge(&mut self) -> Option<Flip> {
        let &[first, second] = self.open_selection.as_slice() else {
            return None;
        };
        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };

        if matched {
            for position in [first, second] {
                if let Some(card) = self.deck.get_mut(position) {
                    card.status = CardStatus::Matched;
                }
            }
            self.matched_count += 2;
            self.open_selection.clear();
            debug!(first, second, matched = self.matched_count, "pair matched");
            self.check_terminal()
        } else {
            debug!(first, second, moves = self.moves_remaining, "pair mismatched");
            let targets = vec![first, second];
            let phase = Phase::Concealing {
                targets: targets.clone(),
                reason: ConcealReason::Mismatch,
            };
            Some(self.begin(phase, Flip::conceal(targets)))
        }
    }

    fn check_terminal(&mut self) -> Option<Flip> {
        let outcome = if self.matched_count == self.deck.len() {
            Outcome::Won
        } else if self.moves_remaining == 0 {
            Outcome::Lost
        } else {
            return None;
        };
        info!(
            ?outcome,
            matched = self.matched_count,
            moves = self.moves_remaining,
            "round over"
        );
        self.outcome = Some(outcome);

        let showing = self.deck.face_up_positions();
        self.reset_board();
        if showing.is_empty() {
            return None;
        }
        let phase = Phase::Concealing {
            targets: showing.clone(),
            reason: ConcealReason::Reset,
        };
        Some(self.begin(phase, Flip::conceal(showing)))
    }
}

//! A live game between the player and the AI.
//!
//! `GameSession` is the context object that owns everything about one
//! table: both hands, the running total, whose turn it is, recent plays
//! and the outcome. It hands `Position` snapshots to the move selector
//! and applies the card it returns.
//!
//! Unlike the search, a live play may push the total past the limit.
//! That play ends the game and the other side wins. The losing play is
//! still applied: it updates the total, is recorded in the history and
//! sets the side's last pick.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng, Hand, Position, Side, SideMap, LIMIT};
use crate::search::{Decision, MoveSelector};

use super::config::TableConfig;
use super::draw::{deal_hand, replenish};
use super::error::PlayError;
use super::history::{History, PlayRecord};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Side that won.
    pub winner: Side,
    /// Card whose play reached the limit.
    pub losing_card: Card,
    /// Total after the losing play.
    pub total: u32,
}

/// Result of one applied play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub play: PlayRecord,
    /// The acting hand drew fresh cards after the play.
    pub replenished: bool,
    /// Set when this play ended the game.
    pub outcome: Option<Outcome>,
}

/// One game at the table.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: TableConfig,
    rng: GameRng,
    selector: MoveSelector,
    total: u32,
    hands: SideMap<Hand>,
    turn: Side,
    last_pick: SideMap<Option<Card>>,
    history: History,
    outcome: Option<Outcome>,
    games_started: u32,
}

impl GameSession {
    /// Open a table and deal the first game.
    pub fn new(config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let selector = MoveSelector::new(config.search.clone());
        let history = History::new(config.history_len);
        let turn = config.first_turn;

        let mut session = Self {
            config,
            rng,
            selector,
            total: 0,
            hands: SideMap::default(),
            turn,
            last_pick: SideMap::default(),
            history,
            outcome: None,
            games_started: 0,
        };
        session.reset();
        session
    }

    /// Start a new game: zero total, fresh hands, cleared history.
    ///
    /// The two opening hands are dealt independently, so they may share
    /// ranks.
    pub fn reset(&mut self) {
        self.rng = self.rng.fork();
        let player = deal_hand(&mut self.rng, self.config.hand_size);
        let ai = deal_hand(&mut self.rng, self.config.hand_size);
        self.hands = SideMap::from_pair(ai, player);

        self.total = 0;
        self.turn = self.config.first_turn;
        self.last_pick = SideMap::default();
        self.history.clear();
        self.outcome = None;
        self.games_started += 1;

        log::info!(
            "game {} dealt: player {} / AI {}, {} to move",
            self.games_started,
            self.hands[Side::Player],
            self.hands[Side::Ai],
            self.turn
        );
    }

    /// Play `card` from the player's hand.
    pub fn play(&mut self, card: Card) -> Result<Turn, PlayError> {
        self.apply(Side::Player, card)
    }

    /// Let the AI choose and play its card.
    pub fn play_ai(&mut self) -> Result<(Decision, Turn), PlayError> {
        self.check_turn(Side::Ai)?;
        if self.hands[Side::Ai].is_empty() {
            return Err(PlayError::EmptyHand(Side::Ai));
        }
        let position = self.position();
        let decision = self.selector.choose_for(&position);
        let turn = self.apply(Side::Ai, decision.card)?;
        Ok((decision, turn))
    }

    fn check_turn(&self, side: Side) -> Result<(), PlayError> {
        if self.outcome.is_some() {
            return Err(PlayError::GameOver);
        }
        if self.turn != side {
            return Err(PlayError::NotYourTurn(self.turn));
        }
        Ok(())
    }

    fn apply(&mut self, side: Side, card: Card) -> Result<Turn, PlayError> {
        self.check_turn(side)?;
        if !self.hands[side].remove(card) {
            return Err(PlayError::CardNotInHand(card));
        }

        self.total = self.total.saturating_add(card.value());
        self.last_pick[side] = Some(card);
        let play = PlayRecord {
            side,
            card,
            total: self.total,
        };
        self.history.record(play);

        if self.total >= LIMIT {
            let outcome = Outcome {
                winner: side.opponent(),
                losing_card: card,
                total: self.total,
            };
            log::info!("{} reached {} with {}, {} wins", side, self.total, card, outcome.winner);
            self.outcome = Some(outcome);
            return Ok(Turn {
                play,
                replenished: false,
                outcome: Some(outcome),
            });
        }

        let replenished = replenish(
            &mut self.rng,
            &mut self.hands[side],
            self.config.refill_at,
            self.config.refill_count,
        );
        if replenished {
            log::debug!("{} refilled to {}", side, self.hands[side]);
        }

        self.turn = side.opponent();
        Ok(Turn {
            play,
            replenished,
            outcome: None,
        })
    }

    /// Snapshot of the table for the search engine.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            total: self.total,
            hands: self.hands.clone(),
            to_move: self.turn,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Card most recently played by `side` this game.
    #[must_use]
    pub fn last_pick(&self, side: Side) -> Option<Card> {
        self.last_pick[side]
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pause a front end should take before calling `play_ai`.
    #[must_use]
    pub fn ai_delay(&self) -> Duration {
        self.config.ai_delay()
    }

    /// Statistics from the AI's most recent search.
    #[must_use]
    pub fn search_stats(&self) -> &crate::search::SearchStats {
        self.selector.stats()
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of games dealt at this table, including the current one.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Table with hands set directly, for scripted scenarios.
    #[cfg(test)]
    pub(crate) fn with_hands(config: TableConfig, total: u32, ai: Hand, player: Hand, turn: Side) -> Self {
        let mut session = Self::new(config);
        session.total = total;
        session.hands = SideMap::from_pair(ai, player);
        session.turn = turn;
        session
    }
}

//! One game from setup to the last turn.
//!
//! `GameSession` owns the board, the players and the randomness. Every
//! state change the presentation layer can trigger goes through it:
//!
//! ```
//! use monopoly_core::session::{GameSession, PlayerSetup, PurchaseOutcome, Resolution};
//!
//! let mut game = GameSession::new_game(
//!     vec![PlayerSetup::new("Ada", 1), PlayerSetup::new("Grace", 2)],
//!     42,
//! ).unwrap();
//!
//! let outcome = game.roll_and_resolve(3).unwrap();
//! assert_eq!(outcome.resolution, Resolution::OfferPurchase { price: 60 });
//!
//! let bought = game.resolve_purchase_decision(true).unwrap();
//! assert_eq!(bought, PurchaseOutcome::Bought { position: 4, price: 60 });
//! assert_eq!(game.current_player().0, 2);
//! ```

use tracing::{debug, trace, warn};

use super::outcome::{LandingOutcome, PurchaseOutcome, Resolution, TurnPhase};
use super::setup::{validate_setups, PlayerSetup};
use crate::board::{Board, LandingAction, Owner};
use crate::cards::CardDeck;
use crate::core::{roll, roll_dice, DiceRoll, GameError, GameRng, PlayerId, Result, RulesConfig};
use crate::players::{PlayerState, Players};

/// A running game.
///
/// Cloning is cheap for the board, so a clone can serve as a render snapshot.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: RulesConfig,
    board: Board,
    players: Players,
    phase: TurnPhase,
    pending_purchase: Option<u8>,
    dice_rng: GameRng,
    card_rng: GameRng,
}

impl GameSession {
    /// Start a game with standard rules and a seeded RNG.
    pub fn new_game(setups: impl IntoIterator<Item = PlayerSetup>, seed: u64) -> Result<Self> {
        Self::with_rules(setups, RulesConfig::default(), GameRng::new(seed))
    }

    /// Start a game with custom rules and an injected RNG.
    ///
    /// Dice and cards draw from separate streams derived from `rng`.
    pub fn with_rules(
        setups: impl IntoIterator<Item = PlayerSetup>,
        rules: RulesConfig,
        rng: GameRng,
    ) -> Result<Self> {
        let board = Board::new(&rules);
        Self::with_board(setups, rules, board, rng)
    }

    /// Start a game on a custom board, such as one from `Board::from_spaces`.
    pub fn with_board(
        setups: impl IntoIterator<Item = PlayerSetup>,
        rules: RulesConfig,
        board: Board,
        rng: GameRng,
    ) -> Result<Self> {
        let setups = validate_setups(setups, &rules)?;
        let players = Players::with_entries(setups.into_iter().map(|s| (s.name, s.piece)), &rules)?;

        debug!(players = players.player_count(), seed = rng.seed(), "new game");

        Ok(Self {
            dice_rng: rng.for_context("dice"),
            card_rng: rng.for_context("cards"),
            rules,
            board,
            players,
            phase: TurnPhase::AwaitingRoll,
            pending_purchase: None,
        })
    }

    fn set_phase(&mut self, phase: TurnPhase) {
        trace!(from = ?self.phase, to = ?phase, "turn phase");
        self.phase = phase;
    }

    fn expect_phase(&self, expected: TurnPhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidTurnPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // === Dice ===

    /// Throw two six-sided dice.
    pub fn roll_dice(&mut self) -> DiceRoll {
        roll(&mut self.dice_rng, 2, 6)
    }

    /// Precompute `frames` throws for the rolling-dice animation.
    pub fn roll_animation(&mut self, frames: usize) -> Vec<DiceRoll> {
        roll_dice(&mut self.dice_rng, 2, frames, 6)
    }

    // === Turn ===

    /// Move the current player `dice_sum` spaces and resolve the landing.
    ///
    /// Rent, tax and jail are settled immediately and the turn passes to the
    /// next player. A space for sale leaves the turn open until
    /// `resolve_purchase_decision` is called.
    ///
    /// If the landing cannot be resolved (a custom board missing a rent
    /// entry), the move and any Go bonus stand, the turn passes, and the
    /// error is returned.
    pub fn roll_and_resolve(&mut self, dice_sum: u32) -> Result<LandingOutcome> {
        self.expect_phase(TurnPhase::AwaitingRoll)?;
        let player = self.players.current_player();

        self.set_phase(TurnPhase::Moving);
        let movement = self.players.move_by(player, dice_sum)?;

        self.set_phase(TurnPhase::ResolvingLanding);
        let position = movement.to;
        let resolution = match self.resolve_landing(player, position) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(%player, position, error = %err, "landing not resolved");
                self.complete_turn();
                return Err(err);
            }
        };

        if let Resolution::OfferPurchase { .. } = resolution {
            self.pending_purchase = Some(position);
            self.set_phase(TurnPhase::AwaitingPurchaseDecision);
        } else {
            self.complete_turn();
        }

        Ok(LandingOutcome {
            movement,
            resolution,
            next_player: self.players.current_player(),
        })
    }

    fn resolve_landing(&mut self, player: PlayerId, position: u8) -> Result<Resolution> {
        let resolution = match self.board.classify_landing(player, position)? {
            LandingAction::NoAction => Resolution::NoAction,
            LandingAction::OfferPurchase => {
                let price = self.board.space_at(position)?.price().unwrap_or(0);
                Resolution::OfferPurchase { price }
            }
            LandingAction::RentDue => {
                let owner = match self.board.space_at(position)?.owner() {
                    Owner::Player(owner) => owner,
                    Owner::Bank | Owner::Unowned => return Err(GameError::InvalidSpace(position)),
                };
                let amount = self.board.rent_due(position, player)?;
                self.players.debit(player, i64::from(amount))?;
                self.players.credit(owner, i64::from(amount))?;
                debug!(%player, %owner, position, amount, "rent paid");
                Resolution::RentDue { owner, amount }
            }
            LandingAction::DrawChance => Resolution::DrawChance {
                card: CardDeck::Chance.draw(&mut self.card_rng).to_string(),
            },
            LandingAction::DrawCommunityChest => Resolution::DrawCommunityChest {
                card: CardDeck::CommunityChest.draw(&mut self.card_rng).to_string(),
            },
            LandingAction::PayTax => {
                let amount = self.board.tax_due(position)?;
                self.players.debit(player, i64::from(amount))?;
                debug!(%player, position, amount, "tax paid");
                Resolution::PayTax { amount }
            }
            LandingAction::MoveToJail => {
                let jail = self.board.jail_position();
                self.players.move_to(player, jail)?;
                debug!(%player, "sent to jail");
                Resolution::MoveToJail { jail }
            }
            LandingAction::DoNothing => Resolution::DoNothing,
            LandingAction::Unrecognized => Resolution::Unrecognized,
        };
        Ok(resolution)
    }

    /// Settle a pending purchase offer and end the turn.
    pub fn resolve_purchase_decision(&mut self, buy: bool) -> Result<PurchaseOutcome> {
        self.expect_phase(TurnPhase::AwaitingPurchaseDecision)?;
        let position = self.pending_purchase.ok_or(GameError::InvalidTurnPhase {
            expected: TurnPhase::AwaitingPurchaseDecision,
            actual: self.phase,
        })?;
        let player = self.players.current_player();

        let outcome = if !buy {
            PurchaseOutcome::Declined { position }
        } else if self.board.can_purchase(position, self.players.cash(player)?)? {
            let price = self.board.space_at(position)?.price().unwrap_or(0);
            self.players.debit(player, i64::from(price))?;
            self.board.set_owner(position, player)?;
            debug!(%player, position, price, "space bought");
            PurchaseOutcome::Bought { position, price }
        } else {
            PurchaseOutcome::Unaffordable { position }
        };

        self.pending_purchase = None;
        self.complete_turn();
        Ok(outcome)
    }

    fn complete_turn(&mut self) {
        self.set_phase(TurnPhase::TurnComplete);
        self.players.advance_turn();
        self.set_phase(TurnPhase::AwaitingRoll);
    }

    /// Build one house on every space of the position's group for the
    /// current player.
    ///
    /// Only allowed before rolling. Returns `false` without charging if the
    /// player does not own the whole group, cannot afford it, or the group is
    /// fully built.
    pub fn buy_houses(&mut self, position: u8) -> Result<bool> {
        self.expect_phase(TurnPhase::AwaitingRoll)?;
        let player = self.players.current_player();
        let space = self.board.space_at(position)?;

        if space.owner() != Owner::Player(player) {
            return Ok(false);
        }
        let Some(group) = space.group() else {
            return Ok(false);
        };
        if !self.board.can_build_houses(position, self.players.cash(player)?)? {
            return Ok(false);
        }

        let cost = self.board.house_cost(group);
        if !self.board.add_house(position)? {
            return Ok(false);
        }
        self.players.debit(player, cost)?;
        debug!(%player, position, cost, "houses bought");
        Ok(true)
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Position waiting on a purchase decision.
    #[must_use]
    pub fn pending_purchase(&self) -> Option<u8> {
        self.pending_purchase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.players.current_player()
    }

    pub fn player(&self, player: PlayerId) -> Result<&PlayerState> {
        self.players.get(player)
    }

    pub fn player_cash(&self, player: PlayerId) -> Result<i64> {
        self.players.cash(player)
    }

    pub fn player_position(&self, player: PlayerId) -> Result<u8> {
        self.players.position(player)
    }

    pub fn player_name(&self, player: PlayerId) -> Result<&str> {
        self.players.name(player)
    }

    pub fn player_piece(&self, player: PlayerId) -> Result<u8> {
        self.players.piece(player)
    }

    /// Name of the space the current player stands on.
    pub fn current_space_name(&self) -> Result<&str> {
        let position = self.players.position(self.current_player())?;
        Ok(self.board.space_at(position)?.name())
    }
}

//! The match engine: the single writer of match state.
//!
//! One `MatchEngine` is one session. The caller constructs it with a
//! catalog, a configuration, and a seed, then drives it with commits:
//!
//! 1. `choose_equipment` twice, `choose_terrain` once (setup phases).
//! 2. Per round: `commit_selection` for the player and
//!    `play_opponent_turn` for the opponent, in initiative order.
//! 3. `advance_round` after each resolution, until `Finished`.
//!
//! Every rejected action leaves the state untouched.

use crate::cards::{Catalog, EquipmentId, HeroId, TerrainId};
use crate::core::{DuelRng, MatchConfig, SelectionError, Side, SideMap};
use crate::policy::{OpponentPolicy, RandomPolicy};
use crate::resolve::{resolve_round, resolve_value};

use super::phase::Phase;
use super::selection::Selection;
use super::snapshot::MatchSnapshot;
use super::state::MatchState;

/// The round/turn state machine and its collaborators.
pub struct MatchEngine {
    catalog: Catalog,
    rng: DuelRng,
    policy: Box<dyn OpponentPolicy>,
    state: MatchState,
}

impl MatchEngine {
    /// Create an engine and run setup: deal disjoint hands, assign the
    /// opponent's pools, and enter equipment selection.
    #[must_use]
    pub fn new(catalog: Catalog, config: MatchConfig, seed: u64) -> Self {
        Self::with_policy(catalog, config, seed, Box::new(RandomPolicy))
    }

    /// Create an engine with a custom opponent policy.
    #[must_use]
    pub fn with_policy(
        catalog: Catalog,
        config: MatchConfig,
        seed: u64,
        policy: Box<dyn OpponentPolicy>,
    ) -> Self {
        let mut engine = Self {
            catalog,
            rng: DuelRng::new(seed),
            policy,
            state: MatchState::new(config),
        };
        engine.run_setup();
        engine
    }

    /// Discard the current match and start a fresh one with `config`.
    ///
    /// The RNG stream continues, so consecutive matches differ.
    pub fn start_new_match(&mut self, config: MatchConfig) {
        self.state = MatchState::new(config);
        self.run_setup();
    }

    /// The catalog this match draws from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only access to the live state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Capture a read-only snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.state)
    }

    // === Setup phases ===

    fn run_setup(&mut self) {
        debug_assert_eq!(self.state.phase, Phase::Setup);

        // Deal disjoint hands from a shuffled hero pool. With a small
        // catalog the opponent's hand may come up short, like the original
        // slice-based deal; the early-exit rule covers that.
        let mut ids: Vec<HeroId> = self.catalog.heroes().iter().map(|h| h.id).collect();
        self.rng.shuffle(&mut ids);

        let hand_size = self.state.config.hand_size;
        let mut dealt = ids.into_iter();
        self.state.hands[Side::Player] = dealt.by_ref().take(hand_size).collect();
        self.state.hands[Side::Opponent] = dealt.take(hand_size).collect();

        // A side dealt no cards at all can never commit a turn, so the
        // match ends right here as a scoreless draw.
        if self.state.any_hand_empty() {
            log::warn!(
                "catalog too small for hand size {hand_size}, finishing without play",
            );
            let result = self.state.result_from_scores();
            self.state.result = Some(result);
            self.state.phase = Phase::Finished;
            return;
        }

        // The opponent's pools are assigned here, independently of the
        // player's upcoming picks.
        let mut equipment: Vec<EquipmentId> =
            self.catalog.equipments().iter().map(|e| e.id).collect();
        self.rng.shuffle(&mut equipment);
        self.state.equipment_pools[Side::Opponent] = equipment
            .into_iter()
            .take(self.state.config.equipment_pool_size)
            .collect();

        let mut terrains: Vec<TerrainId> = self.catalog.terrains().iter().map(|t| t.id).collect();
        self.rng.shuffle(&mut terrains);
        self.state.terrain_pools[Side::Opponent] = terrains
            .into_iter()
            .take(self.state.config.terrain_pool_size)
            .collect();

        log::debug!(
            "setup: dealt {}/{} cards, opponent pools assigned",
            self.state.hands[Side::Player].len(),
            self.state.hands[Side::Opponent].len(),
        );

        self.enter_equipment_selection();
    }

    fn enter_equipment_selection(&mut self) {
        self.state.phase = Phase::EquipmentSelection;
        if self.state.config.equipment_pool_size == 0 {
            self.enter_terrain_selection();
        }
    }

    fn enter_terrain_selection(&mut self) {
        self.state.phase = Phase::TerrainSelection;
        if self.state.config.terrain_pool_size == 0 {
            self.begin_playing();
        }
    }

    /// Player picks one equipment item for their pool. On the final pick
    /// the match moves to terrain selection.
    pub fn choose_equipment(&mut self, id: EquipmentId) -> Result<(), SelectionError> {
        if self.state.phase != Phase::EquipmentSelection {
            return Err(self.phase_rejection());
        }
        if self.catalog.equipment(id).is_none() {
            return Err(SelectionError::EquipmentNotOwned { id: id.raw() });
        }
        if self.state.equipment_pools[Side::Player].contains(&id) {
            return Err(SelectionError::invalid(
                "that equipment is already in your pool",
            ));
        }

        self.state.equipment_pools[Side::Player].push(id);
        log::debug!("player picked equipment {id}");

        if self.state.equipment_pools[Side::Player].len() >= self.state.config.equipment_pool_size {
            self.enter_terrain_selection();
        }
        Ok(())
    }

    /// Player picks their terrain. Rolls initiative and starts round 1.
    pub fn choose_terrain(&mut self, id: TerrainId) -> Result<(), SelectionError> {
        if self.state.phase != Phase::TerrainSelection {
            return Err(self.phase_rejection());
        }
        if self.catalog.terrain(id).is_none() {
            return Err(SelectionError::TerrainNotOwned { id: id.raw() });
        }
        if self.state.terrain_pools[Side::Player].contains(&id) {
            return Err(SelectionError::invalid("that terrain is already picked"));
        }

        self.state.terrain_pools[Side::Player].push(id);
        log::debug!("player picked terrain {id}");

        if self.state.terrain_pools[Side::Player].len() >= self.state.config.terrain_pool_size {
            self.begin_playing();
        }
        Ok(())
    }

    fn begin_playing(&mut self) {
        // One die per side decides round-1 initiative. An exact tie goes
        // to the player, matching the long-observed table rule.
        let dice = SideMap::new(|_| self.rng.roll_die());
        self.state.initiator = if dice[Side::Player] >= dice[Side::Opponent] {
            Side::Player
        } else {
            Side::Opponent
        };
        self.state.initiative_dice = Some(dice);
        self.state.phase = Phase::Playing;

        log::info!(
            "initiative: player {} vs opponent {}, {} initiates",
            dice[Side::Player],
            dice[Side::Opponent],
            self.state.initiator,
        );
    }

    // === Playing ===

    /// Commit one side's turn.
    ///
    /// Turn 1 locks the round's attribute (and terrain, if proposed) for
    /// both sides. The turn-2 commit also resolves the round and moves the
    /// match to `RoundResolved`.
    pub fn commit_selection(
        &mut self,
        side: Side,
        selection: Selection,
    ) -> Result<(), SelectionError> {
        self.validate_commit(side, &selection)?;

        // Validation passed; from here on the commit is applied whole.
        let card = selection.card.expect("validated above");
        self.state.hands[side].retain(|&mut c| c != card);
        self.state.played_cards[side] = Some(card);

        if let Some(equipment) = selection.equipment {
            self.state.used_equipment[side].push(equipment);
            self.state.played_equipment[side] = Some(equipment);
        }

        if self.state.turn == 1 {
            self.state.round_attribute = selection.attribute;
            if let Some(terrain) = selection.terrain {
                self.state.used_terrains[side].push(terrain);
                self.state.round_terrain = Some(terrain);
            }
            log::debug!(
                "round {} turn 1: {side} played {card}, contest on {}",
                self.state.round,
                selection.attribute.expect("validated above"),
            );
            self.state.turn = 2;
        } else {
            log::debug!("round {} turn 2: {side} played {card}", self.state.round);
            self.resolve_current_round();
        }
        Ok(())
    }

    /// Ask the opponent policy for a selection and commit it.
    pub fn play_opponent_turn(&mut self) -> Result<(), SelectionError> {
        if self.state.phase != Phase::Playing {
            return Err(self.phase_rejection());
        }
        if self.state.side_to_act() != Some(Side::Opponent) {
            return Err(SelectionError::NotYourTurn {
                expected: Side::Player,
            });
        }
        let selection = self
            .policy
            .choose(&self.state, &self.catalog, &mut self.rng);
        self.commit_selection(Side::Opponent, selection)
    }

    /// Move past a resolved round: either start the next round with the
    /// initiative flipped, or finish the match.
    ///
    /// This is the caller-driven replacement for the original's cosmetic
    /// result pause.
    pub fn advance_round(&mut self) -> Result<(), SelectionError> {
        if self.state.phase != Phase::RoundResolved {
            return Err(self.phase_rejection());
        }

        self.state.clear_round();

        if self.state.round < self.state.config.max_rounds && !self.state.any_hand_empty() {
            self.state.round += 1;
            self.state.turn = 1;
            self.state.initiator = self.state.initiator.opposite();
            self.state.phase = Phase::Playing;
            log::debug!(
                "round {} begins, {} initiates",
                self.state.round,
                self.state.initiator,
            );
        } else {
            let result = self.state.result_from_scores();
            self.state.result = Some(result);
            self.state.phase = Phase::Finished;
            log::info!(
                "match finished {}-{}: {result:?}",
                self.state.scores[Side::Player],
                self.state.scores[Side::Opponent],
            );
        }
        Ok(())
    }

    // === Internals ===

    /// Reject with no state change if the commit is illegal.
    fn validate_commit(&self, side: Side, selection: &Selection) -> Result<(), SelectionError> {
        match self.state.phase {
            Phase::Playing => {}
            _ => return Err(self.phase_rejection()),
        }

        let expected = self
            .state
            .side_to_act()
            .expect("Playing phase always has an acting side");
        if side != expected {
            return Err(SelectionError::NotYourTurn { expected });
        }

        if self.state.turn == 1 {
            if !selection.satisfies_turn(1) {
                return Err(SelectionError::invalid("card and attribute required"));
            }
        } else {
            if !selection.satisfies_turn(2) {
                return Err(SelectionError::invalid("choose 1 card"));
            }
            if selection.attribute.is_some() {
                return Err(SelectionError::invalid(
                    "the attribute is locked for this round",
                ));
            }
            if selection.terrain.is_some() {
                return Err(SelectionError::invalid(
                    "the terrain is locked for this round",
                ));
            }
        }

        let card = selection.card.expect("presence checked above");
        if !self.state.hands[side].contains(&card) {
            return Err(SelectionError::CardNotInHand { id: card.raw() });
        }

        if let Some(equipment) = selection.equipment {
            if !self.state.equipment_pools[side].contains(&equipment) {
                return Err(SelectionError::EquipmentNotOwned {
                    id: equipment.raw(),
                });
            }
            if self.state.used_equipment[side].contains(&equipment) {
                return Err(SelectionError::AlreadyUsed);
            }
        }

        if let Some(terrain) = selection.terrain {
            if !self.state.terrain_pools[side].contains(&terrain) {
                return Err(SelectionError::TerrainNotOwned { id: terrain.raw() });
            }
            if self.state.used_terrains[side].contains(&terrain) {
                return Err(SelectionError::AlreadyUsed);
            }
        }

        Ok(())
    }

    /// The implicit third step of a round: resolve both values, score,
    /// and wait for `advance_round`.
    fn resolve_current_round(&mut self) {
        let attribute = self
            .state
            .round_attribute
            .expect("turn 1 locks the attribute before resolution");
        let terrain = self
            .state
            .round_terrain
            .and_then(|id| self.catalog.terrain(id));

        let values = SideMap::new(|side| {
            let card_id = self.state.played_cards[side]
                .expect("both cards are committed before resolution");
            let card = self
                .catalog
                .hero(card_id)
                .expect("played cards come from the catalog");
            let equipment = self.state.played_equipment[side]
                .and_then(|id| self.catalog.equipment(id));
            resolve_value(card, attribute, equipment, terrain)
        });

        let outcome = resolve_round(values, &mut self.rng);
        if let Some(winner) = outcome.winner {
            self.state.scores[winner] += 1;
            self.state.winning_card = self.state.played_cards[winner];
        } else {
            self.state.winning_card = None;
        }
        self.state.last_outcome = Some(outcome);
        self.state.phase = Phase::RoundResolved;

        log::info!(
            "round {} on {attribute}: {} vs {} -> {:?}",
            self.state.round,
            values[Side::Player],
            values[Side::Opponent],
            outcome.winner,
        );
    }

    /// The standard rejection for an action arriving in the wrong phase.
    fn phase_rejection(&self) -> SelectionError {
        match self.state.phase {
            Phase::Finished => SelectionError::AlreadyFinished,
            Phase::RoundResolved => SelectionError::ResolutionPending,
            phase => SelectionError::WrongPhase { phase },
        }
    }
}

//! Player decisions.
//!
//! Effects never decide for a player directly: "you may", target choices
//! and the choice of what a forced attacker attacks all go through the
//! player's `Decider`. A decision is a synchronous call; declining is an
//! ordinary answer.

use std::collections::VecDeque;

use crate::abilities::Ability;
use crate::core::{EntityId, GameRng, GameState};
use crate::effects::{Outcome, Target};
use crate::filter::FilterContext;

/// Something that makes decisions for one player.
pub trait Decider: std::fmt::Debug + Send {
    /// "You may ..." Returns whether the player does it.
    fn choose_use(&mut self, outcome: Outcome, message: &str, source: &Ability, state: &GameState) -> bool;

    /// Fill `target` with legal choices. Returns false if the player
    /// declines or cannot choose enough.
    fn choose_target(&mut self, outcome: Outcome, target: &mut Target, source: &Ability, state: &GameState) -> bool;

    /// Pick what `attacker` attacks. `defenders` is never empty.
    fn choose_defender(&mut self, attacker: EntityId, defenders: &[EntityId], state: &GameState) -> EntityId;

    fn clone_box(&self) -> Box<dyn Decider>;
}

impl Clone for Box<dyn Decider> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Candidates for `target`, best first for a player using `source`.
///
/// Good outcomes prefer the player's own objects, bad ones everybody
/// else's. Ties keep zone order.
fn ranked_candidates(outcome: Outcome, target: &Target, source: &Ability, state: &GameState) -> Vec<EntityId> {
    let ctx = FilterContext::of(source);
    let mut candidates = target.possible_targets(&ctx, state);
    let you = source.controller_id;
    candidates.sort_by_key(|id| {
        let own = state.controller_of(*id) == Some(you);
        own != outcome.is_good()
    });
    candidates
}

fn fill(target: &mut Target, candidates: impl IntoIterator<Item = EntityId>, source: &Ability, state: &GameState) -> bool {
    let ctx = FilterContext::of(source);
    for id in candidates {
        if target.chosen().len() >= target.max() {
            break;
        }
        target.add_target(id, &ctx, state);
    }
    target.is_chosen()
}

/// Deterministic decider: says yes, picks the best-ranked targets, and
/// attacks players rather than planeswalkers.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoDecider;

impl Decider for AutoDecider {
    fn choose_use(&mut self, _outcome: Outcome, _message: &str, _source: &Ability, _state: &GameState) -> bool {
        true
    }

    fn choose_target(&mut self, outcome: Outcome, target: &mut Target, source: &Ability, state: &GameState) -> bool {
        let candidates = ranked_candidates(outcome, target, source, state);
        fill(target, candidates, source, state)
    }

    fn choose_defender(&mut self, _attacker: EntityId, defenders: &[EntityId], state: &GameState) -> EntityId {
        let player_count = state.player_count();
        defenders
            .iter()
            .copied()
            .find(|d| d.is_player(player_count))
            .unwrap_or(defenders[0])
    }

    fn clone_box(&self) -> Box<dyn Decider> {
        Box::new(*self)
    }
}

/// Decider driven by its own seeded RNG, for simulations.
#[derive(Clone, Debug)]
pub struct RandomDecider {
    rng: GameRng,
}

impl RandomDecider {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Decider for RandomDecider {
    fn choose_use(&mut self, _outcome: Outcome, _message: &str, _source: &Ability, _state: &GameState) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn choose_target(&mut self, _outcome: Outcome, target: &mut Target, source: &Ability, state: &GameState) -> bool {
        let mut candidates = target.possible_targets(&FilterContext::of(source), state);
        if candidates.is_empty() || target.max() == 0 {
            return false;
        }
        self.rng.shuffle(&mut candidates);
        let low = target.min().max(1).min(candidates.len());
        let high = target.max().min(candidates.len());
        let count = self.rng.gen_range_usize(low..high + 1);
        fill(target, candidates.into_iter().take(count), source, state)
    }

    fn choose_defender(&mut self, _attacker: EntityId, defenders: &[EntityId], _state: &GameState) -> EntityId {
        self.rng.choose(defenders).copied().unwrap_or(defenders[0])
    }

    fn clone_box(&self) -> Box<dyn Decider> {
        Box::new(self.clone())
    }
}

/// Decider that replays scripted answers, then falls back to `AutoDecider`.
///
/// ```
/// use ccg_rules::core::EntityId;
/// use ccg_rules::rules::ScriptedDecider;
///
/// let decider = ScriptedDecider::new()
///     .with_use(false)
///     .with_targets([EntityId(7)]);
/// assert_eq!(decider.remaining(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecider {
    uses: VecDeque<bool>,
    targets: VecDeque<Vec<EntityId>>,
    defenders: VecDeque<EntityId>,
    fallback: AutoDecider,
}

impl ScriptedDecider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer to the next "you may" question.
    #[must_use]
    pub fn with_use(mut self, answer: bool) -> Self {
        self.uses.push_back(answer);
        self
    }

    /// Queue the ids for the next target choice. An empty list declines.
    #[must_use]
    pub fn with_targets(mut self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.targets.push_back(ids.into_iter().collect());
        self
    }

    /// Queue the next defender choice.
    #[must_use]
    pub fn with_defender(mut self, defender: EntityId) -> Self {
        self.defenders.push_back(defender);
        self
    }

    /// Scripted answers not used yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.uses.len() + self.targets.len() + self.defenders.len()
    }
}

impl Decider for ScriptedDecider {
    fn choose_use(&mut self, outcome: Outcome, message: &str, source: &Ability, state: &GameState) -> bool {
        match self.uses.pop_front() {
            Some(answer) => answer,
            None => self.fallback.choose_use(outcome, message, source, state),
        }
    }

    fn choose_target(&mut self, outcome: Outcome, target: &mut Target, source: &Ability, state: &GameState) -> bool {
        match self.targets.pop_front() {
            Some(ids) => fill(target, ids, source, state),
            None => self.fallback.choose_target(outcome, target, source, state),
        }
    }

    fn choose_defender(&mut self, attacker: EntityId, defenders: &[EntityId], state: &GameState) -> EntityId {
        match self.defenders.pop_front() {
            Some(defender) => defender,
            None => self.fallback.choose_defender(attacker, defenders, state),
        }
    }

    fn clone_box(&self) -> Box<dyn Decider> {
        Box::new(self.clone())
    }
}

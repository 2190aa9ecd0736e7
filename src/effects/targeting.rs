//! Targets and target pointers.
//!
//! - `Target`: a choice an ability asks its controller to make when it is
//!   put on the stack ("target creature", "a card an opponent owns from exile")
//! - `TargetPointer`: how an effect finds the object or player it acts on
//!   at resolution
//! - `SetTargetPointer`: what a trigger records when it fires

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::abilities::Ability;
use crate::core::{EntityId, GameState, Zone};
use crate::filter::{Filter, FilterContext, Predicate};

/// What a trigger binds into its effects' target pointers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetTargetPointer {
    /// Nothing; effects read the ability's chosen targets.
    #[default]
    None,
    /// The controller of the triggering permanent.
    Player,
    /// The triggering permanent itself.
    Permanent,
}

/// An object as it was when it was recorded.
///
/// A card that changes zones becomes a new object: its id stays the same
/// but its zone-change count moves on, so a reference recorded before the
/// move no longer resolves. Players never change zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: EntityId,
    pub zone_changes: u32,
}

impl ObjectRef {
    #[must_use]
    pub const fn new(id: EntityId, zone_changes: u32) -> Self {
        Self { id, zone_changes }
    }

    /// `id` as it is right now.
    #[must_use]
    pub fn of(id: EntityId, state: &GameState) -> Self {
        Self::new(id, state.zone_changes(id))
    }

    /// Is this still the same object?
    #[must_use]
    pub fn is_current(self, state: &GameState) -> bool {
        state.zone_changes(self.id) == self.zone_changes
    }
}

/// Where an effect's "that player" / "that creature" comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPointer {
    /// The targets chosen for the ability's first `Target`.
    #[default]
    FirstTarget,
    /// Objects recorded when the ability triggered.
    Fixed(SmallVec<[ObjectRef; 2]>),
}

impl TargetPointer {
    /// Pointer to an id that has never changed zones: a player, or an
    /// object still where the game was set up with it.
    #[must_use]
    pub fn fixed(id: EntityId) -> Self {
        Self::fixed_ref(ObjectRef::new(id, 0))
    }

    /// Pointer to `id` as it is right now.
    #[must_use]
    pub fn object(id: EntityId, state: &GameState) -> Self {
        Self::fixed_ref(ObjectRef::of(id, state))
    }

    fn fixed_ref(object: ObjectRef) -> Self {
        let mut objects = SmallVec::new();
        objects.push(object);
        TargetPointer::Fixed(objects)
    }

    /// First id this pointer refers to, if it still names the same object.
    #[must_use]
    pub fn first(&self, source: &Ability, state: &GameState) -> Option<EntityId> {
        match self {
            TargetPointer::FirstTarget => source.targets.first().and_then(|t| t.current(state).first().copied()),
            TargetPointer::Fixed(objects) => objects.first().filter(|o| o.is_current(state)).map(|o| o.id),
        }
    }

    /// Every id this pointer refers to that still names the same object.
    #[must_use]
    pub fn targets(&self, source: &Ability, state: &GameState) -> Vec<EntityId> {
        match self {
            TargetPointer::FirstTarget => source.targets.first().map(|t| t.current(state)).unwrap_or_default(),
            TargetPointer::Fixed(objects) => objects
                .iter()
                .filter(|o| o.is_current(state))
                .map(|o| o.id)
                .collect(),
        }
    }
}

/// A request to choose between `min` and `max` objects in a zone that
/// match a filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    filter: Filter,
    zone: Zone,
    min: usize,
    max: usize,
    chosen: SmallVec<[EntityId; 2]>,
    /// Zone-change count of each chosen id when it was chosen.
    chosen_at: SmallVec<[u32; 2]>,
}

impl Target {
    #[must_use]
    pub fn new(filter: Filter, zone: Zone, min: usize, max: usize) -> Self {
        assert!(min <= max, "Target min ({min}) must not exceed max ({max})");
        Self {
            filter,
            zone,
            min,
            max,
            chosen: SmallVec::new(),
            chosen_at: SmallVec::new(),
        }
    }

    /// Exactly one permanent matching `filter`.
    #[must_use]
    pub fn permanent(filter: Filter) -> Self {
        Self::new(filter, Zone::Battlefield, 1, 1)
    }

    /// "target creature"
    #[must_use]
    pub fn creature() -> Self {
        Self::permanent(Filter::creature_permanent("creature"))
    }

    /// Between `min` and `max` exiled cards matching `filter`.
    #[must_use]
    pub fn card_in_exile(min: usize, max: usize, filter: Filter) -> Self {
        let filter = filter.with(Predicate::InZone(Zone::Exile));
        Self::new(filter, Zone::Exile, min, max)
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.filter.message()
    }

    /// Chosen ids, in the order they were chosen.
    #[must_use]
    pub fn chosen(&self) -> &[EntityId] {
        &self.chosen
    }

    /// Chosen ids that have not changed zones since they were chosen.
    #[must_use]
    pub fn current(&self, state: &GameState) -> Vec<EntityId> {
        self.chosen
            .iter()
            .zip(&self.chosen_at)
            .filter(|&(&id, &at)| ObjectRef::new(id, at).is_current(state))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Enough targets have been chosen.
    #[must_use]
    pub fn is_chosen(&self) -> bool {
        !self.chosen.is_empty() && self.chosen.len() >= self.min
    }

    /// Is `id` a legal choice right now?
    #[must_use]
    pub fn is_legal(&self, id: EntityId, ctx: &FilterContext, state: &GameState) -> bool {
        state
            .card(id)
            .is_some_and(|card| card.zone == self.zone && self.filter.matches(card, ctx, state))
    }

    /// Every legal choice, in zone order.
    #[must_use]
    pub fn possible_targets(&self, ctx: &FilterContext, state: &GameState) -> Vec<EntityId> {
        state
            .cards_in_zone(self.zone)
            .into_iter()
            .filter(|&id| self.is_legal(id, ctx, state))
            .collect()
    }

    /// Are there enough legal choices to fill this target?
    #[must_use]
    pub fn can_choose(&self, ctx: &FilterContext, state: &GameState) -> bool {
        self.possible_targets(ctx, state).len() >= self.min.max(1)
    }

    /// Choose `id`. Returns false if it is illegal, already chosen, or the
    /// target is full.
    pub fn add_target(&mut self, id: EntityId, ctx: &FilterContext, state: &GameState) -> bool {
        if self.chosen.len() >= self.max || self.chosen.contains(&id) || !self.is_legal(id, ctx, state) {
            return false;
        }
        self.chosen.push(id);
        self.chosen_at.push(state.zone_changes(id));
        true
    }

    /// Drop chosen ids that are no longer legal, including ones that left
    /// and came back as new objects. Returns how many remain.
    pub fn retain_legal(&mut self, ctx: &FilterContext, state: &GameState) -> usize {
        let mut chosen = SmallVec::new();
        let mut chosen_at = SmallVec::new();
        for (&id, &at) in self.chosen.iter().zip(&self.chosen_at) {
            if ObjectRef::new(id, at).is_current(state) && self.is_legal(id, ctx, state) {
                chosen.push(id);
                chosen_at.push(at);
            }
        }
        self.chosen = chosen;
        self.chosen_at = chosen_at;
        self.chosen.len()
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
        self.chosen_at.clear();
    }
}

//! The `Game` facade: state, deciders and the resolution driver.
//!
//! ## Resolution
//!
//! 1. Something changes the state and events are emitted
//! 2. `process_events` asks the `TriggerRegistry` which abilities trigger
//!    and queues bound copies in stable order
//! 3. `flush_triggers` has each controller choose targets and pushes the
//!    abilities onto the stack; abilities without legal targets are dropped
//! 4. `resolve_top` resolves the top of the stack, then goes back to 2
//!
//! `run_stack` repeats this until the stack is empty.

use tracing::{debug, info, warn};

use super::combat;
use super::decision::{AutoDecider, Decider};
use crate::abilities::{Ability, AbilityKind, AbilityState};
use crate::cards::CardDefinition;
use crate::core::{EngineError, EngineResult, EntityId, GameConfig, GameState, PlayerId, PlayerMap, Zone};
use crate::effects::{Outcome, Target};
use crate::stack::{PriorityStack, ResolutionStatus, StackEntry, TriggerQueue};
use crate::triggers::{GameEvent, TriggeredAbility};

/// One game.
///
/// Copy a game with `Game::copy` to run an independent simulation, possibly
/// on another thread.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    pub state: GameState,
    deciders: PlayerMap<Box<dyn Decider>>,
    pub stack: PriorityStack,
    pub queue: TriggerQueue,
}

impl Game {
    /// Create a game in which every player uses `AutoDecider`.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        config.validate()?;
        let player_count = config.player_count;
        Ok(Self {
            state: GameState::new(&config),
            deciders: PlayerMap::new(player_count, |_| Box::new(AutoDecider) as Box<dyn Decider>),
            stack: PriorityStack::new(player_count),
            queue: TriggerQueue::new(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace a player's decider.
    pub fn set_decider(&mut self, player: PlayerId, decider: impl Decider + 'static) -> EngineResult<()> {
        let slot = self
            .deciders
            .get_mut(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        *slot = Box::new(decider);
        Ok(())
    }

    // === Setup ===

    /// Create a game object directly in a zone (no events).
    pub fn create_card(&mut self, definition: &CardDefinition, owner: PlayerId, zone: Zone) -> EntityId {
        self.state.create_card(definition, owner, zone)
    }

    /// Put a card onto the battlefield and queue what that triggers.
    pub fn put_onto_battlefield(&mut self, card: EntityId, controller: PlayerId) -> EngineResult<()> {
        self.state.enter_battlefield(card, controller)?;
        self.process_events();
        Ok(())
    }

    /// Move a card between zones. Triggers are picked up by the next
    /// `process_events`.
    pub fn move_card(&mut self, card: EntityId, to: Zone) -> EngineResult<Zone> {
        self.state.move_card(card, to)
    }

    // === Triggers ===

    /// Check every pending event for triggers. Returns how many abilities
    /// were queued.
    pub fn process_events(&mut self) -> usize {
        let mut queued = 0;
        for event in self.state.take_pending_events() {
            let triggered = self.state.triggers.find_triggers(&event, &self.state);
            queued += triggered.len();
            self.queue.enqueue(triggered);
        }
        queued
    }

    /// Put every queued ability onto the stack, in queue order. Returns how
    /// many were pushed.
    pub fn flush_triggers(&mut self) -> usize {
        let mut pushed = 0;
        while let Some(TriggeredAbility { mut ability, event, .. }) = self.queue.pop_front() {
            if !self.choose_ability_targets(&mut ability) {
                info!(
                    source = %ability.source_id,
                    ability = %ability.id,
                    "triggered ability removed: targets could not be chosen"
                );
                continue;
            }
            self.stack.push(ability, Some(event));
            pushed += 1;
        }
        pushed
    }

    fn choose_ability_targets(&mut self, ability: &mut Ability) -> bool {
        let mut targets = std::mem::take(&mut ability.targets);
        let outcome = ability.outcome();
        let ctx = ability.filter_context();

        let chosen = targets.iter_mut().all(|target| {
            target.clear();
            target.can_choose(&ctx, &self.state)
                && self.choose_target(ability.controller_id, outcome, target, ability)
        });

        ability.targets = targets;
        chosen
    }

    // === Resolution ===

    /// Resolve the top of the stack.
    ///
    /// Returns the resolved entry with its final state, or `None` if the
    /// stack is empty. `Err` only for engine-contract violations raised by
    /// an effect.
    pub fn resolve_top(&mut self) -> EngineResult<Option<StackEntry>> {
        let Some(mut entry) = self.stack.pop_top() else {
            return Ok(None);
        };
        entry.state = self.resolve_entry(&mut entry)?;
        info!(
            entry = %entry.id,
            source = %entry.ability.source_id,
            ability = %entry.ability.id,
            state = ?entry.state,
            "ability resolved"
        );

        self.state.apply_continuous_effects();
        self.process_events();
        Ok(Some(entry))
    }

    fn resolve_entry(&mut self, entry: &mut StackEntry) -> EngineResult<AbilityState> {
        if self.state.player(entry.controller).is_none() {
            warn!(entry = %entry.id, player = %entry.controller, "controller has left the game");
            return Ok(AbilityState::Failed);
        }
        let ability = &mut entry.ability;

        if !ability.targets.is_empty() {
            let ctx = ability.filter_context();
            let remaining: usize = ability
                .targets
                .iter_mut()
                .map(|target| target.retain_legal(&ctx, &self.state))
                .sum();
            if remaining == 0 {
                warn!(entry = %entry.id, source = %ability.source_id, "ability fizzled: every target is illegal");
                return Ok(AbilityState::Failed);
            }
        }

        if ability.is_optional() {
            let message = ability.text();
            if !self.choose_use(entry.controller, ability.outcome(), &message, ability) {
                debug!(entry = %entry.id, "optional ability declined");
                return Ok(AbilityState::Resolved);
            }
        }

        let mut success = true;
        for effect in &ability.effects {
            let applied = effect.apply(self, ability)?;
            success &= applied;
        }

        Ok(if success {
            AbilityState::Resolved
        } else {
            AbilityState::Failed
        })
    }

    /// Resolve until the stack is empty.
    ///
    /// With `auto_pass_priority` off this only puts triggers on the stack and
    /// reports who has priority; drive it with `pass_priority`.
    pub fn run_stack(&mut self) -> EngineResult<ResolutionStatus> {
        loop {
            self.process_events();
            self.flush_triggers();

            let Some(priority) = self.stack.priority_player() else {
                return Ok(ResolutionStatus::Complete);
            };
            if !self.config.auto_pass_priority {
                return Ok(ResolutionStatus::WaitingForPriority(priority));
            }

            while let Some(player) = self.stack.priority_player() {
                if self.stack.pass(player) {
                    break;
                }
            }
            self.resolve_top()?;
        }
    }

    /// A player passes priority; when everyone has passed, the top resolves.
    pub fn pass_priority(&mut self, player: PlayerId) -> EngineResult<ResolutionStatus> {
        if !self.stack.pass(player) {
            return Ok(match self.stack.priority_player() {
                Some(next) => ResolutionStatus::WaitingForPriority(next),
                None => ResolutionStatus::Complete,
            });
        }

        self.resolve_top()?;
        self.flush_triggers();
        Ok(if self.stack.is_empty() {
            ResolutionStatus::Complete
        } else {
            ResolutionStatus::Processing
        })
    }

    // === Player Actions ===

    /// Tap `land` for mana. Returns `Ok(false)` if it is already tapped.
    pub fn activate_mana_ability(&mut self, player: PlayerId, land: EntityId) -> EngineResult<bool> {
        if self.state.player(player).is_none() {
            return Err(EngineError::UnknownPlayer(player));
        }
        let card = match self.state.card(land) {
            None => return Err(EngineError::UnknownObject(land)),
            Some(card) if !card.is_on_battlefield() => {
                return Err(EngineError::WrongZone {
                    entity: land,
                    expected: Zone::Battlefield,
                    actual: card.zone,
                })
            }
            Some(card) => card,
        };
        if card.controller != player {
            return Err(EngineError::NotController { entity: land, player });
        }
        let produces = card
            .abilities
            .iter()
            .find_map(|a| match a.kind {
                AbilityKind::Mana { produces } => Some(produces),
                _ => None,
            })
            .ok_or(EngineError::NoManaAbility(land))?;

        if !self.state.tap(land) {
            return Ok(false);
        }
        self.state.add_mana(player, produces, 1)?;
        self.state.emit(GameEvent::tapped_for_mana(land, player, produces));
        debug!(%player, %land, mana = %produces, "tapped for mana");

        self.process_events();
        Ok(true)
    }

    /// Declare `attacker` as attacking `defender`.
    ///
    /// Returns false, changing nothing, if the creature cannot attack or
    /// the defender is not legal.
    pub fn declare_attacker(&mut self, player: PlayerId, attacker: EntityId, defender: EntityId, forced: bool) -> bool {
        let eligible = self
            .state
            .permanent(attacker)
            .is_some_and(|card| card.controller == player && combat::can_attack(card));
        if !eligible || !combat::is_legal_defender(defender, player, &self.state) {
            debug!(%attacker, %defender, forced, "attack not declared");
            return false;
        }

        self.state.tap(attacker);
        if let Some(card) = self.state.card_mut(attacker) {
            card.attacking = Some(defender);
        }
        self.state.emit(GameEvent::attacker_declared(attacker, player, defender));
        debug!(%attacker, %defender, forced, "attacker declared");
        true
    }

    /// Make `attacker` attack `defending_player` or one of their
    /// planeswalkers if it is able to. Its controller picks which.
    pub fn force_attack(&mut self, attacker: EntityId, defending_player: PlayerId) -> bool {
        let Some(card) = self.state.permanent(attacker) else {
            return false;
        };
        if !combat::can_attack(card) {
            return false;
        }
        let controller = card.controller;

        let defenders = combat::possible_defenders(defending_player, &self.state);
        let defender = match defenders.as_slice() {
            [] => return false,
            [only] => *only,
            _ => self.choose_defender(controller, attacker, &defenders),
        };
        self.declare_attacker(controller, attacker, defender, true)
    }

    // === Decisions ===

    /// Ask `player` to fill `target`. False if the player is gone or declines.
    pub fn choose_target(&mut self, player: PlayerId, outcome: Outcome, target: &mut Target, source: &Ability) -> bool {
        if self.state.player(player).is_none() {
            return false;
        }
        let Some(decider) = self.deciders.get_mut(player) else {
            return false;
        };
        decider.choose_target(outcome, target, source, &self.state) && target.is_chosen()
    }

    /// Ask `player` a "you may" question. False if the player is gone.
    pub fn choose_use(&mut self, player: PlayerId, outcome: Outcome, message: &str, source: &Ability) -> bool {
        if self.state.player(player).is_none() {
            return false;
        }
        let Some(decider) = self.deciders.get_mut(player) else {
            return false;
        };
        decider.choose_use(outcome, message, source, &self.state)
    }

    /// Ask `player` what `attacker` attacks. An illegal answer falls back
    /// to the first defender.
    pub fn choose_defender(&mut self, player: PlayerId, attacker: EntityId, defenders: &[EntityId]) -> EntityId {
        let choice = self
            .deciders
            .get_mut(player)
            .map(|decider| decider.choose_defender(attacker, defenders, &self.state));
        match choice {
            Some(defender) if defenders.contains(&defender) => defender,
            other => {
                if let Some(bad) = other {
                    warn!(%player, %attacker, defender = %bad, "illegal defender chosen, using the first");
                }
                defenders[0]
            }
        }
    }

    // === Copies ===

    /// Deep copy for an independent simulation. The copy's RNG is forked.
    #[must_use]
    pub fn copy(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            state: self.state.clone_state(),
            deciders: self.deciders.clone(),
            stack: self.stack.clone(),
            queue: self.queue.clone(),
        }
    }

    /// Encoded public snapshot of the state.
    pub fn snapshot(&self) -> EngineResult<Vec<u8>> {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType};
    use crate::effects::ReturnToHandTargetEffect;
    use crate::mana::ManaColor;
    use crate::triggers::EntersBattlefieldTrigger;

    fn forest() -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Forest", [CardType::Land]).with_ability(Ability::mana(ManaColor::Green))
    }

    fn bear() -> CardDefinition {
        CardDefinition::new(CardId::new(2), "Bear", [CardType::Creature]).with_power_toughness(2, 2)
    }

    fn bouncer() -> CardDefinition {
        CardDefinition::new(CardId::new(3), "Bouncer", [CardType::Creature]).with_ability(
            Ability::triggered(EntersBattlefieldTrigger, ReturnToHandTargetEffect::new()).with_target(Target::creature()),
        )
    }

    fn game() -> Game {
        Game::new(GameConfig::new(2)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::new(2).with_starting_life(0);
        assert!(matches!(Game::new(config), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_activate_mana_ability() {
        let mut game = game();
        let p0 = PlayerId::new(0);
        let land = game.create_card(&forest(), p0, Zone::Battlefield);

        assert!(game.activate_mana_ability(p0, land).unwrap());
        assert_eq!(game.state.players[p0].mana_pool.get(ManaColor::Green), 1);
        assert!(!game.activate_mana_ability(p0, land).unwrap());
        assert_eq!(game.state.players[p0].mana_pool.get(ManaColor::Green), 1);
    }

    #[test]
    fn test_activate_mana_ability_errors() {
        let mut game = game();
        let p0 = PlayerId::new(0);
        let land = game.create_card(&forest(), p0, Zone::Battlefield);
        let in_hand = game.create_card(&forest(), p0, Zone::Hand);
        let creature = game.create_card(&bear(), p0, Zone::Battlefield);

        assert_eq!(
            game.activate_mana_ability(PlayerId::new(1), land),
            Err(EngineError::NotController { entity: land, player: PlayerId::new(1) })
        );
        assert!(matches!(game.activate_mana_ability(p0, in_hand), Err(EngineError::WrongZone { .. })));
        assert_eq!(game.activate_mana_ability(p0, creature), Err(EngineError::NoManaAbility(creature)));
        assert_eq!(
            game.activate_mana_ability(p0, EntityId(500)),
            Err(EngineError::UnknownObject(EntityId(500)))
        );
    }

    #[test]
    fn test_declare_attacker() {
        let mut game = game();
        let p0 = PlayerId::new(0);
        let attacker = game.create_card(&bear(), p0, Zone::Battlefield);
        let p1 = EntityId::player(PlayerId::new(1));

        assert!(!game.declare_attacker(p0, attacker, EntityId::player(p0), false));
        assert!(game.declare_attacker(p0, attacker, p1, false));

        let card = game.state.card(attacker).unwrap();
        assert!(card.tapped);
        assert_eq!(card.attacking, Some(p1));
        assert!(!game.declare_attacker(p0, attacker, p1, false));
    }

    #[test]
    fn test_etb_trigger_targets_and_resolves() {
        let mut game = game();
        let target = game.create_card(&bear(), PlayerId::new(1), Zone::Battlefield);
        let bouncer = game.create_card(&bouncer(), PlayerId::new(0), Zone::Hand);

        game.put_onto_battlefield(bouncer, PlayerId::new(0)).unwrap();
        assert_eq!(game.queue.len(), 1);

        assert_eq!(game.run_stack().unwrap(), ResolutionStatus::Complete);
        assert_eq!(game.state.card(target).unwrap().zone, Zone::Hand);
    }

    #[test]
    fn test_fizzle_when_target_leaves() {
        let mut game = game();
        let target = game.create_card(&bear(), PlayerId::new(1), Zone::Battlefield);
        let bouncer = game.create_card(&bouncer(), PlayerId::new(0), Zone::Hand);

        game.put_onto_battlefield(bouncer, PlayerId::new(0)).unwrap();
        game.flush_triggers();
        assert_eq!(game.stack.len(), 1);

        game.move_card(target, Zone::Graveyard).unwrap();
        let entry = game.resolve_top().unwrap().unwrap();

        assert_eq!(entry.state, AbilityState::Failed);
        assert_eq!(game.state.card(target).unwrap().zone, Zone::Graveyard);
        assert!(game.state.permanent(bouncer).is_some());
    }

    #[test]
    fn test_manual_priority() {
        let mut game = Game::new(GameConfig::new(2).with_auto_pass(false)).unwrap();
        game.create_card(&bear(), PlayerId::new(1), Zone::Battlefield);
        let bouncer = game.create_card(&bouncer(), PlayerId::new(0), Zone::Hand);
        game.put_onto_battlefield(bouncer, PlayerId::new(0)).unwrap();

        assert_eq!(
            game.run_stack().unwrap(),
            ResolutionStatus::WaitingForPriority(PlayerId::new(0))
        );
        assert_eq!(
            game.pass_priority(PlayerId::new(0)).unwrap(),
            ResolutionStatus::WaitingForPriority(PlayerId::new(1))
        );
        assert_eq!(game.pass_priority(PlayerId::new(1)).unwrap(), ResolutionStatus::Complete);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut game = game();
        let creature = game.create_card(&bear(), PlayerId::new(0), Zone::Battlefield);

        let mut copy = game.copy();
        copy.state.tap(creature);

        assert!(!game.state.card(creature).unwrap().tapped);
        assert_ne!(game.snapshot().unwrap(), copy.snapshot().unwrap());
    }

    #[test]
    fn test_game_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Game>();
    }
}

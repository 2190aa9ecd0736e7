//! Filters: predicate bundles that select game objects.
//!
//! A `Filter` is a list of `Predicate`s that are ANDed together, checked
//! in insertion order and short-circuiting on the first miss. There are no
//! OR or NOT combinators: a card that needs "X or Y" uses two abilities.
//!
//! Filters are plain data. Cloning one gives a fully independent copy, which
//! is how card content reuses a filter template without aliasing it.
//!
//! ```
//! use ccg_rules::cards::CardType;
//! use ccg_rules::filter::{Filter, Predicate, TargetController};
//!
//! let mut filter = Filter::land_permanent("an opponent taps a land");
//! filter.add(Predicate::Controller(TargetController::Opponent));
//!
//! assert_eq!(filter.predicates().len(), 2);
//! assert_eq!(filter.predicates()[0], Predicate::CardType(CardType::Land));
//! ```

mod predicate;

pub use predicate::{FilterContext, Predicate, TargetController};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{CardInstance, CardType};
use crate::core::{GameState, Zone};

/// What kind of object a filter can match at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDomain {
    /// Only objects on the battlefield.
    Permanent,
    /// Cards in any zone.
    Card,
}

/// ANDed predicates over a domain, plus the text used to describe them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    domain: FilterDomain,
    predicates: Vec<Predicate>,
    message: String,
}

impl Filter {
    /// Empty filter over permanents: matches everything on the battlefield.
    #[must_use]
    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            domain: FilterDomain::Permanent,
            predicates: Vec::new(),
            message: message.into(),
        }
    }

    /// Empty filter over cards in any zone.
    #[must_use]
    pub fn card(message: impl Into<String>) -> Self {
        Self {
            domain: FilterDomain::Card,
            predicates: Vec::new(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn creature_permanent(message: impl Into<String>) -> Self {
        Self::permanent(message).with(Predicate::CardType(CardType::Creature))
    }

    #[must_use]
    pub fn land_permanent(message: impl Into<String>) -> Self {
        Self::permanent(message).with(Predicate::CardType(CardType::Land))
    }

    /// Add a predicate.
    pub fn add(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Add a predicate (builder pattern).
    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.add(predicate);
        self
    }

    #[must_use]
    pub fn domain(&self) -> FilterDomain {
        self.domain
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Does `object` pass every predicate?
    ///
    /// An empty filter matches every object of its domain.
    #[must_use]
    pub fn matches(&self, object: &CardInstance, ctx: &FilterContext, state: &GameState) -> bool {
        if self.domain == FilterDomain::Permanent && object.zone != Zone::Battlefield {
            return false;
        }

        match self.predicates.iter().find(|p| !p.matches(object, ctx, state)) {
            Some(failed) => {
                trace!(object = %object.id, predicate = ?failed, filter = %self.message, "filter miss");
                false
            }
            None => true,
        }
    }
}

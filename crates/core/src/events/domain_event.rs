//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by the record stores after successful mutations.
///
/// These events represent facts about data changes. Consumers (dashboards,
/// analytics views) treat them as a signal to recompute their derived values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// New deals were appended.
    DealsAdded { deal_ids: Vec<String> },

    /// Every deal was removed.
    DealsCleared,

    /// The profile was replaced or its goal changed.
    ProfileUpdated {
        /// Goal in effect after the update
        monthly_goal: Decimal,
    },
}

impl DomainEvent {
    /// Creates a DealsAdded event.
    pub fn deals_added(deal_ids: Vec<String>) -> Self {
        Self::DealsAdded { deal_ids }
    }

    /// Creates a DealsCleared event.
    pub fn deals_cleared() -> Self {
        Self::DealsCleared
    }

    /// Creates a ProfileUpdated event.
    pub fn profile_updated(monthly_goal: Decimal) -> Self {
        Self::ProfileUpdated { monthly_goal }
    }
}

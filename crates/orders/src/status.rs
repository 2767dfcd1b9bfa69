//! Order status lifecycle: a fixed transition table.

use serde::{Deserialize, Serialize};

/// Order status lifecycle.
///
/// `Completed` is terminal. `Cancelled` has exactly one outgoing edge, back
/// to `Pending` (reactivation) - the only backward edge in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, for exhaustive checks.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Whether the transition table allows moving from `self` to `to`.
    ///
    /// Pure and total: never panics, returns false for every illegal target,
    /// including self-transitions.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, to) {
            (Pending, Confirmed | Preparing | Cancelled) => true,
            (Confirmed, Preparing | Cancelled) => true,
            (Preparing, Ready | Cancelled) => true,
            (Ready, Completed | Cancelled) => true,
            // Reactivation: the only way out of Cancelled.
            (Cancelled, Pending) => true,
            _ => false,
        }
    }

    /// True only for `Completed` (no outgoing transitions).
    pub fn is_final(self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Whether an order in this status may still be cancelled.
    pub fn can_be_cancelled(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending
                | OrderStatus::Confirmed
                | OrderStatus::Preparing
                | OrderStatus::Ready
        )
    }

    /// Human-facing display text, used in transition error diagnostics.
    pub fn description(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending confirmation",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Being prepared",
            OrderStatus::Ready => "Ready for pickup",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

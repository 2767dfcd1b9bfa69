//! Domain events recorded by the `Order` aggregate.
//!
//! The aggregate records these in its pending buffer and never dispatches
//! them itself; notification and analytics collaborators consume them after
//! the surrounding transaction commits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plateful_catalog::{MenuItemId, RestaurantId};
use plateful_core::UserId;
use plateful_events::Event;

use crate::item::OrderItemId;
use crate::order::OrderId;
use crate::status::OrderStatus;

/// Event: OrderCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub order_number: String,
    pub requester_id: UserId,
    pub restaurant_id: RestaurantId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub order_id: OrderId,
    pub order_item_id: OrderItemId,
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub order_id: OrderId,
    pub order_item_id: OrderItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StatusChanged. Emitted by both the validated and the unconditional
/// status paths; `previous`/`next` let consumers react to the specific edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    pub order_id: OrderId,
    pub previous: OrderStatus,
    pub next: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

/// Event: InstructionsUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionsUpdated {
    pub order_id: OrderId,
    pub instructions: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PickupTimeSet (explicit caller override, distinct from the
/// automatic estimate applied on entering `Ready`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupTimeSet {
    pub order_id: OrderId,
    pub estimated_pickup_at: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderCreated(OrderCreated),
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    StatusChanged(StatusChanged),
    InstructionsUpdated(InstructionsUpdated),
    PickupTimeSet(PickupTimeSet),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderCreated(_) => "orders.order.created",
            OrderEvent::ItemAdded(_) => "orders.order.item_added",
            OrderEvent::ItemRemoved(_) => "orders.order.item_removed",
            OrderEvent::StatusChanged(_) => "orders.order.status_changed",
            OrderEvent::InstructionsUpdated(_) => "orders.order.instructions_updated",
            OrderEvent::PickupTimeSet(_) => "orders.order.pickup_time_set",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderCreated(e) => e.occurred_at,
            OrderEvent::ItemAdded(e) => e.occurred_at,
            OrderEvent::ItemRemoved(e) => e.occurred_at,
            OrderEvent::StatusChanged(e) => e.occurred_at,
            OrderEvent::InstructionsUpdated(e) => e.occurred_at,
            OrderEvent::PickupTimeSet(e) => e.occurred_at,
        }
    }
}

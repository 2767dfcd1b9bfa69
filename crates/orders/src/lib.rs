//! Orders domain module.
//!
//! This crate contains the business rules for customer orders: the status
//! state machine, line items, and the `Order` aggregate root, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod event;
pub mod item;
pub mod order;
pub mod status;

pub use event::{
    InstructionsUpdated, ItemAdded, ItemRemoved, OrderCreated, OrderEvent, PickupTimeSet,
    StatusChanged,
};
pub use item::{OrderItem, OrderItemId};
pub use order::{Order, OrderId, READY_PICKUP_BUFFER_MINUTES};
pub use status::OrderStatus;

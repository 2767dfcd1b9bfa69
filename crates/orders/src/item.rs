//! Order line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plateful_catalog::MenuItemId;
use plateful_core::{AggregateId, DomainError, DomainResult, Entity, Money};

use crate::order::OrderId;

/// Order item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub AggregateId);

impl OrderItemId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A line entry on an order.
///
/// Carries the menu item reference plus a denormalized display name and unit
/// price, so the order keeps rendering correctly after menu edits. The
/// subtotal is computed on demand, never cached.
///
/// Items are compared by identity only; `PartialEq` is deliberately not
/// derived. Collection membership inside [`crate::Order`] goes through
/// [`OrderItemId`]. Business comparisons that care about values compare the
/// relevant fields explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    menu_item_id: MenuItemId,
    name: String,
    unit_price: Money,
    quantity: u32,
    note: Option<String>,
    /// Owning order, if attached. An item belongs to at most one order.
    order_id: Option<OrderId>,
    updated_at: DateTime<Utc>,
}

impl OrderItem {
    /// Create a standalone (not yet attached) item with a generated id.
    pub fn new(
        menu_item_id: MenuItemId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        note: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Self::check_quantity(quantity)?;

        Ok(Self {
            id: OrderItemId::new(AggregateId::new()),
            menu_item_id,
            name,
            unit_price,
            quantity,
            note,
            order_id: None,
            updated_at: at,
        })
    }

    pub fn id_typed(&self) -> OrderItemId {
        self.id
    }

    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Unit price x quantity, exact decimal, same currency as the unit price.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Change the quantity; fails for quantities below 1.
    ///
    /// Refreshes the last-modified marker on success.
    pub fn update_quantity(&mut self, quantity: u32, at: DateTime<Utc>) -> DomainResult<()> {
        Self::check_quantity(quantity)?;
        self.quantity = quantity;
        self.updated_at = at;
        Ok(())
    }

    /// Replace the free-text note unconditionally, including with absence.
    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Set or clear the back-reference to the owning order.
    ///
    /// Does not recompute the owning order's total; that happens in the
    /// aggregate's add/remove operations.
    pub(crate) fn attach_to(&mut self, order_id: Option<OrderId>) {
        self.order_id = order_id;
    }

    fn check_quantity(quantity: u32) -> DomainResult<()> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(())
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

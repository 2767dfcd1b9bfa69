//! The `Order` aggregate root.
//!
//! All mutation of an order and its line items goes through this type: it is
//! the single place deciding whether a change is legal and what else must
//! happen as a result (derived total, status timestamps, domain events).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use plateful_catalog::RestaurantId;
use plateful_core::{
    AggregateId, AggregateRoot, DomainError, DomainResult, Money, UserId,
};
use plateful_events::EventBuffer;

use crate::event::{
    InstructionsUpdated, ItemAdded, ItemRemoved, OrderCreated, OrderEvent, PickupTimeSet,
    StatusChanged,
};
use crate::item::{OrderItem, OrderItemId};
use crate::status::OrderStatus;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub AggregateId);

impl OrderId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Estimate applied when an order first becomes `Ready` without one.
pub const READY_PICKUP_BUFFER_MINUTES: i64 = 15;

/// Aggregate root: Order.
///
/// The total is derived: it always equals the exact sum of the current items'
/// subtotals, recomputed synchronously on every structural change. The value
/// declared at creation is authoritative only while the item collection is
/// empty.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    /// Human-facing number, assigned at creation and never regenerated.
    order_number: String,
    requester_id: UserId,
    restaurant_id: RestaurantId,
    status: OrderStatus,
    total: Money,
    special_instructions: Option<String>,
    items: Vec<OrderItem>,
    created_at: DateTime<Utc>,
    estimated_pickup_at: Option<DateTime<Utc>>,
    picked_up_at: Option<DateTime<Utc>>,
    events: EventBuffer<OrderEvent>,
    version: u64,
}

impl Order {
    /// Create a new order in `Pending` status with an empty item collection.
    ///
    /// Records one `OrderCreated` event. `initial_total` is the
    /// caller-declared amount (e.g. computed from a yet-to-be-attached item
    /// list); it also fixes the order's currency.
    pub fn create(
        order_number: impl Into<String>,
        requester_id: UserId,
        restaurant_id: RestaurantId,
        initial_total: Money,
        special_instructions: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let order_number = order_number.into();
        if order_number.trim().is_empty() {
            return Err(DomainError::validation("order number cannot be empty"));
        }

        let id = OrderId::new(AggregateId::new());
        let mut order = Self {
            id,
            order_number: order_number.clone(),
            requester_id,
            restaurant_id,
            status: OrderStatus::Pending,
            total: initial_total,
            special_instructions,
            items: Vec::new(),
            created_at: at,
            estimated_pickup_at: None,
            picked_up_at: None,
            events: EventBuffer::new(),
            version: 0,
        };

        order.record(OrderEvent::OrderCreated(OrderCreated {
            order_id: id,
            order_number,
            requester_id,
            restaurant_id,
            occurred_at: at,
        }));
        Ok(order)
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn requester_id(&self) -> UserId {
        self.requester_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    /// Read-only view of the items, in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Owned snapshot of the items; mutating it cannot affect the aggregate.
    pub fn items_snapshot(&self) -> Vec<OrderItem> {
        self.items.clone()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn estimated_pickup_at(&self) -> Option<DateTime<Utc>> {
        self.estimated_pickup_at
    }

    pub fn picked_up_at(&self) -> Option<DateTime<Utc>> {
        self.picked_up_at
    }

    /// True while the order is still in flight (not completed, not cancelled).
    pub fn is_active(&self) -> bool {
        !matches!(self.status, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whole minutes elapsed since creation, clamped to zero.
    pub fn minutes_since_creation(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_minutes().max(0)
    }

    /// Pending domain events, in emission order.
    pub fn pending_events(&self) -> &[OrderEvent] {
        self.events.pending()
    }

    /// Drain the pending events (publish-after-commit path).
    pub fn take_events(&mut self) -> Vec<OrderEvent> {
        self.events.take()
    }

    /// Drop the pending events. Idempotent.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Attach an item and recompute the total as the sum of all subtotals.
    ///
    /// Fails without mutating if the item already belongs to an order or its
    /// currency does not match the order's.
    pub fn add_item(&mut self, mut item: OrderItem, at: DateTime<Utc>) -> DomainResult<OrderEvent> {
        if item.order_id().is_some() {
            return Err(DomainError::invariant(
                "item already belongs to an order",
            ));
        }

        // Validate the new total before touching any state.
        let new_total = self.sum_with(Some(&item))?;

        item.attach_to(Some(self.id));
        let event = OrderEvent::ItemAdded(ItemAdded {
            order_id: self.id,
            order_item_id: item.id_typed(),
            menu_item_id: item.menu_item_id(),
            quantity: item.quantity(),
            occurred_at: at,
        });
        self.items.push(item);
        self.total = new_total;
        Ok(self.record(event))
    }

    /// Detach and remove an item, recomputing the total.
    ///
    /// Returns the detached item (back-reference cleared). An id not present
    /// in the collection is a no-op, not an error: nothing changes and no
    /// event is recorded.
    pub fn remove_item(
        &mut self,
        item_id: OrderItemId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<OrderItem>> {
        let Some(index) = self.items.iter().position(|i| i.id_typed() == item_id) else {
            return Ok(None);
        };

        let mut item = self.items.remove(index);
        item.attach_to(None);
        self.total = self.sum_with(None)?;
        self.record(OrderEvent::ItemRemoved(ItemRemoved {
            order_id: self.id,
            order_item_id: item_id,
            occurred_at: at,
        }));
        Ok(Some(item))
    }

    /// Unconditional status assignment.
    ///
    /// Administrative/migration use only; normal request paths go through
    /// [`Order::update_status`]. Does not consult the transition table but
    /// still applies the on-enter side effects of the resulting status and
    /// records a `StatusChanged` event.
    pub fn change_status(&mut self, next: OrderStatus, at: DateTime<Utc>) -> OrderEvent {
        self.apply_status(next, at)
    }

    /// Validated status change per the transition table.
    ///
    /// Illegal transitions fail with [`DomainError::InvalidTransition`]
    /// carrying both state descriptions; state and event buffer are left
    /// untouched.
    pub fn update_status(
        &mut self,
        next: OrderStatus,
        at: DateTime<Utc>,
    ) -> DomainResult<OrderEvent> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_transition(
                self.status.description(),
                next.description(),
            ));
        }
        Ok(self.apply_status(next, at))
    }

    /// Validated transition to `Cancelled`.
    ///
    /// Fails (rather than silently no-opping) when the current status does
    /// not allow cancellation, notably `Completed`.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> DomainResult<OrderEvent> {
        if !self.status.can_be_cancelled() {
            return Err(DomainError::invalid_transition(
                self.status.description(),
                OrderStatus::Cancelled.description(),
            ));
        }
        Ok(self.apply_status(OrderStatus::Cancelled, at))
    }

    /// Replace the special instructions (including with absence).
    pub fn set_special_instructions(
        &mut self,
        instructions: Option<String>,
        at: DateTime<Utc>,
    ) -> OrderEvent {
        self.special_instructions = instructions.clone();
        self.record(OrderEvent::InstructionsUpdated(InstructionsUpdated {
            order_id: self.id,
            instructions,
            occurred_at: at,
        }))
    }

    /// Explicitly set the estimated pickup time (caller override).
    ///
    /// The automatic estimate on entering `Ready` never overwrites a value;
    /// this operation does.
    pub fn set_estimated_pickup(
        &mut self,
        estimated_pickup_at: DateTime<Utc>,
        at: DateTime<Utc>,
    ) -> DomainResult<OrderEvent> {
        if estimated_pickup_at < self.created_at {
            return Err(DomainError::validation(
                "estimated pickup time cannot be before the order was created",
            ));
        }
        self.estimated_pickup_at = Some(estimated_pickup_at);
        Ok(self.record(OrderEvent::PickupTimeSet(PickupTimeSet {
            order_id: self.id,
            estimated_pickup_at,
            occurred_at: at,
        })))
    }

    fn apply_status(&mut self, next: OrderStatus, at: DateTime<Utc>) -> OrderEvent {
        let previous = self.status;
        self.status = next;
        self.on_enter(next, at);
        self.record(OrderEvent::StatusChanged(StatusChanged {
            order_id: self.id,
            previous,
            next,
            occurred_at: at,
        }))
    }

    /// On-enter side-effect table, shared by both status paths.
    fn on_enter(&mut self, entered: OrderStatus, at: DateTime<Utc>) {
        match entered {
            OrderStatus::Ready => {
                // First entry only; an existing estimate is never overwritten
                // or cleared automatically.
                if self.estimated_pickup_at.is_none() {
                    self.estimated_pickup_at =
                        Some(at + Duration::minutes(READY_PICKUP_BUFFER_MINUTES));
                }
            }
            OrderStatus::Completed => {
                if self.picked_up_at.is_none() {
                    self.picked_up_at = Some(at);
                }
            }
            _ => {}
        }
    }

    /// Sum of all current item subtotals (plus `extra`, if given) in the
    /// order's currency. Zero items means a zero total.
    fn sum_with(&self, extra: Option<&OrderItem>) -> DomainResult<Money> {
        let mut total = Money::zero(self.total.currency());
        for item in self.items.iter().chain(extra) {
            total = total.add(&item.subtotal())?;
        }
        Ok(total)
    }

    /// Record one event and bump the aggregate version.
    fn record(&mut self, event: OrderEvent) -> OrderEvent {
        self.events.record(event.clone());
        self.version += 1;
        event
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use plateful_catalog::MenuItemId;
    use plateful_core::Currency;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn usd() -> Currency {
        Currency::new("USD").unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn minutes(m: i64) -> Duration {
        Duration::minutes(m)
    }

    fn test_order() -> Order {
        Order::create(
            "ORD-001",
            UserId::new(),
            RestaurantId::new(AggregateId::new()),
            Money::zero(usd()),
            None,
            t0(),
        )
        .unwrap()
    }

    fn item(name: &str, unit_price: Decimal, quantity: u32) -> OrderItem {
        OrderItem::new(
            MenuItemId::new(AggregateId::new()),
            name,
            Money::new(unit_price, usd()),
            quantity,
            None,
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn create_starts_pending_with_one_creation_event() {
        let order = test_order();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.items().is_empty());
        assert_eq!(order.order_number(), "ORD-001");
        assert_eq!(order.version(), 1);

        assert_eq!(order.pending_events().len(), 1);
        match &order.pending_events()[0] {
            OrderEvent::OrderCreated(e) => {
                assert_eq!(e.order_id, order.id_typed());
                assert_eq!(e.order_number, "ORD-001");
                assert_eq!(e.requester_id, order.requester_id());
                assert_eq!(e.restaurant_id, order.restaurant_id());
            }
            other => panic!("expected OrderCreated, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_blank_order_number() {
        let err = Order::create(
            "  ",
            UserId::new(),
            RestaurantId::new(AggregateId::new()),
            Money::zero(usd()),
            None,
            t0(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn declared_total_is_authoritative_only_while_empty() {
        let order = Order::create(
            "ORD-002",
            UserId::new(),
            RestaurantId::new(AggregateId::new()),
            Money::new(dec!(99.99), usd()),
            None,
            t0(),
        )
        .unwrap();
        assert_eq!(order.total().amount(), dec!(99.99));

        let mut order = order;
        order.add_item(item("Margherita", dec!(12.50), 2), t0()).unwrap();
        assert_eq!(order.total().amount(), dec!(25.00));
    }

    #[test]
    fn worked_example_total_and_removal() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 2), t0()).unwrap();
        let salad = order
            .add_item(item("Caesar salad", dec!(8.50), 1), t0())
            .unwrap();
        assert_eq!(order.total().amount(), dec!(33.50));

        let salad_id = match salad {
            OrderEvent::ItemAdded(e) => e.order_item_id,
            other => panic!("expected ItemAdded, got {other:?}"),
        };
        let removed = order.remove_item(salad_id, t0()).unwrap();
        assert!(removed.is_some());
        assert_eq!(order.total().amount(), dec!(25.00));
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn added_items_point_back_at_the_order() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 1), t0()).unwrap();
        order.add_item(item("Caesar salad", dec!(8.50), 1), t0()).unwrap();
        for it in order.items() {
            assert_eq!(it.order_id(), Some(order.id_typed()));
        }
    }

    #[test]
    fn removed_item_is_detached() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 1), t0()).unwrap();
        let id = order.items()[0].id_typed();

        let removed = order.remove_item(id, t0()).unwrap().unwrap();
        assert_eq!(removed.order_id(), None);
        assert!(order.items().is_empty());
        assert!(order.total().is_zero());
    }

    #[test]
    fn removing_absent_item_is_a_noop() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 2), t0()).unwrap();
        let events_before = order.pending_events().len();
        let total_before = order.total();

        let removed = order
            .remove_item(OrderItemId::new(AggregateId::new()), t0())
            .unwrap();
        assert!(removed.is_none());
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), total_before);
        assert_eq!(order.pending_events().len(), events_before);
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn cannot_add_an_already_attached_item() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 1), t0()).unwrap();
        let attached = order.items()[0].clone();

        let mut other = test_order();
        let err = other.add_item(attached, t0()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(other.items().is_empty());
    }

    #[test]
    fn currency_mismatch_fails_without_partial_mutation() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 1), t0()).unwrap();

        let foreign = OrderItem::new(
            MenuItemId::new(AggregateId::new()),
            "Bratwurst",
            Money::new(dec!(7.00), Currency::new("EUR").unwrap()),
            1,
            None,
            t0(),
        )
        .unwrap();

        let events_before = order.pending_events().len();
        let err = order.add_item(foreign, t0()).unwrap_err();
        assert!(matches!(err, DomainError::CurrencyMismatch { .. }));
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total().amount(), dec!(12.50));
        assert_eq!(order.pending_events().len(), events_before);
    }

    #[test]
    fn snapshot_mutation_does_not_affect_the_aggregate() {
        let mut order = test_order();
        order.add_item(item("Margherita", dec!(12.50), 2), t0()).unwrap();

        let mut snapshot = order.items_snapshot();
        snapshot[0].update_quantity(9, t0()).unwrap();
        snapshot.clear();

        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), 2);
        assert_eq!(order.total().amount(), dec!(25.00));
    }

    #[test]
    fn update_status_rejects_skipping_ahead() {
        let mut order = test_order();
        let err = order.update_status(OrderStatus::Ready, t0()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: "Pending confirmation".to_string(),
                to: "Ready for pickup".to_string(),
            }
        );
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.pending_events().len(), 1); // creation only
    }

    #[test]
    fn happy_path_succeeds_stepwise() {
        let mut order = test_order();
        let steps = [
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ];
        for (i, step) in steps.iter().enumerate() {
            let at = t0() + minutes(i as i64 + 1);
            let event = order.update_status(*step, at).unwrap();
            match event {
                OrderEvent::StatusChanged(e) => assert_eq!(e.next, *step),
                other => panic!("expected StatusChanged, got {other:?}"),
            }
            assert_eq!(order.status(), *step);
        }
        assert!(order.status().is_final());
        assert!(!order.is_active());
    }

    #[test]
    fn preparing_cannot_jump_to_completed() {
        let mut order = test_order();
        order.update_status(OrderStatus::Confirmed, t0()).unwrap();
        order.update_status(OrderStatus::Preparing, t0()).unwrap();

        let err = order
            .update_status(OrderStatus::Completed, t0())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(order.status(), OrderStatus::Preparing);
    }

    #[test]
    fn cancel_from_ready_succeeds_from_completed_fails() {
        let mut order = test_order();
        order.update_status(OrderStatus::Confirmed, t0()).unwrap();
        order.update_status(OrderStatus::Preparing, t0()).unwrap();
        order.update_status(OrderStatus::Ready, t0()).unwrap();

        let mut completed = order.clone();
        completed
            .update_status(OrderStatus::Completed, t0())
            .unwrap();
        let err = completed.cancel(t0()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(completed.status(), OrderStatus::Completed);

        order.cancel(t0()).unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(!order.is_active());
    }

    #[test]
    fn entering_ready_sets_pickup_estimate_once() {
        let mut order = test_order();
        order.update_status(OrderStatus::Confirmed, t0()).unwrap();
        order.update_status(OrderStatus::Preparing, t0()).unwrap();

        let ready_at = t0() + minutes(10);
        order.update_status(OrderStatus::Ready, ready_at).unwrap();
        let estimate = order.estimated_pickup_at().unwrap();
        assert!(estimate >= ready_at);
        assert_eq!(estimate, ready_at + minutes(READY_PICKUP_BUFFER_MINUTES));

        // Reactivate and progress back to Ready much later: the original
        // estimate survives.
        order.cancel(ready_at + minutes(1)).unwrap();
        order
            .update_status(OrderStatus::Pending, ready_at + minutes(2))
            .unwrap();
        order
            .update_status(OrderStatus::Preparing, ready_at + minutes(3))
            .unwrap();
        order
            .update_status(OrderStatus::Ready, ready_at + minutes(60))
            .unwrap();
        assert_eq!(order.estimated_pickup_at(), Some(estimate));
    }

    #[test]
    fn completing_sets_actual_pickup_time() {
        let mut order = test_order();
        order.update_status(OrderStatus::Confirmed, t0()).unwrap();
        order.update_status(OrderStatus::Preparing, t0()).unwrap();
        order.update_status(OrderStatus::Ready, t0()).unwrap();
        assert_eq!(order.picked_up_at(), None);

        let done_at = t0() + minutes(30);
        order.update_status(OrderStatus::Completed, done_at).unwrap();
        assert_eq!(order.picked_up_at(), Some(done_at));
    }

    #[test]
    fn change_status_bypasses_the_table_but_keeps_side_effects() {
        let mut order = test_order();
        let at = t0() + minutes(5);

        // Pending -> Completed is illegal for update_status.
        assert!(order.update_status(OrderStatus::Completed, at).is_err());

        let event = order.change_status(OrderStatus::Completed, at);
        match event {
            OrderEvent::StatusChanged(e) => {
                assert_eq!(e.previous, OrderStatus::Pending);
                assert_eq!(e.next, OrderStatus::Completed);
            }
            other => panic!("expected StatusChanged, got {other:?}"),
        }
        assert_eq!(order.status(), OrderStatus::Completed);
        assert_eq!(order.picked_up_at(), Some(at));
    }

    #[test]
    fn reactivation_is_the_only_exit_from_cancelled() {
        let mut order = test_order();
        order.cancel(t0()).unwrap();
        assert!(order.update_status(OrderStatus::Confirmed, t0()).is_err());
        assert!(order.cancel(t0()).is_err()); // no self-transition

        order.update_status(OrderStatus::Pending, t0()).unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.is_active());
    }

    #[test]
    fn instructions_are_replaced_including_with_absence() {
        let mut order = test_order();
        order.set_special_instructions(Some("ring the bell".to_string()), t0());
        assert_eq!(order.special_instructions(), Some("ring the bell"));

        order.set_special_instructions(None, t0());
        assert_eq!(order.special_instructions(), None);
    }

    #[test]
    fn explicit_pickup_estimate_overrides_and_validates() {
        let mut order = test_order();
        let err = order
            .set_estimated_pickup(t0() - minutes(5), t0())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let slot = t0() + minutes(45);
        order.set_estimated_pickup(slot, t0()).unwrap();
        assert_eq!(order.estimated_pickup_at(), Some(slot));
    }

    #[test]
    fn minutes_since_creation_never_negative() {
        let order = test_order();
        assert_eq!(order.minutes_since_creation(t0() - minutes(10)), 0);
        assert_eq!(order.minutes_since_creation(t0() + minutes(90)), 90);
    }

    #[test]
    fn every_mutation_records_exactly_one_event() {
        let mut order = test_order();
        assert_eq!(order.pending_events().len(), 1);

        order.add_item(item("Margherita", dec!(12.50), 1), t0()).unwrap();
        assert_eq!(order.pending_events().len(), 2);

        let id = order.items()[0].id_typed();
        order.remove_item(id, t0()).unwrap();
        assert_eq!(order.pending_events().len(), 3);

        order.update_status(OrderStatus::Confirmed, t0()).unwrap();
        assert_eq!(order.pending_events().len(), 4);

        order.set_special_instructions(Some("no onions".to_string()), t0());
        assert_eq!(order.pending_events().len(), 5);

        order.set_estimated_pickup(t0() + minutes(30), t0()).unwrap();
        assert_eq!(order.pending_events().len(), 6);
        assert_eq!(order.version(), 6);

        order.clear_events();
        assert!(order.pending_events().is_empty());
        order.clear_events();
        assert!(order.pending_events().is_empty());
    }

    #[test]
    fn failed_mutations_record_nothing() {
        let mut order = test_order();
        let before = order.pending_events().len();

        assert!(order.update_status(OrderStatus::Ready, t0()).is_err());
        assert!(order.set_estimated_pickup(t0() - minutes(1), t0()).is_err());
        assert_eq!(order.pending_events().len(), before);
        assert_eq!(order.version(), before as u64);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any add/remove sequence the total equals the exact
        /// sum of the remaining items' subtotals.
        #[test]
        fn total_always_equals_sum_of_subtotals(
            entries in prop::collection::vec(
                (1u32..10_000u32, 1u32..10u32, any::<bool>()),
                1..8,
            )
        ) {
            let mut order = test_order();
            let mut kept = Vec::new();

            for (cents, quantity, keep) in &entries {
                let unit = Decimal::new(i64::from(*cents), 2);
                let event = order
                    .add_item(item("Daily special", unit, *quantity), t0())
                    .unwrap();
                let id = match event {
                    OrderEvent::ItemAdded(e) => e.order_item_id,
                    _ => unreachable!(),
                };
                if *keep {
                    kept.push(unit * Decimal::from(*quantity));
                } else {
                    order.remove_item(id, t0()).unwrap();
                }
            }

            let expected: Decimal = kept.iter().sum();
            prop_assert_eq!(order.total().amount(), expected);
            prop_assert_eq!(order.items().len(), kept.len());
        }
    }
}

//! Catalog interface boundary: restaurant and menu identifiers.
//!
//! Restaurant and menu management are separate modules (CRUD over the web
//! layer); the order core only ever sees their ids.

pub mod id;

pub use id::{MenuItemId, RestaurantId};

//! Domain events: the trait, the per-aggregate pending buffer, and the
//! envelope handed to persistence/dispatch collaborators.

pub mod buffer;
pub mod envelope;
pub mod event;

pub use buffer::EventBuffer;
pub use envelope::EventEnvelope;
pub use event::Event;

//! Dataflow primitives shared by every carousel instance
//!
//! - **[`Relay`]** - event channel from a DOM listener into an Actor
//! - **[`Actor`]** - single owner of a reactive value
//!
//! Relays follow the `{source}_{event}_relay` naming pattern, and all
//! state changes happen inside Actor loops.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{relay, Relay};

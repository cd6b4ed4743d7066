//! Conversation & view controller.
//!
//! - `scheduler`: spawns delayed transitions guarded by a cancellation token
//! - `view_controller`: the public async façade renderers talk to

mod scheduler;
mod view_controller;

pub use view_controller::{EVENT_CAPACITY, ViewController};

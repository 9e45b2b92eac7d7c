//! splitspree-core
//!
//! Business logic for SplitSpree: the action reducer, balance calculator,
//! debt settlement, and per-user summaries. Depends on splitspree-domain.
//! No UI, no AI calls, no storage — external collaborators plug in through
//! the contracts module.

pub mod action;
pub mod balance;
pub mod contracts;
pub mod error;
pub mod settlement;
pub mod store;
pub mod summary;
pub mod utils;
pub mod validate;

pub use action::*;
pub use balance::*;
pub use contracts::*;
pub use error::CoreError;
pub use settlement::*;
pub use store::*;
pub use summary::*;
pub use validate::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SplitSpree core tracing initialized.");
    });
}

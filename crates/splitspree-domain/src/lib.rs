//! splitspree-domain
//!
//! Pure domain models for bill splitting (User, Item, Receipt, AppState).
//! No I/O, no services, no AI glue. Only data types and lookup helpers.

pub mod common;
pub mod item;
pub mod receipt;
pub mod state;
pub mod user;

pub use common::*;
pub use item::*;
pub use receipt::*;
pub use state::*;
pub use user::*;

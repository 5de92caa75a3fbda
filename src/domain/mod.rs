//! Domain value objects and types.
//!
//! This module contains the small, pure building blocks the search core is
//! made of: the handle kind tag, phone normalization and display-name
//! derivation. None of it touches a database.

pub mod errors;
pub mod handle;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use handle::HandleKind;
pub use name::{display_name, UNKNOWN_NAME};
pub use phone::normalize_phone;

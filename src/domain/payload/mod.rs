// SPDX-License-Identifier: MPL-2.0
//! Backend payload types: users, associations and their dynamic data.

pub mod association;
pub mod user;
pub mod value;

pub use association::{decode_associations, Association, AssociationType, ViewMode};
pub use user::{Profile, User};
pub use value::AnyValue;

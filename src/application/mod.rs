// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`capabilities`]: Concurrent capability status refresh
//! - [`session`]: Explicit session context (user, token, view navigation)
//! - [`auth`]: Login, registration and biometric unlock
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Drivers (CLI, UI shells) use application layer services

pub mod auth;
pub mod capabilities;
pub mod port;
pub mod session;

pub use auth::{AuthFlow, BiometricOutcome};
pub use capabilities::{CapabilityCenter, CapabilityReport};
pub use session::{Session, ViewNavigation};

//! WebForm domain logic.
//!
//! Pure, IO-free building blocks shared by the API and repository layers:
//! the blueprint document model, the validation rule set, the intake
//! wizard state machine, and the template catalog.

pub mod blueprint;
pub mod error;
pub mod roles;
pub mod storage;
pub mod templates;
pub mod types;
pub mod validation;
pub mod wizard;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blueprint_repo;
pub mod message_repo;
pub mod room_repo;
pub mod user_repo;

pub use blueprint_repo::BlueprintRepo;
pub use message_repo::MessageRepo;
pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;

//! Shared collaborator systems that behaviors borrow from the service container.

pub mod combat;
pub mod dispersal;
pub mod feeding;
pub mod health;
pub mod perception;

pub use combat::{AttackAction, AttackKind, AttackResult, CombatSystem};
pub use dispersal::SeedDispersalSystem;
pub use feeding::{FeedingOutcome, FeedingSystem};
pub use health::HealthSystem;
pub use perception::PerceptionSystem;

//! Emberfall Battle Engine
//!
//! An active-time battle core for a classic party-vs-encounter RPG:
//! readiness scheduling over continuous time, queued action resolution, a
//! swappable enemy controller, and victory/defeat detection. The engine
//! renders nothing; a presentation layer drives the clock and polls
//! notifications.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod errors;
pub mod project;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `emberfall` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions.
pub use schema::{
    // Supporting Types & Enums
    BaseStats,
    CharacterId,
    // Core Data Structs
    CharacterTemplate,
    DropEntry,
    Encounter,
    EnemyId,
    EnemyTemplate,
    ItemData,
    ItemId,
    PartyMemberParams,
    // Core Enums
    Row,
    Side,
    SkillData,
    SkillId,
    SkillKind,
    SkillTarget,
    StateId,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine state and orchestration.
pub use battle::state::{Battle, Notification, DEFAULT_BASE_TURN_SECONDS};

// Core runtime types for a battle.
pub use battle::action::{Action, Hit, HitOutcome};
pub use battle::ai::{Controller, RandomController};
pub use battle::combatant::CombatantStatus;
pub use battle::rng::BattleRng;

// Primary data access.
pub use project::ProjectData;

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, ProjectDataError, ProjectDataResult, SetupError,
};

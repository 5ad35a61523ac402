use schema::{CharacterId, EnemyId, ItemId, SkillId};
use std::fmt;

/// Main error type for the Emberfall battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// Error related to project-data lookup
    ProjectData(ProjectDataError),
    /// Error related to assembling a battle
    Setup(SetupError),
}

/// Errors related to project-data lookup operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectDataError {
    /// No character template registered under the given id
    CharacterNotFound(CharacterId),
    /// No enemy template registered under the given id
    EnemyNotFound(EnemyId),
    /// No skill catalog entry registered under the given id
    SkillNotFound(SkillId),
    /// No item catalog entry registered under the given id
    ItemNotFound(ItemId),
}

/// Errors related to battle construction preconditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A battle needs at least one party member
    EmptyParty,
    /// A battle needs at least one encounter unit
    EmptyEncounter,
    /// Every party id needs a matching parameter block
    PartySizeMismatch { ids: usize, params: usize },
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::ProjectData(err) => write!(f, "Project data error: {}", err),
            BattleError::Setup(err) => write!(f, "Battle setup error: {}", err),
        }
    }
}

impl fmt::Display for ProjectDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectDataError::CharacterNotFound(id) => {
                write!(f, "Character template not found: {}", id)
            }
            ProjectDataError::EnemyNotFound(id) => write!(f, "Enemy template not found: {}", id),
            ProjectDataError::SkillNotFound(id) => write!(f, "Skill not found: {}", id),
            ProjectDataError::ItemNotFound(id) => write!(f, "Item not found: {}", id),
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyParty => write!(f, "Battle requires at least one party member"),
            SetupError::EmptyEncounter => write!(f, "Battle requires at least one enemy unit"),
            SetupError::PartySizeMismatch { ids, params } => write!(
                f,
                "Party has {} ids but {} parameter blocks",
                ids, params
            ),
        }
    }
}

impl std::error::Error for BattleError {}
impl std::error::Error for ProjectDataError {}
impl std::error::Error for SetupError {}

impl From<ProjectDataError> for BattleError {
    fn from(err: ProjectDataError) -> Self {
        BattleError::ProjectData(err)
    }
}

impl From<SetupError> for BattleError {
    fn from(err: SetupError) -> Self {
        BattleError::Setup(err)
    }
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using ProjectDataError
pub type ProjectDataResult<T> = Result<T, ProjectDataError>;

//! Error types for battle commands.

/// Reasons a player action is rejected.
///
/// Rejections are diagnostic, never fatal: the session logs them and
/// leaves all state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("battle is not active")]
    BattleInactive,

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("combatant is defeated")]
    CombatantDefeated,

    #[error("a status condition prevents acting")]
    UnableToAct,

    #[error("skill index {index} out of range (loadout holds {count})")]
    SkillIndexOutOfRange { index: usize, count: usize },

    #[error("skill '{name}' has no PP left")]
    OutOfPp { name: String },
}

//! Error types for view state

use crate::form::FormPhase;
use crate::phase::PhaseKind;

/// Illegal phase change attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Item element cannot move between these phases
    #[error("illegal item transition: {from:?} -> {to:?}")]
    Item {
        /// Current phase
        from: PhaseKind,
        /// Requested phase
        to: PhaseKind,
    },

    /// Form panel cannot move between these phases
    #[error("illegal form transition: {from:?} -> {to:?}")]
    Form {
        /// Current phase
        from: FormPhase,
        /// Requested phase
        to: FormPhase,
    },
}

/// Sort control value not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected none, name-asc, price-asc or price-desc)")]
pub struct UnknownSortKey(pub String);

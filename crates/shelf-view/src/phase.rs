//! Per-item visibility state machine
//!
//! Hiding is a two-step affair: the item fades out, and once its timer is due
//! it is removed from layout. Each item carries at most one pending timer,
//! stored in the phase itself, so a later filter pass replaces it rather than
//! racing it.

use crate::error::TransitionError;
use std::time::{Duration, Instant};

/// Visibility of a rendered item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// Displayed and opaque
    Visible,
    /// Transparent, still in layout until `due`
    FadingOut {
        /// When the item leaves layout
        due: Instant,
    },
    /// Out of layout
    Hidden,
}

/// Phase without timer data, for transition tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Visible,
    FadingOut,
    Hidden,
}

impl ItemPhase {
    /// Discriminant without timer data
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Visible => PhaseKind::Visible,
            Self::FadingOut { .. } => PhaseKind::FadingOut,
            Self::Hidden => PhaseKind::Hidden,
        }
    }

    /// Check if fully shown
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Pending timer, if fading
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::FadingOut { due } => Some(*due),
            _ => None,
        }
    }

    /// Move towards shown. Returns `true` if the item was not visible before.
    pub fn show(&mut self) -> bool {
        if self.is_visible() {
            return false;
        }
        self.set(Self::Visible);
        true
    }

    /// Move towards hidden, (re)arming the fade timer
    pub fn hide(&mut self, now: Instant, fade: Duration) {
        match self {
            Self::Hidden => {}
            Self::Visible | Self::FadingOut { .. } => self.set(Self::FadingOut { due: now + fade }),
        }
    }

    /// Fire the fade timer if due. Returns `true` if the item left layout.
    pub fn advance(&mut self, now: Instant) -> bool {
        match *self {
            Self::FadingOut { due } if due <= now => {
                self.set(Self::Hidden);
                true
            }
            _ => false,
        }
    }

    fn set(&mut self, next: Self) {
        debug_assert!(
            validate_transition(self.kind(), next.kind()).is_ok(),
            "illegal item transition {:?} -> {:?}",
            self.kind(),
            next.kind()
        );
        *self = next;
    }
}

/// Phases reachable from `from`
#[must_use]
pub fn allowed_transitions(from: PhaseKind) -> Vec<PhaseKind> {
    use PhaseKind::*;
    match from {
        Visible => vec![FadingOut],
        FadingOut => vec![FadingOut, Hidden, Visible],
        Hidden => vec![Visible],
    }
}

/// Validates an item phase change.
///
/// # Errors
/// Returns `TransitionError::Item` if `to` is not reachable from `from`.
pub fn validate_transition(from: PhaseKind, to: PhaseKind) -> Result<(), TransitionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TransitionError::Item { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Duration = Duration::from_millis(250);

    #[test]
    fn hide_fades_then_hides_when_due() {
        let t0 = Instant::now();
        let mut phase = ItemPhase::Visible;

        phase.hide(t0, FADE);
        assert_eq!(phase, ItemPhase::FadingOut { due: t0 + FADE });

        assert!(!phase.advance(t0 + Duration::from_millis(249)));
        assert!(phase.advance(t0 + FADE));
        assert_eq!(phase, ItemPhase::Hidden);
    }

    #[test]
    fn second_pass_supersedes_pending_timer() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(100);
        let mut phase = ItemPhase::Visible;

        phase.hide(t0, FADE);
        phase.hide(t1, FADE);

        assert_eq!(phase.deadline(), Some(t1 + FADE));
        assert!(!phase.advance(t0 + FADE));
    }

    #[test]
    fn show_cancels_pending_fade() {
        let t0 = Instant::now();
        let mut phase = ItemPhase::Visible;
        phase.hide(t0, FADE);

        assert!(phase.show());
        assert_eq!(phase.deadline(), None);
        assert!(!phase.advance(t0 + FADE));
        assert!(phase.is_visible());
    }

    #[test]
    fn hidden_stays_hidden_without_timer() {
        let mut phase = ItemPhase::Hidden;
        phase.hide(Instant::now(), FADE);
        assert_eq!(phase, ItemPhase::Hidden);
    }

    #[test]
    fn show_reports_reveal_only_on_change() {
        let mut phase = ItemPhase::Hidden;
        assert!(phase.show());
        assert!(!phase.show());
    }

    #[test]
    fn visible_cannot_skip_fade() {
        assert!(validate_transition(PhaseKind::Visible, PhaseKind::Hidden).is_err());
        assert!(validate_transition(PhaseKind::Hidden, PhaseKind::FadingOut).is_err());
        assert!(validate_transition(PhaseKind::FadingOut, PhaseKind::Hidden).is_ok());
    }
}

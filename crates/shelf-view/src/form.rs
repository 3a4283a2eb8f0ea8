//! Add-product form panel
//!
//! Opening is instant. Closing is animated when enabled: the panel sits in
//! `Closing` until its transition ends, then becomes `Hidden`.

use crate::error::TransitionError;
use shelf_catalog::ProductDraft;

/// Visibility of the form panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormPhase {
    /// Not displayed
    #[default]
    Hidden,
    /// Displayed
    Open,
    /// Close animation running
    Closing,
}

/// Form field values, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Product name
    pub name: String,
    /// Price text
    pub price: String,
    /// Description
    pub description: String,
    /// Image URL
    pub image_url: String,
}

impl FormFields {
    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if every field is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Snapshot as a draft for validation
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft::new(&self.name, &self.price)
            .with_description(&self.description)
            .with_image_url(&self.image_url)
    }
}

/// The add-product panel: phase, fields and error slot
#[derive(Debug, Clone, Default)]
pub struct FormPanel {
    phase: FormPhase,
    /// Field values
    pub fields: FormFields,
    error: Option<String>,
}

impl FormPanel {
    /// Create hidden, empty panel
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Check if fully hidden
    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.phase == FormPhase::Hidden
    }

    /// Message in the error slot
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Put a message in the error slot
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Empty the error slot
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Add-product button: open when closed or closing, close when open
    ///
    /// Opening clears any stale error.
    pub fn toggle(&mut self, animated: bool) {
        match self.phase {
            FormPhase::Hidden | FormPhase::Closing => {
                self.clear_error();
                self.set(FormPhase::Open);
            }
            FormPhase::Open => self.begin_close(animated),
        }
    }

    /// Cancel button: reset fields, clear error, close
    pub fn cancel(&mut self, animated: bool) {
        self.reset();
        if self.phase == FormPhase::Open {
            self.begin_close(animated);
        }
    }

    /// Close animation finished. Returns `true` if the panel became hidden.
    pub fn transition_end(&mut self) -> bool {
        if self.phase == FormPhase::Closing {
            self.set(FormPhase::Hidden);
            true
        } else {
            false
        }
    }

    /// Empty the fields and clear the error, leaving the phase alone
    pub fn reset(&mut self) {
        self.fields.reset();
        self.clear_error();
    }

    /// Reset fields and hide without animation
    pub fn close_immediately(&mut self) {
        self.fields.reset();
        if self.phase != FormPhase::Hidden {
            self.set(FormPhase::Hidden);
        }
    }

    fn begin_close(&mut self, animated: bool) {
        self.set(if animated {
            FormPhase::Closing
        } else {
            FormPhase::Hidden
        });
    }

    fn set(&mut self, next: FormPhase) {
        debug_assert!(
            validate_form_transition(self.phase, next).is_ok(),
            "illegal form transition {:?} -> {:?}",
            self.phase,
            next
        );
        self.phase = next;
    }
}

/// Form phases reachable from `from`
#[must_use]
pub fn allowed_form_transitions(from: FormPhase) -> Vec<FormPhase> {
    use FormPhase::*;
    match from {
        Hidden => vec![Open],
        Open => vec![Closing, Hidden],
        Closing => vec![Hidden, Open],
    }
}

/// Validates a form phase change.
///
/// # Errors
/// Returns `TransitionError::Form` if `to` is not reachable from `from`.
pub fn validate_form_transition(from: FormPhase, to: FormPhase) -> Result<(), TransitionError> {
    if allowed_form_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TransitionError::Form { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormPanel {
        let mut panel = FormPanel::new();
        panel.toggle(true);
        panel.fields.name = "Book".to_string();
        panel.fields.price = "0".to_string();
        panel.show_error("please enter a valid name and price (price > 0)");
        panel
    }

    #[test]
    fn toggle_opens_and_clears_stale_error() {
        let mut panel = FormPanel::new();
        panel.show_error("old");
        panel.toggle(true);
        assert_eq!(panel.phase(), FormPhase::Open);
        assert_eq!(panel.error(), None);
    }

    #[test]
    fn animated_close_waits_for_transition_end() {
        let mut panel = FormPanel::new();
        panel.toggle(true);
        panel.toggle(true);
        assert_eq!(panel.phase(), FormPhase::Closing);
        assert!(panel.transition_end());
        assert!(panel.is_hidden());
        assert!(!panel.transition_end());
    }

    #[test]
    fn instant_close_without_animation() {
        let mut panel = FormPanel::new();
        panel.toggle(false);
        panel.toggle(false);
        assert!(panel.is_hidden());
    }

    #[test]
    fn toggle_while_closing_reopens() {
        let mut panel = FormPanel::new();
        panel.toggle(true);
        panel.toggle(true);
        panel.toggle(true);
        assert_eq!(panel.phase(), FormPhase::Open);
    }

    #[test]
    fn cancel_resets_everything() {
        let mut panel = filled();
        panel.cancel(true);
        assert!(panel.fields.is_empty());
        assert_eq!(panel.error(), None);
        assert_eq!(panel.phase(), FormPhase::Closing);

        panel.transition_end();
        assert!(panel.is_hidden());
    }

    #[test]
    fn cancel_on_hidden_panel_is_harmless() {
        let mut panel = FormPanel::new();
        panel.fields.name = "x".to_string();
        panel.cancel(true);
        assert!(panel.is_hidden());
        assert!(panel.fields.is_empty());
    }

    #[test]
    fn close_immediately_skips_animation() {
        let mut panel = filled();
        panel.close_immediately();
        assert!(panel.is_hidden());
        assert!(panel.fields.is_empty());
    }

    #[test]
    fn fields_snapshot_as_draft() {
        let panel = filled();
        let draft = panel.fields.to_draft();
        assert_eq!(draft.name, "Book");
        assert_eq!(draft.price, "0");
    }

    #[test]
    fn hidden_cannot_jump_to_closing() {
        assert!(validate_form_transition(FormPhase::Hidden, FormPhase::Closing).is_err());
        assert!(validate_form_transition(FormPhase::Closing, FormPhase::Open).is_ok());
    }
}

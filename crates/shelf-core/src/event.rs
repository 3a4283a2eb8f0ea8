//! Page events and what handling them produced

use shelf_catalog::ValidationError;
use shelf_view::{ElementId, FilterOutcome};

/// Keyboard key, as far as the search box cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Add-product form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Description,
    ImageUrl,
}

/// Events the page delivers to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search box text changed (does not filter by itself)
    SearchInput(String),
    /// Search button clicked
    SearchClicked,
    /// Key released in the search box
    SearchKeyUp(Key),
    /// Minimum price box changed
    PriceMinInput(String),
    /// Maximum price box changed
    PriceMaxInput(String),
    /// Sort select changed
    SortChanged(String),
    /// Add-product button clicked
    AddProductClicked,
    /// Form field text changed
    FieldInput(FormField, String),
    /// Form submitted
    Submit,
    /// Cancel button clicked
    CancelClicked,
    /// Form close animation finished
    FormTransitionEnd,
    /// Timer tick
    Tick,
}

/// A product was added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    /// Element rendered for the new product
    pub element: ElementId,
    /// Filter pass re-applied after insertion
    pub outcome: FilterOutcome,
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State changed without a filter pass, or nothing changed
    None,
    /// A filter pass ran
    Filtered(FilterOutcome),
    /// A product was inserted
    Added(Submitted),
    /// Submission rejected; the message is in the form's error slot
    Rejected(ValidationError),
    /// Fade timers fired and these items left layout
    Settled(Vec<ElementId>),
}

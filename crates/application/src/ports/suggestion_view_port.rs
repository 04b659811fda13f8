//! Suggestion list UI port

use domain::{AddressCandidate, Origin};
#[cfg(test)]
use mockall::automock;

/// Port for the address fields and their candidate lists
///
/// Every call is scoped to one origin; start and end have independent
/// loading indicators and lists.
#[cfg_attr(test, automock)]
pub trait SuggestionViewPort: Send + Sync {
    /// Show the loading indicator for the field and its list
    fn show_loading(&self, origin: Origin);

    /// Remove the loading indicator
    fn hide_loading(&self, origin: Origin);

    /// Replace the candidate list, keeping the given order
    fn render_candidates(&self, origin: Origin, candidates: &[AddressCandidate]);

    /// Empty and hide the candidate list
    fn clear_candidates(&self, origin: Origin);

    /// Overwrite the field's text
    fn set_field_value(&self, origin: Origin, value: &str);
}

//! Assembly of the navigation parameter record.

use serde::Serialize;

use super::form::FormState;

/// The parameter record handed to the listings screen.
///
/// Serializes to the wire shape the listings collaborator expects:
/// `{ location?, gearbox?, seats?, petsAllowed }`, with absent filters
/// omitted entirely rather than sent as null.
///
/// Note: the selected date range is deliberately not part of this record.
/// The screen this was modeled on never forwards the chosen dates to the
/// search action; the completed range stays available on
/// [`FormState::selection`] should that hookup ever be added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gearbox: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
    pub pets_allowed: bool,
}

impl SearchParams {
    /// Map the current form fields into a parameter record.
    ///
    /// Every field is used or silently dropped; nothing here can fail:
    /// - empty location is omitted,
    /// - non-numeric seat text is omitted,
    /// - an unset gearbox is omitted,
    /// - the pets flag is always forwarded.
    pub fn assemble(form: &FormState) -> Self {
        Self {
            location: if form.location.is_empty() {
                None
            } else {
                Some(form.location.clone())
            },
            gearbox: form.gearbox.as_str(),
            seats: form.seats.parse::<u32>().ok(),
            pets_allowed: form.pets_allowed,
        }
    }

    /// The empty record used by the "all listings" action.
    pub fn all_listings() -> Self {
        Self::default()
    }

    /// Human-readable summary of the active filters.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(location) = &self.location {
            parts.push(format!("location: {location}"));
        }
        if let Some(gearbox) = self.gearbox {
            parts.push(format!("gearbox: {gearbox}"));
        }
        if let Some(seats) = self.seats {
            parts.push(format!("seats: {seats}"));
        }
        parts.push(format!(
            "pets allowed: {}",
            if self.pets_allowed { "yes" } else { "no" }
        ));
        parts.join(" • ")
    }
}

impl From<&FormState> for SearchParams {
    fn from(form: &FormState) -> Self {
        Self::assemble(form)
    }
}

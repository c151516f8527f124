//! Search query construction.

use crate::types::VehicleInfo;

/// Build the web search query for a turn.
///
/// Year, make, model and the user text are joined with single spaces in that
/// fixed order.  Missing vehicle fields become empty strings, so the
/// separators are kept even when a field is absent.
pub fn build_query(vehicle: &VehicleInfo, user_text: &str) -> String {
    [
        vehicle.year.as_deref().unwrap_or(""),
        vehicle.make.as_deref().unwrap_or(""),
        vehicle.model.as_deref().unwrap_or(""),
        user_text,
    ]
    .join(" ")
}

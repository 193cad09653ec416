//! Day-by-day timetable generation.

use crate::models::{Destination, ItineraryItem};

use super::models::Timetable;

/// Filler for days the destination has no template for
pub fn default_day() -> Vec<ItineraryItem> {
    vec![ItineraryItem {
        time: "all day".to_string(),
        activity: "Explore nearby attractions or relax".to_string(),
        duration: "Flexible".to_string(),
        description: "Visit local markets, nearby sites, or enjoy hotel amenities.".to_string(),
    }]
}

/// Build a timetable for `nights` days by cycling the destination's
/// itinerary templates in dataset order.
///
/// Day `d` uses template `(d - 1) % K`. Empty templates, or a destination
/// without any, get [`default_day`].
pub fn generate_timetable(destination: &Destination, nights: i64) -> Timetable {
    let templates = &destination.suggested_itinerary;
    let mut timetable = Timetable::new();
    if nights <= 0 {
        return timetable;
    }

    for day in 1..=nights as u32 {
        let items = templates
            .get_index((day as usize - 1) % templates.len().max(1))
            .map(|(_, items)| items)
            .filter(|items| !items.is_empty())
            .cloned()
            .unwrap_or_else(default_day);
        timetable.insert(day, items);
    }

    timetable
}

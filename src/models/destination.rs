//! Destination catalog models
//!
//! These mirror the bundled attractions dataset, which uses camelCase keys.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whole dataset document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Dataset {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

/// A destination with its hotels, transport and suggested itinerary
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_reach: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub transportation: Transportation,
    /// Day-template key -> activities. Key order follows the dataset.
    #[serde(default)]
    pub suggested_itinerary: IndexMap<String, Vec<ItineraryItem>>,
}

impl Destination {
    /// Taxi options followed by other options, in dataset order
    pub fn transport_options(&self) -> impl Iterator<Item = &TransportOption> {
        self.transportation
            .taxi_options
            .iter()
            .chain(self.transportation.other_options.iter())
    }

    /// Case-insensitive match against name, location and description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// Hotel offered near a destination
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: f32,
    pub price_per_night: Decimal,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Transport groups as they appear in the dataset
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    #[serde(default)]
    pub taxi_options: Vec<TransportOption>,
    #[serde(default)]
    pub other_options: Vec<TransportOption>,
}

/// A vehicle or service; `kind` is unique within a destination
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_km: Option<Decimal>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub includes: Vec<String>,
}

/// One row of a day's plan
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItineraryItem {
    pub time: String,
    pub activity: String,
    pub duration: String,
    pub description: String,
}

/// Cultural experience listed alongside destinations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub best_time: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "id": 7,
        "name": "Gir National Park",
        "location": "Junagadh",
        "description": "Last home of the Asiatic lion",
        "category": "wildlife",
        "rating": 4.7,
        "hotels": [
            {"id": "h1", "name": "Lion Lodge", "rating": 4.2, "pricePerNight": 2500,
             "amenities": ["WiFi"], "images": []}
        ],
        "transportation": {
            "taxiOptions": [{"type": "Sedan", "pricePerDay": 1500, "description": "4 seats"}],
            "otherOptions": [{"type": "Jeep Safari", "pricePerKm": 12.5,
                              "description": "Open jeep"}]
        },
        "suggestedItinerary": {
            "2": [{"time": "morning", "activity": "Safari", "duration": "3h",
                   "description": "Zone 2"}],
            "1": [{"time": "evening", "activity": "Arrive", "duration": "1h",
                   "description": "Check in"}]
        }
    }"#;

    #[test]
    fn test_destination_deserializes_camel_case() {
        let dest: Destination = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(dest.hotels[0].price_per_night, dec!(2500));
        assert_eq!(dest.transportation.other_options[0].price_per_km, Some(dec!(12.5)));
        assert_eq!(dest.transportation.taxi_options[0].price_per_km, None);
        assert!(dest.tips.is_empty());
    }

    #[test]
    fn test_itinerary_keeps_dataset_order() {
        let dest: Destination = serde_json::from_str(SAMPLE).unwrap();
        let keys: Vec<&str> = dest.suggested_itinerary.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2", "1"]);
    }

    #[test]
    fn test_transport_options_chain_taxi_first() {
        let dest: Destination = serde_json::from_str(SAMPLE).unwrap();
        let kinds: Vec<&str> = dest.transport_options().map(|t| t.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Sedan", "Jeep Safari"]);
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let dest: Destination = serde_json::from_str(SAMPLE).unwrap();
        assert!(dest.matches_search("GIR"));
        assert!(dest.matches_search("junagadh"));
        assert!(dest.matches_search("asiatic"));
        assert!(!dest.matches_search("beach"));
    }
}

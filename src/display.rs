//! Presentation helpers shared by the JSON views.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::round_money;

/// Format an amount with thousands separators and a currency symbol.
///
/// At most two decimals are shown and trailing zeros are dropped, so
/// `12000.50` renders as `₹12,000.5`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = round_money(amount, 2).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}{}.{}", sign, symbol, grouped, frac),
        None => format!("{}{}{}", sign, symbol, grouped),
    }
}

/// Icon shown next to a hotel amenity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmenityIcon {
    Wifi,
    Waves,
    Utensils,
    Dumbbell,
    Parking,
    Coffee,
    Bath,
    Bed,
    Shield,
    Map,
    Leaf,
    Flame,
    Bus,
}

impl AmenityIcon {
    /// Icon for an amenity tag; unknown tags get the shield
    pub fn for_amenity(amenity: &str) -> Self {
        match amenity.trim().to_lowercase().as_str() {
            "wifi" => AmenityIcon::Wifi,
            "swimming pool" | "sea view" => AmenityIcon::Waves,
            "restaurant" => AmenityIcon::Utensils,
            "gym" => AmenityIcon::Dumbbell,
            "parking" => AmenityIcon::Parking,
            "basic breakfast" => AmenityIcon::Coffee,
            "spa" => AmenityIcon::Bath,
            "room service" => AmenityIcon::Bed,
            "safari booking desk" | "desert safari" | "guided tours" | "local guide" => {
                AmenityIcon::Map
            }
            "garden" => AmenityIcon::Leaf,
            "campfire" => AmenityIcon::Flame,
            "temple shuttle" | "shuttle service" => AmenityIcon::Bus,
            _ => AmenityIcon::Shield,
        }
    }
}

/// Amenity tag paired with its icon
#[derive(Debug, Clone, Serialize)]
pub struct AmenityView {
    pub name: String,
    pub icon: AmenityIcon,
}

impl AmenityView {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: AmenityIcon::for_amenity(name),
        }
    }
}

/// Fixed category filter shown on the landing page
pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Categories"),
    ("historical", "Historical Sites"),
    ("religious", "Religious Places"),
    ("natural", "Natural Wonders"),
    ("wildlife", "Wildlife"),
    ("cultural", "Cultural Sites"),
    ("beach", "Beaches"),
    ("monument", "Monuments"),
    ("hillstation", "Hill Stations"),
];

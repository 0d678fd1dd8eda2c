//! Vehicle categories and normalization of free-form vehicle type names.

use std::fmt;

/// Vehicle category offered for rental.
///
/// `Unknown` is the fallback for anything unrecognized and never receives a
/// category-specific surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Compact,
    Electric,
    Cabrio,
    Racer,
    Unknown,
}

impl VehicleCategory {
    /// Categories a customer can actually book
    pub const KNOWN: [VehicleCategory; 4] = [
        VehicleCategory::Compact,
        VehicleCategory::Electric,
        VehicleCategory::Cabrio,
        VehicleCategory::Racer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Compact => "Compact",
            VehicleCategory::Electric => "Electric",
            VehicleCategory::Cabrio => "Cabrio",
            VehicleCategory::Racer => "Racer",
            VehicleCategory::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VehicleCategory::Unknown)
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a vehicle type name onto a category.
///
/// The name is trimmed, its first character upper-cased and the rest
/// lower-cased before matching. Missing, empty and unmatched names all map to
/// `Unknown`.
///
/// # Examples
/// ```
/// use rental_quote::pricing::{normalize_car_type, VehicleCategory};
///
/// assert_eq!(normalize_car_type(Some("  rACER ")), VehicleCategory::Racer);
/// assert_eq!(normalize_car_type(Some("bogus")), VehicleCategory::Unknown);
/// assert_eq!(normalize_car_type(None), VehicleCategory::Unknown);
/// ```
pub fn normalize_car_type(name: Option<&str>) -> VehicleCategory {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return VehicleCategory::Unknown;
    };

    let canonical = capitalize(name.trim());
    VehicleCategory::KNOWN
        .into_iter()
        .find(|category| category.as_str() == canonical)
        .unwrap_or(VehicleCategory::Unknown)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

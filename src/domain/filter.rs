// src/domain/filter.rs

use crate::domain::property::PropertyRecord;
use crate::geo::distance_miles;

/// Radius applied when a free-text query parses as "<lat>,<lng>". The mobile
/// client hardcoded 50 miles for inline searches; the explicit coordinate
/// search keeps its own caller-supplied radius.
pub const INLINE_SEARCH_RADIUS_MILES: f64 = 50.0;

/// The category chips shown above the listing feed. The wire protocol sends
/// them as string ids ("1".."6"); anything unrecognized behaves like Recent,
/// which applies no filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Recent,
    Plots,
    Acres,
    Hectares,
    Farmland,
    Beachfront,
}

impl Category {
    pub fn from_id(id: &str) -> Category {
        match id {
            "2" => Category::Plots,
            "3" => Category::Acres,
            "4" => Category::Hectares,
            "5" => Category::Farmland,
            "6" => Category::Beachfront,
            // "1" is Recent; unknown ids deliberately fall through to it.
            _ => Category::Recent,
        }
    }

    fn matches(&self, record: &PropertyRecord) -> bool {
        match self {
            Category::Recent => true,
            Category::Plots => contains_ci(&record.property_type, "plot"),
            // Acres additionally requires at least one acre. No analogous
            // bound exists for Hectares or Plots; the asymmetry is inherited
            // from the product and kept as-is.
            Category::Acres => {
                contains_ci(&record.size_unit, "acre")
                    && parse_leading_float(&record.size).is_some_and(|n| n >= 1.0)
            }
            Category::Hectares => contains_ci(&record.size_unit, "hectare"),
            Category::Farmland => contains_ci(&record.property_type, "agricultural"),
            Category::Beachfront => contains_ci(&record.property_type, "beachfront"),
        }
    }
}

/// An explicit proximity search, set from the map modal. The modal validates
/// the numbers before this is built, so the fields are plain floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSearch {
    pub lat: f64,
    pub lng: f64,
    pub radius_miles: f64,
}

/// Everything the user currently has dialed in. Rebuilt from scratch on every
/// interaction; nothing here survives a request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: Category,
    pub query: String,
    pub coordinate_search: Option<CoordinateSearch>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            category: Category::Recent,
            query: String::new(),
            coordinate_search: None,
        }
    }
}

/// Narrows `all` down to the records matching every applicable stage of
/// `criteria`. Pure: never mutates the input, always returns a fresh list,
/// and preserves input order (no post-filter sort exists).
///
/// Stages compose with AND; the sub-conditions inside the free-text stage
/// compose with OR.
pub fn filter_properties(all: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    let query = criteria.query.trim();
    let inline_point = parse_inline_coordinates(query);

    all.iter()
        .filter(|record| criteria.category.matches(record))
        .filter(|record| {
            if query.is_empty() {
                return true;
            }
            let substring_hit = [
                &record.location,
                &record.property_type,
                &record.price,
                &record.size,
                &record.size_unit,
            ]
            .iter()
            .any(|field| contains_ci(field.as_str(), query));

            let proximity_hit = inline_point.is_some_and(|(lat, lng)| {
                distance_miles(lat, lng, record.coordinates.lat, record.coordinates.lng)
                    <= INLINE_SEARCH_RADIUS_MILES
            });

            substring_hit || proximity_hit
        })
        .filter(|record| match criteria.coordinate_search {
            None => true,
            Some(search) => {
                distance_miles(
                    search.lat,
                    search.lng,
                    record.coordinates.lat,
                    record.coordinates.lng,
                ) <= search.radius_miles
            }
        })
        .cloned()
        .collect()
}

/// Interprets a query like "35.0853,-106.6056" as a coordinate pair.
/// Returns None unless there is a comma and both halves are finite floats;
/// a malformed half silently disables the proximity clause only.
fn parse_inline_coordinates(query: &str) -> Option<(f64, f64)> {
    let (lat_text, lng_text) = query.split_once(',')?;
    let lat: f64 = lat_text.trim().parse().ok()?;
    let lng: f64 = lng_text.trim().parse().ok()?;

    // f64::from_str happily accepts "NaN" and "inf"; those must degrade to
    // "no match", not poison the distance comparison.
    if lat.is_finite() && lng.is_finite() {
        Some((lat, lng))
    } else {
        None
    }
}

/// parseFloat-style parse: take the longest numeric prefix of the trimmed
/// input, so "2 acres" reads as 2.0. None when no digits lead the string.
fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => seen_digit = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if seen_digit {
        trimmed[..end].parse().ok()
    } else {
        None
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

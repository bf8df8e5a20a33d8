//! Travel catalog store
//!
//! Read-only provider of destination and attraction records, backed by two
//! tabular CSV datasets keyed by city/region. Datasets are parsed once at
//! construction (load-once-per-run caching); the data never changes within a
//! run, so caching cannot affect selection results.

use csv::ReaderBuilder;
use sdk::errors::PlannerError;
use sdk::types::{Attraction, Destination, Region};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Embedded default datasets, shipped with the binary
const DEFAULT_DESTINATIONS_CSV: &str = include_str!("../../data/destinations.csv");
const DEFAULT_ATTRACTIONS_CSV: &str = include_str!("../../data/attractions.csv");

/// Query interface over the travel catalog
///
/// The pipeline only depends on this trait, so tests can substitute a
/// hand-built catalog and alternate dataset backends can be added without
/// touching the decision logic.
pub trait CatalogStore {
    /// Destinations matching the optional region filter, in dataset row order.
    /// Region match is case-insensitive exact; `None` returns everything.
    fn destinations(&self, region: Option<Region>) -> Result<Vec<Destination>, PlannerError>;

    /// Attractions for a city (case-insensitive exact match), in dataset
    /// row order. An unknown city yields an empty list, not an error.
    fn attractions(&self, city: &str) -> Result<Vec<Attraction>, PlannerError>;
}

/// Raw destination row as it appears in the CSV dataset
///
/// `style_tags` is a single comma-separated column; it is split and
/// lowercased when converting to the typed [`Destination`] record.
#[derive(Debug, Deserialize)]
struct DestinationRow {
    city: String,
    country: String,
    region: String,
    style_tags: String,
    avg_lodging_per_night: f64,
    avg_food_per_day: f64,
    avg_local_transport_per_day: f64,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        let style_tags = row
            .style_tags
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        Destination {
            city: row.city,
            country: row.country,
            region: row.region,
            style_tags,
            avg_lodging_per_night: row.avg_lodging_per_night,
            avg_food_per_day: row.avg_food_per_day,
            avg_local_transport_per_day: row.avg_local_transport_per_day,
        }
    }
}

/// CSV-backed catalog store
///
/// Holds both datasets in memory for the lifetime of the store.
#[derive(Debug)]
pub struct CsvCatalog {
    destinations: Vec<Destination>,
    attractions: Vec<Attraction>,
}

impl CsvCatalog {
    /// Build a catalog from the embedded default datasets
    pub fn embedded() -> Result<Self, PlannerError> {
        Self::from_csv(DEFAULT_DESTINATIONS_CSV, DEFAULT_ATTRACTIONS_CSV)
    }

    /// Build a catalog from dataset files on disk
    pub fn from_paths(destinations: &Path, attractions: &Path) -> Result<Self, PlannerError> {
        let dest_csv = fs::read_to_string(destinations).map_err(|e| {
            PlannerError::Catalog(format!("Failed to read {:?}: {}", destinations, e))
        })?;
        let attr_csv = fs::read_to_string(attractions).map_err(|e| {
            PlannerError::Catalog(format!("Failed to read {:?}: {}", attractions, e))
        })?;

        Self::from_csv(&dest_csv, &attr_csv)
    }

    /// Build a catalog from in-memory CSV text
    pub fn from_csv(destinations_csv: &str, attractions_csv: &str) -> Result<Self, PlannerError> {
        let destinations = parse_rows::<DestinationRow>(destinations_csv, "destinations")?
            .into_iter()
            .map(Destination::from)
            .collect();
        let attractions = parse_rows::<Attraction>(attractions_csv, "attractions")?;

        Ok(Self {
            destinations,
            attractions,
        })
    }

    /// Number of destination records loaded
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// Number of attraction records loaded
    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }
}

impl CatalogStore for CsvCatalog {
    fn destinations(&self, region: Option<Region>) -> Result<Vec<Destination>, PlannerError> {
        let matches = self
            .destinations
            .iter()
            .filter(|dest| match region {
                Some(r) => dest.region.eq_ignore_ascii_case(r.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        Ok(matches)
    }

    fn attractions(&self, city: &str) -> Result<Vec<Attraction>, PlannerError> {
        let matches = self
            .attractions
            .iter()
            .filter(|attr| attr.city.eq_ignore_ascii_case(city))
            .cloned()
            .collect();

        Ok(matches)
    }
}

/// Parse CSV text into typed rows, naming the dataset in any error
fn parse_rows<T: for<'de> Deserialize<'de>>(
    csv_text: &str,
    dataset: &str,
) -> Result<Vec<T>, PlannerError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: T = record.map_err(|e| {
            PlannerError::Catalog(format!("{} row {}: {}", dataset, index + 1, e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CsvCatalog::embedded().unwrap();
        assert!(catalog.destination_count() >= 4);
        assert!(catalog.attraction_count() > catalog.destination_count());
    }

    #[test]
    fn test_region_filter_is_case_insensitive_exact() {
        let catalog = CsvCatalog::embedded().unwrap();

        let europe = catalog.destinations(Some(Region::Europe)).unwrap();
        assert!(!europe.is_empty());
        assert!(europe.iter().all(|d| d.region.eq_ignore_ascii_case("europe")));

        let all = catalog.destinations(None).unwrap();
        assert!(all.len() > europe.len());
    }

    #[test]
    fn test_destinations_preserve_dataset_order() {
        let csv = "\
city,country,region,style_tags,avg_lodging_per_night,avg_food_per_day,avg_local_transport_per_day
Zeta,Nowhere,europe,\"food\",50,20,5
Alpha,Nowhere,europe,\"food\",60,20,5
";
        let catalog = CsvCatalog::from_csv(csv, "city,name,tag,typical_hours,cost_est\n").unwrap();
        let dests = catalog.destinations(None).unwrap();
        assert_eq!(dests[0].city, "Zeta");
        assert_eq!(dests[1].city, "Alpha");
    }

    #[test]
    fn test_style_tags_are_split_and_lowercased() {
        let csv = "\
city,country,region,style_tags,avg_lodging_per_night,avg_food_per_day,avg_local_transport_per_day
Alpha,Nowhere,europe,\"Food, MUSEUMS ,walk\",60,20,5
";
        let catalog = CsvCatalog::from_csv(csv, "city,name,tag,typical_hours,cost_est\n").unwrap();
        let dests = catalog.destinations(None).unwrap();
        assert_eq!(dests[0].style_tags, vec!["food", "museums", "walk"]);
    }

    #[test]
    fn test_attractions_for_unknown_city_is_empty() {
        let catalog = CsvCatalog::embedded().unwrap();
        let attractions = catalog.attractions("Atlantis").unwrap();
        assert!(attractions.is_empty());
    }

    #[test]
    fn test_attraction_city_match_is_case_insensitive() {
        let catalog = CsvCatalog::embedded().unwrap();
        let lower = catalog.attractions("porto").unwrap();
        let upper = catalog.attractions("Porto").unwrap();
        assert!(!lower.is_empty());
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn test_malformed_dataset_names_row() {
        let csv = "\
city,country,region,style_tags,avg_lodging_per_night,avg_food_per_day,avg_local_transport_per_day
Alpha,Nowhere,europe,\"food\",not_a_number,20,5
";
        let err = CsvCatalog::from_csv(csv, "city,name,tag,typical_hours,cost_est\n").unwrap_err();
        assert!(err.to_string().contains("destinations row 1"));
    }
}

use anyhow::{Context, Result};
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Number;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Root of a tours fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub tours: Vec<Tour>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tour {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub waypoints: Vec<Coordinate>,
    pub landmarks: Vec<Landmark>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub description: String,
    pub coordinate: Coordinate,
    pub photos: Vec<String>,
}

/// A `[lat, long]` pair.
///
/// Both values stay JSON numbers so they are written back out in the
/// same textual form they were read in. Anything after the first two
/// elements (an altitude, say) is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate(pub Number, pub Number);

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CoordinateVisitor;

        impl<'de> Visitor<'de> for CoordinateVisitor {
            type Value = Coordinate;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array starting with [lat, long]")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Coordinate, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let lat: Number = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let long: Number = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(Coordinate(lat, long))
            }
        }

        deserializer.deserialize_seq(CoordinateVisitor)
    }
}

impl Coordinate {
    pub fn lat(&self) -> &Number {
        &self.0
    }

    pub fn long(&self) -> &Number {
        &self.1
    }
}

/// Parse a document from JSON text
pub fn parse_document(json: &str) -> Result<Document> {
    serde_json::from_str(json).context("Failed to parse tours document")
}

/// Load and parse a document from a file
pub fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path).with_context(|| format!("Failed to open: {:?}", path))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse tours document: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse_document(
            r#"{"categories": [{"name": "History", "desc": "desc A", "tours": [
                {"name": "Walk", "desc": "desc B",
                 "waypoints": [[1.0, 2.0], [3, 4]],
                 "landmarks": [{"name": "Bridge", "description": "desc C",
                                "coordinate": [5.0, 6.0], "photos": ["http://a"]}]}
            ]}]}"#,
        )
        .unwrap();

        let tour = &doc.categories[0].tours[0];
        assert_eq!(doc.categories[0].description, "desc A");
        assert_eq!(tour.waypoints.len(), 2);
        assert_eq!(tour.waypoints[0].lat().to_string(), "1.0");
        assert_eq!(tour.waypoints[1].long().to_string(), "4");
        assert_eq!(tour.landmarks[0].photos, vec!["http://a".to_string()]);
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let doc = parse_document(r#"{"version": 2, "categories": []}"#).unwrap();
        assert!(doc.categories.is_empty());
    }

    #[test]
    fn test_missing_tours_fails() {
        let err = parse_document(r#"{"categories": [{"name": "a", "desc": "b"}]}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("missing field `tours`"));
    }

    #[test]
    fn test_wrong_type_fails() {
        assert!(parse_document(r#"{"categories": [{"name": 1, "desc": "b", "tours": []}]}"#).is_err());
        assert!(parse_document(r#"{"categories": {}}"#).is_err());
    }

    #[test]
    fn test_coordinate_needs_lat_and_long() {
        let json = r#"{"categories": [{"name": "a", "desc": "b", "tours": [
            {"name": "t", "desc": "d", "waypoints": [[1.0]], "landmarks": []}]}]}"#;
        assert!(parse_document(json).is_err());

        let json = r#"{"categories": [{"name": "a", "desc": "b", "tours": [
            {"name": "t", "desc": "d", "waypoints": [[]], "landmarks": []}]}]}"#;
        assert!(parse_document(json).is_err());

        let json = r#"{"categories": [{"name": "a", "desc": "b", "tours": [
            {"name": "t", "desc": "d", "waypoints": [["1.0", 2.0]], "landmarks": []}]}]}"#;
        assert!(parse_document(json).is_err());
    }

    #[test]
    fn test_coordinate_extra_elements_are_skipped() {
        let doc = parse_document(
            r#"{"categories": [{"name": "a", "desc": "b", "tours": [
                {"name": "t", "desc": "d",
                 "waypoints": [[1.0, 2.0, 30.0], [3.0, 4.0, "alt", [5]]],
                 "landmarks": [{"name": "l", "description": "", "coordinate": [5.0, 6.0, 7.0],
                                "photos": []}]}]}]}"#,
        )
        .unwrap();

        let tour = &doc.categories[0].tours[0];
        assert_eq!(tour.waypoints.len(), 2);
        assert_eq!(tour.waypoints[0].lat().to_string(), "1.0");
        assert_eq!(tour.waypoints[0].long().to_string(), "2.0");
        assert_eq!(tour.waypoints[1].long().to_string(), "4.0");
        assert_eq!(tour.landmarks[0].coordinate.long().to_string(), "6.0");
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(parse_document("{\"categories\": [").is_err());
    }
}

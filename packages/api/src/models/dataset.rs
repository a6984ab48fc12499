//! # Dataset models
//!
//! | Struct | Endpoint |
//! |--------|----------|
//! | [`DatasetListItem`] | `GET /datasets/` (one entry per upload) |
//! | [`Dataset`] | `GET /datasets/{id}/`, `POST /upload/` |
//! | [`Equipment`] | one parsed CSV row inside a [`Dataset`] |
//! | [`Summary`] | `GET /datasets/{id}/summary/` |
//!
//! The backend computes every aggregate; the client only displays them.
//! [`TypeDistribution`] keeps the key order of the response body, which is the
//! order the bar chart draws its bars in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Listing entry for one uploaded CSV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetListItem {
    pub id: i64,
    /// Original file name, e.g. `"plant_a.csv"`.
    pub name: String,
    /// ISO-8601 timestamp.
    pub uploaded_at: String,
    pub equipment_count: u64,
}

/// Full dataset with its equipment rows in backend order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub id: i64,
    pub name: String,
    pub uploaded_at: String,
    /// URL of the stored CSV.
    pub file: String,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

/// One piece of process equipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    pub id: i64,
    pub equipment_name: String,
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

/// Server-computed statistics over a dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_count: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    pub type_distribution: TypeDistribution,
}

/// Equipment type → count, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDistribution(Vec<(String, u64)>);

impl TypeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a type. An existing key keeps its position.
    pub fn insert(&mut self, equipment_type: impl Into<String>, count: u64) {
        let equipment_type = equipment_type.into();
        match self.0.iter_mut().find(|(k, _)| *k == equipment_type) {
            Some(entry) => entry.1 = count,
            None => self.0.push((equipment_type, count)),
        }
    }

    pub fn get(&self, equipment_type: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(k, _)| k == equipment_type)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for TypeDistribution {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut dist = Self::new();
        for (k, v) in iter {
            dist.insert(k, v);
        }
        dist
    }
}

impl Serialize for TypeDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct TypeDistributionVisitor;

impl<'de> Visitor<'de> for TypeDistributionVisitor {
    type Value = TypeDistribution;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of equipment type to count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dist = TypeDistribution::new();
        while let Some((k, v)) = access.next_entry::<String, u64>()? {
            dist.insert(k, v);
        }
        Ok(dist)
    }
}

impl<'de> Deserialize<'de> for TypeDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TypeDistributionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_distribution_keeps_body_order() {
        let summary: Summary = serde_json::from_str(
            r#"{
                "total_count": 6,
                "avg_flowrate": 1.0,
                "avg_pressure": 2.0,
                "avg_temperature": 3.0,
                "type_distribution": {"Valve": 1, "Pump": 2, "Compressor": 3}
            }"#,
        )
        .unwrap();
        let keys: Vec<&str> = summary.type_distribution.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Valve", "Pump", "Compressor"]);
        assert_eq!(summary.type_distribution.get("Pump"), Some(2));
        assert_eq!(summary.type_distribution.get("Mixer"), None);
    }

    #[test]
    fn test_type_distribution_serializes_as_map() {
        let dist: TypeDistribution = [("Pump", 2), ("Valve", 1)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&dist).unwrap(),
            r#"{"Pump":2,"Valve":1}"#
        );
    }

    #[test]
    fn test_dataset_detail_parses() {
        let dataset: Dataset = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "plant.csv",
            "uploaded_at": "2024-05-01T10:00:00Z",
            "file": "/media/datasets/plant.csv",
            "equipment": [
                {"id": 1, "equipment_name": "P-101", "equipment_type": "Pump",
                 "flowrate": 120.5, "pressure": 5.2, "temperature": 110.0},
                {"id": 2, "equipment_name": "V-201", "equipment_type": "Valve",
                 "flowrate": 60, "pressure": 4.1, "temperature": 105.5}
            ]
        }))
        .unwrap();
        assert_eq!(dataset.equipment.len(), 2);
        assert_eq!(dataset.equipment[0].equipment_name, "P-101");
        assert_eq!(dataset.equipment[1].flowrate, 60.0);
    }
}

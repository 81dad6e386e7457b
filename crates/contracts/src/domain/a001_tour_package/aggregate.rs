use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::EntityId;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TourPackageId(pub Uuid);

impl TourPackageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl EntityId for TourPackageId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn uuid(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Package
// ============================================================================

/// A bookable tour package as returned by the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    pub id: TourPackageId,
    pub title: String,
    pub destination: String,
    #[serde(default)]
    pub description: String,
    /// Price per traveler
    pub price: f64,
    pub duration_days: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TourPackage {
    /// "3D2N" style duration label
    pub fn duration_label(&self) -> String {
        if self.duration_days <= 1 {
            return "1 day".to_string();
        }
        format!("{}D{}N", self.duration_days, self.duration_days - 1)
    }

    pub fn total_price(&self, travelers: u32) -> f64 {
        self.price * f64::from(travelers)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageListResponse {
    pub items: Vec<TourPackage>,
    pub total_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_api() {
        let json = r#"{
            "id": "0b7f3c1e-4a8b-4d9e-9c3f-2a1b5c6d7e8f",
            "title": "Bromo Sunrise",
            "destination": "East Java",
            "price": 1250000.0,
            "durationDays": 2
        }"#;
        let package: TourPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.title, "Bromo Sunrise");
        assert_eq!(package.duration_days, 2);
        assert_eq!(package.review_count, 0);
        assert!(package.image_url.is_none());
        assert_eq!(package.duration_label(), "2D1N");
        assert_eq!(package.total_price(3), 3750000.0);
    }
}

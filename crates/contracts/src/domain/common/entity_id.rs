use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;
use uuid::Uuid;

/// Trait for typed entity identifiers backed by a UUID
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn from_uuid(value: Uuid) -> Self;

    fn uuid(&self) -> Uuid;

    fn as_string(&self) -> String {
        self.uuid().to_string()
    }

    /// Parse an id taken from a route parameter
    fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s.trim())
            .map(Self::from_uuid)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour_package::aggregate::TourPackageId;

    #[test]
    fn test_parse_route_param() {
        let id = TourPackageId::new_v4();
        let parsed = TourPackageId::parse(&format!(" {} ", id.as_string())).unwrap();
        assert_eq!(parsed, id);
        assert!(TourPackageId::parse("bali-7-days").is_err());
    }
}

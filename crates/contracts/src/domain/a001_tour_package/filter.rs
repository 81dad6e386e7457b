//! Client-side filtering, sorting and sampling of fetched package lists

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::aggregate::TourPackage;

/// Queries shorter than this are ignored
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFilter {
    #[serde(default)]
    pub query: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub max_duration_days: Option<u32>,
}

impl PackageFilter {
    pub fn is_query_active(&self) -> bool {
        self.query.trim().chars().count() >= MIN_QUERY_LEN
    }

    pub fn matches(&self, package: &TourPackage) -> bool {
        if self.is_query_active() {
            let needle = self.query.trim().to_lowercase();
            let hit = package.title.to_lowercase().contains(&needle)
                || package.destination.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if package.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if package.price > max {
                return false;
            }
        }
        if let Some(days) = self.max_duration_days {
            if package.duration_days > days {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, packages: Vec<TourPackage>) -> Vec<TourPackage> {
        packages.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageSort {
    /// Keep API order
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl PackageSort {
    pub fn code(&self) -> &'static str {
        match self {
            PackageSort::Recommended => "recommended",
            PackageSort::PriceAsc => "price-asc",
            PackageSort::PriceDesc => "price-desc",
            PackageSort::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageSort::Recommended => "Recommended",
            PackageSort::PriceAsc => "Lowest price",
            PackageSort::PriceDesc => "Highest price",
            PackageSort::Rating => "Top rated",
        }
    }

    pub fn all() -> Vec<PackageSort> {
        vec![
            PackageSort::Recommended,
            PackageSort::PriceAsc,
            PackageSort::PriceDesc,
            PackageSort::Rating,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn sort(&self, packages: &mut [TourPackage]) {
        match self {
            PackageSort::Recommended => {}
            PackageSort::PriceAsc => packages.sort_by(|a, b| a.price.total_cmp(&b.price)),
            PackageSort::PriceDesc => packages.sort_by(|a, b| b.price.total_cmp(&a.price)),
            PackageSort::Rating => packages.sort_by(by_rating),
        }
    }
}

fn by_rating(a: &TourPackage, b: &TourPackage) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| b.review_count.cmp(&a.review_count))
        .then_with(|| a.title.cmp(&b.title))
}

/// Top `count` packages for the home page, best rated first
pub fn featured(packages: &[TourPackage], count: usize) -> Vec<TourPackage> {
    let mut sorted = packages.to_vec();
    sorted.sort_by(by_rating);
    sorted.truncate(count);
    sorted
}

/// Distinct destinations, sorted, for search suggestions
pub fn destinations(packages: &[TourPackage]) -> Vec<String> {
    packages
        .iter()
        .map(|p| p.destination.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

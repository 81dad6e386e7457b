pub mod aggregate;
pub mod filter;

pub use aggregate::{PackageListResponse, TourPackage, TourPackageId};
pub use filter::{destinations, featured, PackageFilter, PackageSort};

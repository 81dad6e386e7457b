pub mod a001_tour_package;
pub mod a002_booking;
pub mod a003_review;
pub mod a004_account;

//! API client for packages, bookings, reviews and account endpoints

use contracts::domain::a001_tour_package::{PackageListResponse, TourPackageId};
use contracts::domain::a002_booking::{Booking, BookingId, BookingRequest};
use contracts::domain::a003_review::{NewReview, Review};
use contracts::domain::a004_account::ForgotPasswordRequest;
use contracts::domain::common::EntityId;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

async fn post(path: &str, body: &impl Serialize) -> Result<Response, String> {
    Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

// ============================================================================
// Packages
// ============================================================================

/// Full package catalog; filtering and paging happen client-side
pub async fn fetch_packages() -> Result<PackageListResponse, String> {
    get_json("/api/packages").await
}

// ============================================================================
// Bookings
// ============================================================================

pub async fn fetch_booking(id: BookingId) -> Result<Booking, String> {
    get_json(&format!("/api/bookings/{}", id.as_string())).await
}

pub async fn create_booking(request: &BookingRequest) -> Result<Booking, String> {
    read_json(post("/api/bookings", request).await?).await
}

// ============================================================================
// Reviews
// ============================================================================

pub async fn fetch_reviews(package_id: TourPackageId) -> Result<Vec<Review>, String> {
    get_json(&format!("/api/packages/{}/reviews", package_id.as_string())).await
}

pub async fn submit_review(review: &NewReview) -> Result<Review, String> {
    let path = format!("/api/packages/{}/reviews", review.package_id.as_string());
    read_json(post(&path, review).await?).await
}

// ============================================================================
// Account
// ============================================================================

pub async fn request_password_reset(request: &ForgotPasswordRequest) -> Result<(), String> {
    let response = post("/api/auth/forgot-password", request).await?;
    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

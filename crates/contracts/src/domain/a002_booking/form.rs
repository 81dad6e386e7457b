//! Multi-step booking form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a001_tour_package::TourPackageId;
use crate::domain::a004_account::is_valid_email;

pub const MAX_TRAVELERS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingFormError {
    #[error("Number of travelers must be between 1 and {max}")]
    TravelersOutOfRange { max: u32 },

    #[error("Please choose a travel date")]
    MissingTravelDate,

    #[error("Travel date {0} is in the past")]
    TravelDateInPast(NaiveDate),

    #[error("Please enter your full name")]
    MissingName,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Booking is not ready to be submitted")]
    NotReady,

    #[error("Booking was already submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStep {
    #[default]
    Travelers,
    Contact,
    Review,
    Submitted,
}

impl BookingStep {
    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::Travelers => "Trip details",
            BookingStep::Contact => "Contact",
            BookingStep::Review => "Review",
            BookingStep::Submitted => "Done",
        }
    }

    /// 1-based position for the step indicator
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::Travelers => 1,
            BookingStep::Contact => 2,
            BookingStep::Review => 3,
            BookingStep::Submitted => 4,
        }
    }
}

/// Payload for `POST /api/bookings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub package_id: TourPackageId,
    pub customer_name: String,
    pub email: String,
    pub travelers: u32,
    pub travel_date: NaiveDate,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub package_id: TourPackageId,
    pub step: BookingStep,
    pub travelers: u32,
    pub travel_date: Option<NaiveDate>,
    pub customer_name: String,
    pub email: String,
    pub notes: String,
}

impl BookingDraft {
    pub fn new(package_id: TourPackageId) -> Self {
        Self {
            package_id,
            step: BookingStep::Travelers,
            travelers: 1,
            travel_date: None,
            customer_name: String::new(),
            email: String::new(),
            notes: String::new(),
        }
    }

    /// Validate the current step and advance
    pub fn next(&mut self, today: NaiveDate) -> Result<BookingStep, BookingFormError> {
        self.step = match self.step {
            BookingStep::Travelers => {
                self.validate_trip(today)?;
                BookingStep::Contact
            }
            BookingStep::Contact => {
                self.validate_contact()?;
                BookingStep::Review
            }
            BookingStep::Review => {
                self.validate_trip(today)?;
                self.validate_contact()?;
                BookingStep::Submitted
            }
            BookingStep::Submitted => return Err(BookingFormError::AlreadySubmitted),
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> BookingStep {
        self.step = match self.step {
            BookingStep::Contact => BookingStep::Travelers,
            BookingStep::Review => BookingStep::Contact,
            other => other,
        };
        self.step
    }

    /// Build the API payload; only valid on the review step
    pub fn to_request(&self, today: NaiveDate) -> Result<BookingRequest, BookingFormError> {
        if self.step != BookingStep::Review {
            return Err(BookingFormError::NotReady);
        }
        self.validate_trip(today)?;
        self.validate_contact()?;
        let travel_date = self.travel_date.ok_or(BookingFormError::MissingTravelDate)?;

        Ok(BookingRequest {
            package_id: self.package_id,
            customer_name: self.customer_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            travelers: self.travelers,
            travel_date,
            notes: self.notes.trim().to_string(),
        })
    }

    fn validate_trip(&self, today: NaiveDate) -> Result<(), BookingFormError> {
        if self.travelers == 0 || self.travelers > MAX_TRAVELERS {
            return Err(BookingFormError::TravelersOutOfRange { max: MAX_TRAVELERS });
        }
        match self.travel_date {
            None => Err(BookingFormError::MissingTravelDate),
            Some(date) if date < today => Err(BookingFormError::TravelDateInPast(date)),
            Some(_) => Ok(()),
        }
    }

    fn validate_contact(&self) -> Result<(), BookingFormError> {
        if self.customer_name.trim().is_empty() {
            return Err(BookingFormError::MissingName);
        }
        if !is_valid_email(&self.email) {
            return Err(BookingFormError::InvalidEmail);
        }
        Ok(())
    }
}

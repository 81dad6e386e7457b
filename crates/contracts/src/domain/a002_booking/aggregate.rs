use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment_status::PaymentStatus;
use crate::domain::a001_tour_package::TourPackageId;
use crate::domain::common::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl EntityId for BookingId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn uuid(&self) -> Uuid {
        self.0
    }
}

/// A booking as returned by the booking API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub package_id: TourPackageId,
    pub package_title: String,
    pub customer_name: String,
    pub email: String,
    pub travelers: u32,
    pub travel_date: NaiveDate,
    pub total_price: f64,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Only paid bookings carry a ticket
    pub fn ticket(&self) -> Option<Ticket> {
        if !self.status.has_ticket() {
            return None;
        }
        Some(Ticket {
            code: ticket_code(&self.id),
            booking_id: self.id,
            package_title: self.package_title.clone(),
            customer_name: self.customer_name.clone(),
            travelers: self.travelers,
            travel_date: self.travel_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub code: String,
    pub booking_id: BookingId,
    pub package_title: String,
    pub customer_name: String,
    pub travelers: u32,
    pub travel_date: NaiveDate,
}

/// `SLM-` followed by the first 8 hex digits of the booking id
pub fn ticket_code(id: &BookingId) -> String {
    let hex = id.0.simple().to_string().to_uppercase();
    format!("SLM-{}", &hex[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: PaymentStatus) -> Booking {
        Booking {
            id: BookingId::parse("9f1c2b3a-0000-4000-8000-000000000001").unwrap(),
            package_id: TourPackageId::new_v4(),
            package_title: "Komodo Sailing".to_string(),
            customer_name: "Dewi".to_string(),
            email: "dewi@example.com".to_string(),
            travelers: 2,
            travel_date: NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
            total_price: 15_600_000.0,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ticket_only_for_paid() {
        assert!(booking(PaymentStatus::Pending).ticket().is_none());
        assert!(booking(PaymentStatus::Refunded).ticket().is_none());

        let ticket = booking(PaymentStatus::Paid).ticket().unwrap();
        assert_eq!(ticket.code, "SLM-9F1C2B3A");
        assert_eq!(ticket.travelers, 2);
    }

    #[test]
    fn test_deserialize_status() {
        let mut value = serde_json::to_value(booking(PaymentStatus::Pending)).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["travelDate"], "2026-12-20");

        value["status"] = "paid".into();
        let parsed: Booking = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.status, PaymentStatus::Paid);
    }
}

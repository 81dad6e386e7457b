use serde::{Deserialize, Serialize};

/// Payment state of a booking as tracked by the payment provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Expired,
    Refunded,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Expired => "expired",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Waiting for payment",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Payment failed",
            PaymentStatus::Expired => "Payment expired",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Failed,
            PaymentStatus::Expired,
            PaymentStatus::Refunded,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "failed" => Some(PaymentStatus::Failed),
            "expired" => Some(PaymentStatus::Expired),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    /// No further transitions expected; status polling can stop
    pub fn is_final(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }

    pub fn has_ticket(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in PaymentStatus::all() {
            assert_eq!(PaymentStatus::from_code(status.code()), Some(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
        assert_eq!(PaymentStatus::from_code("settled"), None);
    }

    #[test]
    fn test_only_paid_has_ticket() {
        let with_ticket: Vec<_> = PaymentStatus::all()
            .into_iter()
            .filter(PaymentStatus::has_ticket)
            .collect();
        assert_eq!(with_ticket, vec![PaymentStatus::Paid]);
        assert!(!PaymentStatus::Pending.is_final());
        assert!(PaymentStatus::Expired.is_final());
    }
}

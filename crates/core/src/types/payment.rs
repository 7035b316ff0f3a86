//! Payment method enumeration.

use serde::{Deserialize, Serialize};

/// How an order was paid.
///
/// Stored as the display string in the `Payments.PaymentMethod` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Google Pay")]
    GooglePay,
    #[serde(rename = "Apple Pay")]
    ApplePay,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Cash")]
    Cash,
}

impl PaymentMethod {
    /// All methods, in the order the generator samples from.
    pub const ALL: [Self; 7] = [
        Self::CreditCard,
        Self::DebitCard,
        Self::PayPal,
        Self::GooglePay,
        Self::ApplePay,
        Self::Upi,
        Self::Cash,
    ];

    /// The string stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::PayPal => "PayPal",
            Self::GooglePay => "Google Pay",
            Self::ApplePay => "Apple Pay",
            Self::Upi => "UPI",
            Self::Cash => "Cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_stored_string() {
        assert_eq!(PaymentMethod::CreditCard.to_string(), "Credit Card");
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
    }

    #[test]
    fn test_serde_uses_stored_string() {
        let json = serde_json::to_string(&PaymentMethod::GooglePay).expect("serialize");
        assert_eq!(json, "\"Google Pay\"");
        let back: PaymentMethod = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, PaymentMethod::GooglePay);
    }

    #[test]
    fn test_all_has_no_duplicates() {
        for (i, a) in PaymentMethod::ALL.iter().enumerate() {
            for b in &PaymentMethod::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}

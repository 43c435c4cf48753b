use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-side status of a payment transaction.
///
/// `Initialized` is the host's starting state; the gateway adapter only ever
/// moves a transaction into one of the other four.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Initialized,
    Pending,
    Canceled,
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::Pending => "pending",
            Self::Canceled => "canceled",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One payment attempt against an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentTransaction {
    /// Identifier shown to the gateway as the order id.
    pub public_id: String,
    pub order_id: String,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub note: String,
}

impl PaymentTransaction {
    pub fn new(public_id: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            order_id: order_id.into(),
            status: TransactionStatus::default(),
            note: String::new(),
        }
    }
}

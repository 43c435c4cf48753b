use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment state of an order as tracked by the host.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderPaymentStatus {
    #[default]
    Queued,
    Paid,
}

/// Customer profile attached to an order. Every field may be unset.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub billing_street: Option<String>,
}

/// A purchased line as placed in the order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderItem {
    pub name: String,
    /// Ordered quantity.
    pub amount: Decimal,
    /// Unit price.
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub order_id: String,
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub profile: Profile,
    /// Checkout has completed and the order is waiting for the gateway to confirm payment.
    #[serde(default)]
    pub placed: bool,
    #[serde(default)]
    pub payment_status: OrderPaymentStatus,
}

impl Order {
    pub fn mark_paid(&mut self) {
        self.payment_status = OrderPaymentStatus::Paid;
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == OrderPaymentStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_deserialization_defaults() {
        let order: Order = serde_json::from_str(r#"{"order_id": "17", "total": "10.00"}"#).unwrap();

        assert_eq!(order.total, dec!(10.00));
        assert!(order.items.is_empty());
        assert_eq!(order.profile, Profile::default());
        assert!(!order.placed);
        assert_eq!(order.payment_status, OrderPaymentStatus::Queued);
    }

    #[test]
    fn test_mark_paid() {
        let mut order: Order =
            serde_json::from_str(r#"{"order_id": "1", "total": 5, "placed": true}"#).unwrap();
        assert!(!order.is_paid());
        order.mark_paid();
        assert!(order.is_paid());
    }
}

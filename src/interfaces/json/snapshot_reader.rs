use crate::domain::order::Order;
use crate::domain::request::CheckoutContext;
use crate::domain::transaction::PaymentTransaction;
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::io::Read;

/// Host state for one checkout: the transaction, its order and the storefront
/// context the request is built against.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CheckoutSnapshot {
    pub currency: String,
    #[serde(default)]
    pub language: Option<String>,
    /// Storefront URL the gateway returns the shopper to.
    pub return_base: String,
    pub transaction: PaymentTransaction,
    pub order: Order,
}

impl CheckoutSnapshot {
    pub fn context(&self) -> CheckoutContext {
        CheckoutContext {
            currency: self.currency.clone(),
            language: self.language.clone(),
        }
    }
}

/// Reads a [`CheckoutSnapshot`] from any `Read` source (e.g. File, Stdin).
pub struct SnapshotReader<R: Read> {
    source: R,
}

impl<R: Read> SnapshotReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read(self) -> Result<CheckoutSnapshot> {
        let snapshot: CheckoutSnapshot = serde_json::from_reader(self.source)?;
        if snapshot.transaction.order_id != snapshot.order.order_id {
            return Err(GatewayError::OrderNotFound(snapshot.transaction.order_id));
        }
        Ok(snapshot)
    }
}

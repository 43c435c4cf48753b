use super::order::Order;
use super::request::ReturnUrls;
use super::transaction::PaymentTransaction;
use crate::error::Result;
use async_trait::async_trait;

/// Host storage for orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: &str) -> Result<Option<Order>>;
}

/// Host storage for payment transactions, keyed by public id.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn store(&self, tx: PaymentTransaction) -> Result<()>;
    async fn get(&self, public_id: &str) -> Result<Option<PaymentTransaction>>;
}

/// Builds the host pages the gateway returns the shopper to.
pub trait ReturnUrlBuilder: Send + Sync {
    fn return_urls(&self, tx: &PaymentTransaction) -> ReturnUrls;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type TransactionStoreBox = Box<dyn TransactionStore>;

use super::adapter::{GatewayAdapter, ReturnOutcome};
use crate::domain::callback::CallbackPayload;
use crate::domain::order::Order;
use crate::domain::ports::{OrderStoreBox, TransactionStoreBox};
use crate::domain::request::CheckoutContext;
use crate::domain::transaction::PaymentTransaction;
use crate::error::{GatewayError, Result};
use url::Url;

/// Entry point the host calls at checkout and on every gateway return.
///
/// Each call loads its records, runs the adapter once and stores the result.
/// Writes for the same transaction are not serialized here; that is left to
/// the host store.
pub struct PaymentProcessor {
    adapter: GatewayAdapter,
    order_store: OrderStoreBox,
    transaction_store: TransactionStoreBox,
    method_enabled: bool,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` for an enabled payment method.
    ///
    /// # Arguments
    ///
    /// * `adapter` - The configured gateway adapter.
    /// * `order_store` - Host orders.
    /// * `transaction_store` - Host payment transactions.
    pub fn new(
        adapter: GatewayAdapter,
        order_store: OrderStoreBox,
        transaction_store: TransactionStoreBox,
    ) -> Self {
        Self {
            adapter,
            order_store,
            transaction_store,
            method_enabled: true,
        }
    }

    /// Sets the host's own readiness flag for the payment method.
    pub fn with_method_enabled(mut self, enabled: bool) -> Self {
        self.method_enabled = enabled;
        self
    }

    pub fn adapter(&self) -> &GatewayAdapter {
        &self.adapter
    }

    pub fn is_configured(&self) -> bool {
        self.adapter.is_configured(self.method_enabled)
    }

    async fn load(&self, txn_id: &str) -> Result<(PaymentTransaction, Order)> {
        let tx = self
            .transaction_store
            .get(txn_id)
            .await?
            .ok_or_else(|| GatewayError::TransactionNotFound(txn_id.to_string()))?;
        let order = self
            .order_store
            .get(&tx.order_id)
            .await?
            .ok_or_else(|| GatewayError::OrderNotFound(tx.order_id.clone()))?;
        Ok((tx, order))
    }

    /// Builds the gateway redirect for a transaction.
    ///
    /// Refuses to run when the method lacks its project id or secret key.
    pub async fn checkout(&self, txn_id: &str, ctx: &CheckoutContext) -> Result<Url> {
        if !self.is_configured() {
            return Err(GatewayError::NotConfigured(
                "project id and secret key are required".to_string(),
            ));
        }

        let (tx, order) = self.load(txn_id).await?;
        self.adapter.build_redirect_url(&tx, &order, ctx)
    }

    /// Applies one gateway callback to the stored transaction and order.
    ///
    /// `ctx` must describe the same storefront state that was used at checkout,
    /// otherwise signed callbacks fail verification.
    pub async fn process_return(
        &self,
        txn_id: &str,
        payload: &CallbackPayload,
        ctx: &CheckoutContext,
    ) -> Result<ReturnOutcome> {
        let (mut tx, mut order) = self.load(txn_id).await?;
        let outcome = self
            .adapter
            .interpret_return(&mut tx, &mut order, payload, ctx)?;

        if outcome.status.is_some() {
            self.transaction_store.store(tx).await?;
        }
        if outcome.mark_paid {
            self.order_store.store(order).await?;
        }
        Ok(outcome)
    }

    pub async fn transaction(&self, txn_id: &str) -> Result<Option<PaymentTransaction>> {
        self.transaction_store.get(txn_id).await
    }

    pub async fn order(&self, order_id: &str) -> Result<Option<Order>> {
        self.order_store.get(order_id).await
    }
}

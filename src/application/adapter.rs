use crate::domain::callback::CallbackPayload;
use crate::domain::order::Order;
use crate::domain::ports::ReturnUrlBuilder;
use crate::domain::request::{CheckoutContext, Discount, LineItem, PaymentRequest, format_quantity};
use crate::domain::settings::GatewaySettings;
use crate::domain::transaction::{PaymentTransaction, TransactionStatus};
use crate::error::{GatewayError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use url::Url;

/// Fixed gateway entry point the shopper is redirected to.
pub const GATEWAY_ENDPOINT: &str = "https://pay.bitcoinus.io/do";

pub const NOTE_CANCELLED: &str = "Payment Cancelled";
pub const NOTE_AWAITING: &str = "Awaiting Payment";
pub const NOTE_INVALID_SIGNATURE: &str = "Payment Failed invalid signature";
pub const NOTE_PAID: &str = "Paid";
pub const NOTE_FAILED: &str = "Payment Failed";

const GATEWAY_STATUS_PAID: i64 = 1;
const GATEWAY_STATUS_FAILED: i64 = 2;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA-256 of `serialized` keyed by `secret_key`, as lowercase hex.
pub fn compute_signature(serialized: &str, secret_key: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| GatewayError::SigningError(e.to_string()))?;
    mac.update(serialized.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn signatures_match(expected: &str, received: &str) -> bool {
    bool::from(expected.as_bytes().ct_eq(received.as_bytes()))
}

/// Result of interpreting one gateway callback.
///
/// `status == None` means the callback leaves the transaction as it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReturnOutcome {
    pub status: Option<TransactionStatus>,
    pub notes: Vec<String>,
    /// The order's payment status must be set to paid.
    pub mark_paid: bool,
}

impl ReturnOutcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn with_status(status: TransactionStatus, note: &str) -> Self {
        Self {
            status: Some(status),
            notes: vec![note.to_string()],
            mark_paid: false,
        }
    }

    pub fn note(&self) -> String {
        self.notes.join(". ")
    }
}

/// Bitcoinus payment method: signs outbound requests and reads callbacks back
/// into host transaction statuses.
#[derive(Clone)]
pub struct GatewayAdapter {
    settings: GatewaySettings,
    return_urls: Arc<dyn ReturnUrlBuilder>,
}

impl GatewayAdapter {
    pub fn new(settings: GatewaySettings, return_urls: Arc<dyn ReturnUrlBuilder>) -> Self {
        Self {
            settings,
            return_urls,
        }
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// The host's own readiness check must pass and both credentials be present.
    pub fn is_configured(&self, base_configured: bool) -> bool {
        base_configured && self.settings.has_credentials()
    }

    pub fn is_test_mode(&self) -> bool {
        self.settings.is_test_mode()
    }

    /// Assembles the transaction data object for one checkout attempt.
    ///
    /// Deterministic in its inputs: calling it again with the same transaction,
    /// order and context yields a request with the same canonical encoding,
    /// which is what callback verification relies on.
    pub fn build_payment_request(
        &self,
        tx: &PaymentTransaction,
        order: &Order,
        ctx: &CheckoutContext,
    ) -> PaymentRequest {
        let urls = self.return_urls.return_urls(tx);
        let profile = &order.profile;

        PaymentRequest {
            project_id: self.settings.project_id.clone(),
            order_id: tx.public_id.clone(),
            amount: order.total,
            discount: Discount {
                bits: self.settings.discount_bits,
            },
            currency: ctx.currency.clone(),
            language: ctx.language_or_default().to_string(),
            name: profile.name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            street: profile.billing_street.clone().unwrap_or_default(),
            redirect: urls.redirect,
            back: urls.back,
            timeout: urls.timeout,
            test: u8::from(self.is_test_mode()),
        }
    }

    pub fn build_line_items(&self, order: &Order) -> Vec<LineItem> {
        order
            .items
            .iter()
            .map(|item| LineItem {
                title: item.name.clone(),
                quantity: format_quantity(item.amount),
                unit_price: item.price,
            })
            .collect()
    }

    /// Signature over the canonical encoding of `request`.
    pub fn sign(&self, request: &PaymentRequest) -> Result<String> {
        compute_signature(&request.canonical_json()?, &self.settings.secret_key)
    }

    /// Gateway URL carrying the base64 request, optional items and the signature.
    ///
    /// The signature covers the raw JSON, not its base64 form.
    pub fn build_redirect_url(
        &self,
        tx: &PaymentTransaction,
        order: &Order,
        ctx: &CheckoutContext,
    ) -> Result<Url> {
        let request = self.build_payment_request(tx, order, ctx);
        let serialized = request.canonical_json()?;
        let data = BASE64.encode(serialized.as_bytes());

        let items = if self.settings.show_itemized_info {
            BASE64.encode(serde_json::to_string(&self.build_line_items(order))?)
        } else {
            String::new()
        };

        let signature = compute_signature(&serialized, &self.settings.secret_key)?;

        let mut url = Url::parse(GATEWAY_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("data", &data)
            .append_pair("items", &items)
            .append_pair("signature", &signature);

        tracing::debug!(
            order_id = %request.order_id,
            test = request.test,
            itemized = self.settings.show_itemized_info,
            "Built gateway redirect"
        );
        Ok(url)
    }

    /// Decides what a callback means for the transaction without touching it.
    pub fn evaluate_return(
        &self,
        tx: &PaymentTransaction,
        order: &Order,
        payload: &CallbackPayload,
        ctx: &CheckoutContext,
    ) -> Result<ReturnOutcome> {
        // Cancellation is never signed by the gateway.
        if payload.cancel {
            return Ok(ReturnOutcome::with_status(
                TransactionStatus::Canceled,
                NOTE_CANCELLED,
            ));
        }

        let Some(code) = payload.status() else {
            if order.placed {
                return Ok(ReturnOutcome::with_status(
                    TransactionStatus::Pending,
                    NOTE_AWAITING,
                ));
            }
            tracing::debug!(
                transaction = %tx.public_id,
                "Callback without status for an order that is not placed, leaving transaction unchanged"
            );
            return Ok(ReturnOutcome::unchanged());
        };

        let expected = self.sign(&self.build_payment_request(tx, order, ctx))?;
        let valid = payload
            .signature
            .as_deref()
            .is_some_and(|received| signatures_match(&expected, received));

        if !valid {
            tracing::warn!(
                transaction = %tx.public_id,
                status = code,
                signature_present = payload.signature.is_some(),
                "Rejecting callback with invalid signature"
            );
            return Ok(ReturnOutcome::with_status(
                TransactionStatus::Failed,
                NOTE_INVALID_SIGNATURE,
            ));
        }

        match code {
            GATEWAY_STATUS_PAID => Ok(ReturnOutcome {
                mark_paid: true,
                ..ReturnOutcome::with_status(TransactionStatus::Success, NOTE_PAID)
            }),
            GATEWAY_STATUS_FAILED => Ok(ReturnOutcome::with_status(
                TransactionStatus::Failed,
                NOTE_FAILED,
            )),
            other => {
                tracing::warn!(
                    transaction = %tx.public_id,
                    status = other,
                    "Ignoring unknown gateway status code"
                );
                Ok(ReturnOutcome::unchanged())
            }
        }
    }

    /// Interprets a callback and applies it to the transaction and order.
    pub fn interpret_return(
        &self,
        tx: &mut PaymentTransaction,
        order: &mut Order,
        payload: &CallbackPayload,
        ctx: &CheckoutContext,
    ) -> Result<ReturnOutcome> {
        let outcome = self.evaluate_return(tx, order, payload, ctx)?;

        if let Some(status) = outcome.status {
            tx.status = status;
            tx.note = outcome.note();
        }
        if outcome.mark_paid {
            order.mark_paid();
        }

        tracing::info!(
            transaction = %tx.public_id,
            status = %tx.status,
            note = %tx.note,
            "Processed gateway return"
        );
        Ok(outcome)
    }
}

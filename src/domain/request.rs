use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

pub const DEFAULT_LANGUAGE: &str = "EN";

/// Storefront state the request depends on, passed in per call.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutContext {
    /// ISO 4217 code of the active store currency.
    pub currency: String,
    /// Two-letter language code of the current request, if any.
    pub language: Option<String>,
}

impl CheckoutContext {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn language_or_default(&self) -> &str {
        match self.language.as_deref() {
            Some(lang) if !lang.is_empty() => lang,
            _ => DEFAULT_LANGUAGE,
        }
    }
}

/// The three host pages the gateway sends the shopper back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnUrls {
    pub redirect: String,
    pub back: String,
    pub timeout: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discount {
    pub bits: i64,
}

/// Transaction data object sent to the gateway.
///
/// Field order is part of the signed byte sequence and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    #[serde(rename = "pid")]
    pub project_id: String,
    #[serde(rename = "orderid")]
    pub order_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub discount: Discount,
    pub currency: String,
    #[serde(rename = "lang")]
    pub language: String,
    pub name: String,
    pub email: String,
    pub street: String,
    pub redirect: String,
    pub back: String,
    pub timeout: String,
    pub test: u8,
}

impl PaymentRequest {
    /// Canonical encoding: compact JSON in declaration order.
    pub fn canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Per-item purchase details sent when itemized info is enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub title: String,
    #[serde(rename = "qty")]
    pub quantity: String,
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// Formats a quantity with two fraction digits and `,` thousands grouping.
pub fn format_quantity(quantity: Decimal) -> String {
    let rounded = quantity.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

use super::coerce::{int_value, is_one};
use crate::error::{GatewayError, Result};
use serde_json::Value;

pub const KEY_PROJECT_ID: &str = "projectid";
pub const KEY_SECRET_KEY: &str = "secretkey";
pub const KEY_MODE: &str = "mode";
pub const KEY_DISCOUNT: &str = "discount";
pub const KEY_INFO: &str = "info";

/// Gateway account mode. Anything other than the exact string `live` is test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayMode {
    Live,
    #[default]
    Test,
}

impl GatewayMode {
    pub fn parse(raw: &str) -> Self {
        if raw == "live" { Self::Live } else { Self::Test }
    }
}

/// Typed view of the payment method's key/value settings.
///
/// Built once when the host hands over its settings bag; the adapter only reads it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GatewaySettings {
    /// Gateway project (account) identifier.
    pub project_id: String,
    /// HMAC key shared with the gateway.
    pub secret_key: String,
    pub mode: GatewayMode,
    /// Discount percentage passed through to the gateway.
    pub discount_bits: i64,
    /// Send per-item purchase details along with the request.
    pub show_itemized_info: bool,
}

impl GatewaySettings {
    /// Builds settings from the host's raw key/value pairs.
    ///
    /// Unknown keys are ignored and missing keys fall back to defaults, so this
    /// never fails; completeness is checked separately by [`Self::has_credentials`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                KEY_PROJECT_ID => settings.project_id = value.to_string(),
                KEY_SECRET_KEY => settings.secret_key = value.to_string(),
                KEY_MODE => settings.mode = GatewayMode::parse(value),
                KEY_DISCOUNT => settings.discount_bits = int_value(value),
                KEY_INFO => settings.show_itemized_info = is_one(value),
                _ => {}
            }
        }
        settings
    }

    /// Parses a flat JSON object of settings, e.g. an exported settings file.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or_else(|| {
            GatewayError::SettingsError("settings must be a JSON object".to_string())
        })?;

        let mut pairs = Vec::with_capacity(object.len());
        for (key, value) in object {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(true) => "1".to_string(),
                Value::Bool(false) | Value::Null => String::new(),
                other => {
                    return Err(GatewayError::SettingsError(format!(
                        "unsupported value for '{key}': {other}"
                    )));
                }
            };
            pairs.push((key.as_str(), value));
        }
        Ok(Self::from_pairs(pairs))
    }

    pub fn has_credentials(&self) -> bool {
        !self.project_id.is_empty() && !self.secret_key.is_empty()
    }

    pub fn is_test_mode(&self) -> bool {
        self.mode != GatewayMode::Live
    }
}

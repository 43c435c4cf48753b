use super::coerce::{int_value, is_one};
use serde_json::Value;

pub const FIELD_CANCEL: &str = "cancel";
pub const FIELD_DATA: &str = "data";
pub const FIELD_SIGNATURE: &str = "signature";

/// What the gateway sends back to the host's payment-return endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallbackPayload {
    pub cancel: bool,
    /// Raw JSON blob, optionally carrying a `status` code.
    pub data: Option<String>,
    pub signature: Option<String>,
}

impl CallbackPayload {
    /// Collects the callback fields from decoded request parameters.
    ///
    /// The host may deliver them through a query string or a form body; both
    /// reduce to key/value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                FIELD_CANCEL => payload.cancel = is_one(&value),
                FIELD_DATA => payload.data = Some(value),
                FIELD_SIGNATURE => payload.signature = Some(value),
                _ => {}
            }
        }
        payload
    }

    /// Parses an `application/x-www-form-urlencoded` string such as a query.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Status code carried in `data`, if the blob is a JSON object with a
    /// non-null `status` field. Malformed or shapeless data counts as no status.
    pub fn status(&self) -> Option<i64> {
        let data: Value = serde_json::from_str(self.data.as_deref()?).ok()?;
        let status = data.as_object()?.get("status")?;
        match status {
            Value::Null => None,
            Value::Bool(flag) => Some(i64::from(*flag)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => Some(int_value(s)),
            Value::Array(items) => Some(i64::from(!items.is_empty())),
            Value::Object(_) => Some(1),
        }
    }
}

use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const TEST_SETTINGS: &str =
    r#"{"projectid": "1001", "secretkey": "topsecret", "mode": "test", "discount": "5", "info": "1"}"#;

pub fn snapshot(placed: bool) -> String {
    format!(
        r#"{{
    "currency": "USD",
    "language": "EN",
    "return_base": "https://shop.example/cart.php",
    "transaction": {{"public_id": "TX-1", "order_id": "1"}},
    "order": {{
        "order_id": "1",
        "total": "10.00",
        "placed": {placed},
        "items": [{{"name": "Widget", "amount": "2", "price": "5.00"}}],
        "profile": {{"name": "Ada Lovelace", "email": "ada@example.com"}}
    }}
}}"#
    )
}

pub fn write_temp(contents: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Encodes callback fields the way the gateway would put them on a query string.
pub fn callback_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

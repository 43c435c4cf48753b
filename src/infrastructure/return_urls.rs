use crate::domain::ports::ReturnUrlBuilder;
use crate::domain::request::ReturnUrls;
use crate::domain::transaction::PaymentTransaction;
use crate::error::Result;
use url::Url;

pub const TXN_ID_NAME: &str = "txnId";

/// Return URLs on the storefront's payment-return target.
///
/// All three point at the same handler with the transaction id attached; the
/// cancel-back and timeout pages are told apart by an extra flag.
#[derive(Debug, Clone)]
pub struct HostReturnUrls {
    base: Url,
}

impl HostReturnUrls {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn parse(base: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(base)?))
    }

    fn build(&self, tx: &PaymentTransaction, flag: Option<&str>) -> String {
        let mut url = self.base.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("target", "payment_return")
                .append_pair("txn_id_name", TXN_ID_NAME)
                .append_pair(TXN_ID_NAME, &tx.public_id);
            if let Some(flag) = flag {
                query.append_pair(flag, "1");
            }
        }
        url.into()
    }
}

impl ReturnUrlBuilder for HostReturnUrls {
    fn return_urls(&self, tx: &PaymentTransaction) -> ReturnUrls {
        ReturnUrls {
            redirect: self.build(tx, None),
            back: self.build(tx, Some("cancel")),
            timeout: self.build(tx, Some("timeout")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_urls_are_distinct() {
        let builder = HostReturnUrls::parse("https://shop.example/cart.php").unwrap();
        let urls = builder.return_urls(&PaymentTransaction::new("TX 1", "1"));

        assert_eq!(
            urls.redirect,
            "https://shop.example/cart.php?target=payment_return&txn_id_name=txnId&txnId=TX+1"
        );
        assert!(urls.back.ends_with("&cancel=1"));
        assert!(urls.timeout.ends_with("&timeout=1"));
        assert_ne!(urls.back, urls.timeout);
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        assert!(HostReturnUrls::parse("not a url").is_err());
    }
}

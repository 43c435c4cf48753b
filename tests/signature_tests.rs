use bitcoinus::application::adapter::{GatewayAdapter, compute_signature};
use bitcoinus::domain::order::{Order, OrderPaymentStatus, Profile};
use bitcoinus::domain::request::{CheckoutContext, PaymentRequest};
use bitcoinus::domain::settings::GatewaySettings;
use bitcoinus::domain::transaction::PaymentTransaction;
use bitcoinus::infrastructure::return_urls::HostReturnUrls;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn adapter(settings: GatewaySettings) -> GatewayAdapter {
    let urls = HostReturnUrls::parse("https://shop.example/cart.php").unwrap();
    GatewayAdapter::new(settings, Arc::new(urls))
}

fn order(total: Decimal) -> Order {
    Order {
        order_id: "1".to_string(),
        total,
        items: vec![],
        profile: Profile::default(),
        placed: true,
        payment_status: OrderPaymentStatus::Queued,
    }
}

fn random_text(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..24);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn random_request(rng: &mut impl Rng) -> PaymentRequest {
    let settings = GatewaySettings::from_pairs([
        ("projectid", random_text(rng)),
        ("secretkey", random_text(rng)),
        ("discount", rng.gen_range(0..50).to_string()),
    ]);
    let tx = PaymentTransaction::new(random_text(rng), "1");
    let total = Decimal::new(rng.gen_range(1..1_000_000), 2);
    adapter(settings).build_payment_request(&tx, &order(total), &CheckoutContext::new("USD"))
}

#[test]
fn test_example_request_in_test_mode() {
    let settings = GatewaySettings::from_pairs([
        ("projectid", "1001"),
        ("secretkey", "k"),
        ("mode", "test"),
        ("discount", "5"),
    ]);
    let tx = PaymentTransaction::new("TX-1", "1");
    let request =
        adapter(settings).build_payment_request(&tx, &order(dec!(10.00)), &CheckoutContext::new("USD"));

    assert_eq!(request.test, 1);
    assert_eq!(request.discount.bits, 5);
    assert_eq!(request.currency, "USD");
    assert_eq!(request.amount, dec!(10.00));
    assert_eq!(request.language, "EN");
    assert_eq!((request.name.as_str(), request.email.as_str(), request.street.as_str()), ("", "", ""));
}

#[test]
fn test_non_live_modes_are_test_mode() {
    for mode in [None, Some("test"), Some("sandbox"), Some("LIVE"), Some("")] {
        let mut pairs = vec![("projectid", "1"), ("secretkey", "k")];
        if let Some(mode) = mode {
            pairs.push(("mode", mode));
        }
        let adapter = adapter(GatewaySettings::from_pairs(pairs));
        assert!(adapter.is_test_mode(), "mode {mode:?} should be test mode");
    }
}

#[test]
fn test_signature_is_deterministic() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let request = random_request(&mut rng);
        let key = random_text(&mut rng);
        let json = request.canonical_json().unwrap();

        let first = compute_signature(&json, &key).unwrap();
        let second = compute_signature(&request.clone().canonical_json().unwrap(), &key).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn test_any_field_change_alters_signature() {
    let mut rng = rand::thread_rng();
    let mutations: [fn(&mut PaymentRequest); 13] = [
        |r| r.project_id.push('x'),
        |r| r.order_id.push('x'),
        |r| r.amount += dec!(0.01),
        |r| r.discount.bits += 1,
        |r| r.currency = "EUR".to_string(),
        |r| r.language = "DE".to_string(),
        |r| r.name.push('x'),
        |r| r.email.push('x'),
        |r| r.street.push('x'),
        |r| r.redirect.push('x'),
        |r| r.back.push('x'),
        |r| r.timeout.push('x'),
        |r| r.test ^= 1,
    ];

    for _ in 0..20 {
        let request = random_request(&mut rng);
        let key = random_text(&mut rng);
        let original = compute_signature(&request.canonical_json().unwrap(), &key).unwrap();

        for mutate in &mutations {
            let mut changed = request.clone();
            mutate(&mut changed);
            let signature = compute_signature(&changed.canonical_json().unwrap(), &key).unwrap();
            assert_ne!(signature, original);
        }
    }
}

#[test]
fn test_signature_depends_on_key() {
    let json = r#"{"pid":"1"}"#;
    assert_ne!(
        compute_signature(json, "a").unwrap(),
        compute_signature(json, "b").unwrap()
    );
}

use crate::{Price, Service};

use std::str::FromStr;

#[test]
fn given_numeric_price_when_deserialize_service_then_accepts_it() {
    let json = r#"{"serviceId": 1, "title": "Mug", "price": 25, "isActive": true}"#;
    let service: Service = serde_json::from_str(json).unwrap();
    assert_eq!(service.price, Price(25.0));
}

#[test]
fn given_decimal_string_price_when_deserialize_service_then_accepts_it() {
    let json = r#"{"serviceId": 2, "title": "Plaque", "price": "42.50", "isActive": false}"#;
    let service: Service = serde_json::from_str(json).unwrap();
    assert_eq!(service.price, Price(42.5));
    assert!(!service.is_active);
    assert_eq!(service.description, "");
}

#[test]
fn given_garbage_price_string_when_deserialize_then_fails() {
    let json = r#"{"serviceId": 3, "title": "Sign", "price": "lots"}"#;
    assert!(serde_json::from_str::<Service>(json).is_err());
}

#[test]
fn test_price_from_str_and_display() {
    assert_eq!(Price::from_str("$12").unwrap(), Price(12.0));
    assert!(Price::from_str("-3").is_err());
    assert_eq!(Price(7.5).to_string(), "$7.50");
}

#[test]
fn test_price_serializes_as_number() {
    let json = serde_json::to_string(&Price(19.99)).unwrap();
    assert_eq!(json, "19.99");
}

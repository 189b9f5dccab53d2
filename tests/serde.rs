use big_integer::BigInteger;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Account {
    id: u32,
    balance: BigInteger,
}

#[test]
fn test_serialize_as_string() {
    let value: BigInteger = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        "\"-123456789012345678901234567890\""
    );
    assert_eq!(serde_json::to_string(&BigInteger::new()).unwrap(), "\"0\"");
}

#[test]
fn test_deserialize_from_string_or_integer() {
    let value: BigInteger = serde_json::from_str("\"-123456789012345678901234567890\"").unwrap();
    assert_eq!(value.to_string(), "-123456789012345678901234567890");

    let value: BigInteger = serde_json::from_str("-42").unwrap();
    assert_eq!(value, -42);

    let value: BigInteger = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value, BigInteger::from(u64::MAX));
}

#[test]
fn test_deserialize_invalid() {
    let err = serde_json::from_str::<BigInteger>("\"12ab\"").unwrap_err();
    assert!(err.to_string().starts_with("invalid value: string \"12ab\""));

    assert!(serde_json::from_str::<BigInteger>("1.5").is_err());
    assert!(serde_json::from_str::<BigInteger>("true").is_err());
}

#[test]
fn test_struct_round_trip() {
    let account = Account {
        id: 7,
        balance: "98765432109876543210".parse().unwrap(),
    };
    let j = serde_json::to_string(&account).unwrap();
    assert_eq!(j, r#"{"id":7,"balance":"98765432109876543210"}"#);
    let back: Account = serde_json::from_str(&j).unwrap();
    assert_eq!(back, account);
}

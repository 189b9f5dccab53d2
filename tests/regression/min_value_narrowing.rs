use big_integer::BigInteger;

// Narrowing i64::MIN overflowed while forming its absolute value.
#[test]
fn test() {
    let min = BigInteger::from(i64::MIN);
    assert_eq!(min.to_i64().unwrap(), i64::MIN);
    assert_eq!((-&min).to_string(), "9223372036854775808");
    assert!((-min).to_i64().is_err());
}

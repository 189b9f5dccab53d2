use big_integer::{BigInteger, Scanner};

#[test]
fn big_integer() {
    assert_eq!(format!("{:?}", BigInteger::new()), "BigInteger(0)");
    assert_eq!(format!("{:?}", BigInteger::from(-1)), "BigInteger(-1)");
    assert_eq!(
        format!("{:?}", BigInteger::from(u64::MAX) * 10),
        "BigInteger(184467440737095516150)"
    );
}

#[test]
fn error() {
    let err = BigInteger::from_str_radix("12x", 10).unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(InvalidDigit { index: 2 }, offset: 0)");
    assert_eq!(err.to_string(), "invalid digit at index 2");

    let err = BigInteger::from_str_radix("1", 37).unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(InvalidBase(37), offset: 0)");
    assert_eq!(err.to_string(), "invalid base 37, expected a base in 2..=36");

    let err = BigInteger::from(1).checked_div(&BigInteger::new()).unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(DivisionByZero, offset: 0)");
    assert_eq!(err.to_string(), "division by zero");

    let err = (BigInteger::from(i64::MAX) + 1).to_i64().unwrap_err();
    assert_eq!(err.to_string(), "integer overflow");
}

#[test]
fn error_with_offset() {
    let mut scanner = Scanner::new("12 3z4");
    scanner.next_integer().unwrap();
    let err = scanner.next_integer().unwrap_err();
    assert_eq!(format!("{:?}", err), "Error(InvalidDigit { index: 1 }, offset: 3)");
    assert_eq!(err.to_string(), "invalid digit at index 1 at offset 3");

    let err = scanner.next_integer().unwrap_err();
    assert_eq!(err.to_string(), "EOF while parsing a number at offset 6");
}

use big_integer::BigInteger;

// Long division kept a leading zero limb in the running remainder.
#[test]
fn test() {
    let dividend: BigInteger = "5000000000000000000000000003".parse().unwrap();
    let divisor: BigInteger = "5000000000".parse().unwrap();
    let (q, r) = dividend.div_rem(&divisor).unwrap();
    assert_eq!(q.to_string(), "1000000000000000000");
    assert_eq!(r, 3);
}

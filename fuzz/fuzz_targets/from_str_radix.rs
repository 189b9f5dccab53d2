#![no_main]
use big_integer::BigInteger;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (base, text) = match data.split_first() {
        Some((&base, text)) => (u32::from(base % 40), text),
        None => return,
    };
    let Ok(text) = std::str::from_utf8(text) else {
        return;
    };
    if let Ok(value) = BigInteger::from_str_radix(text, base) {
        let printed = value.to_string_radix(base, false).unwrap();
        assert_eq!(BigInteger::from_str_radix(&printed, base).unwrap(), value);
    }
});

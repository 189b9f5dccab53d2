#![feature(test)]

extern crate test;

use big_integer::BigInteger;
use test::Bencher;

fn input_digits(len: usize) -> String {
    (0..len).map(|i| char::from(b'1' + (i % 9) as u8)).collect()
}

#[bench]
fn bench_parse_decimal(b: &mut Bencher) {
    let s = input_digits(500);
    b.bytes = s.len() as u64;
    b.iter(|| BigInteger::from_str_radix(&s, 10).unwrap());
}

#[bench]
fn bench_parse_hexadecimal(b: &mut Bencher) {
    let s = input_digits(400);
    b.bytes = s.len() as u64;
    b.iter(|| BigInteger::from_str_radix(&s, 16).unwrap());
}

#[bench]
fn bench_display_decimal(b: &mut Bencher) {
    let value: BigInteger = input_digits(2000).parse().unwrap();
    b.iter(|| value.to_string());
}

#[bench]
fn bench_to_string_hexadecimal(b: &mut Bencher) {
    let value: BigInteger = input_digits(300).parse().unwrap();
    b.iter(|| value.to_string_radix(16, true).unwrap());
}

#[bench]
fn bench_mul(b: &mut Bencher) {
    let x: BigInteger = input_digits(900).parse().unwrap();
    let y: BigInteger = input_digits(450).parse().unwrap();
    b.iter(|| &x * &y);
}

#[bench]
fn bench_div_rem(b: &mut Bencher) {
    let x: BigInteger = input_digits(900).parse().unwrap();
    let y: BigInteger = input_digits(200).parse().unwrap();
    b.iter(|| x.div_rem(&y).unwrap());
}

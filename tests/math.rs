#![allow(dead_code)]

#[path = "../src/math.rs"]
mod math;

mod lib {
    pub use std::vec::Vec;
    pub use std::{cmp, iter};
}

use math::{large, small, Limb, RADIX};
use std::cmp::Ordering;

#[test]
fn normalize_test() {
    let mut x: Vec<Limb> = vec![1, 0, 0];
    math::normalize(&mut x);
    assert_eq!(x, vec![1]);

    let mut x: Vec<Limb> = vec![0, 0];
    math::normalize(&mut x);
    assert!(x.is_empty());
}

#[test]
fn ishl_limbs_test() {
    let mut x: Vec<Limb> = vec![5, 7];
    math::ishl_limbs(&mut x, 2);
    assert_eq!(x, vec![0, 0, 5, 7]);

    // Shifting zero leaves it canonical.
    let mut x: Vec<Limb> = Vec::new();
    math::ishl_limbs(&mut x, 3);
    assert!(x.is_empty());
}

#[test]
fn from_u128_test() {
    assert!(math::from_u128(0).is_empty());
    assert_eq!(math::from_u128(999_999_999), vec![999_999_999]);
    assert_eq!(math::from_u128(1_000_000_000), vec![0, 1]);
    assert_eq!(
        math::from_u128(u64::MAX as u128),
        vec![709_551_615, 446_744_073, 18]
    );
}

#[test]
fn small_mul_test() {
    assert!(small::mul(&[], 7).is_empty());
    assert!(small::mul(&[1, 2], 0).is_empty());
    assert_eq!(small::mul(&[RADIX - 1], RADIX - 1), vec![1, 999_999_998]);
    assert_eq!(small::mul(&[500_000_000, 1], 2), vec![0, 3]);

    let mut x: Vec<Limb> = vec![1];
    for _ in 0..3 {
        small::imul(&mut x, 1000);
    }
    assert_eq!(x, vec![0, 1]);
}

#[test]
fn small_div_rem_test() {
    assert_eq!(small::div_rem(&[], 16), (vec![], 0));
    assert_eq!(small::div_rem(&[255], 16), (vec![15], 15));
    assert_eq!(small::div_rem(&[7], 8), (vec![], 7));
    // 10^9 + 1 = 16 * 62_500_000 + 1
    assert_eq!(small::div_rem(&[1, 1], 16), (vec![62_500_000], 1));
    // 2 * 10^18 + 5 = 3 * 666_666_666_666_666_668 + 1
    assert_eq!(
        small::div_rem(&[5, 0, 2], 3),
        (vec![666_666_668, 666_666_666], 1)
    );
}

#[test]
fn compare_test() {
    assert_eq!(large::compare(&[], &[]), Ordering::Equal);
    assert_eq!(large::compare(&[5], &[]), Ordering::Greater);
    assert_eq!(large::compare(&[RADIX - 1], &[0, 1]), Ordering::Less);
    assert_eq!(large::compare(&[1, 2], &[0, 2]), Ordering::Greater);
    assert_eq!(large::compare(&[9, 1], &[0, 2]), Ordering::Less);
    assert!(large::less(&[3], &[4]));
    assert!(!large::less(&[4], &[4]));
}

#[test]
fn add_test() {
    assert_eq!(large::add(&[RADIX - 1], &[1]), vec![0, 1]);
    assert_eq!(large::add(&[1], &[RADIX - 1, RADIX - 1]), vec![0, 0, 1]);
    assert!(large::add(&[], &[]).is_empty());
}

#[test]
fn sub_test() {
    assert_eq!(large::sub(&[0, 1], &[1]), vec![RADIX - 1]);
    assert_eq!(large::sub(&[0, 0, 1], &[1]), vec![RADIX - 1, RADIX - 1]);
    assert!(large::sub(&[4, 2], &[4, 2]).is_empty());
    assert_eq!(large::add_signed(&[7, 3], &[8], -1), vec![RADIX - 1, 2]);
}

#[test]
fn mul_test() {
    assert!(large::mul(&[1, 2, 3], &[]).is_empty());
    assert_eq!(large::mul(&[0, 1], &[0, 1]), vec![0, 0, 1]);
    // (10^9 - 1)^2 = 999999998_000000001
    assert_eq!(
        large::mul(&[RADIX - 1], &[RADIX - 1]),
        vec![1, 999_999_998]
    );
    assert_eq!(
        large::mul(&[RADIX - 1, RADIX - 1], &[RADIX - 1, RADIX - 1]),
        vec![1, 0, RADIX - 2, RADIX - 1]
    );
}

#[test]
fn div_rem_test() {
    let (q, r) = large::div_rem(&[100], &[3]);
    assert_eq!(q, vec![33]);
    assert_eq!(r, vec![1]);

    let (q, r) = large::div_rem(&[2], &[3]);
    assert!(q.is_empty());
    assert_eq!(r, vec![2]);

    let (q, r) = large::div_rem(&[], &[3]);
    assert!(q.is_empty());
    assert!(r.is_empty());

    // (10^18 + 5) / 10^9 = 10^9 remainder 5
    let (q, r) = large::div_rem(&[5, 0, 1], &[0, 1]);
    assert_eq!(q, vec![0, 1]);
    assert_eq!(r, vec![5]);

    // x = a * b + c with c < b divides back exactly.
    let a: Vec<Limb> = vec![123_456_789, 987_654_321, 42];
    let b: Vec<Limb> = vec![999_999_999, 7];
    let c: Vec<Limb> = vec![3, 7];
    let x = large::add(&large::mul(&a, &b), &c);
    let (q, r) = large::div_rem(&x, &b);
    assert_eq!(q, a);
    assert_eq!(r, c);
}

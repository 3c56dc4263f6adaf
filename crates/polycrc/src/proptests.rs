//! Property tests for the engine.
//!
//! Two families of invariants over randomized parameters and inputs:
//!
//! 1. **Protocol invariants**: any chunking of the input through `update`
//!    equals the one-shot result; clones diverge independently; `fresh`
//!    restores the initial value; `hexdigest` always decodes to `digest`.
//! 2. **Backend equivalence**: the slice-by-4 path produces the same digest
//!    as the byte-at-a-time reference for every width and direction.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

use crate::{Backend, Crc, CrcWidth};

/// Randomized algorithm parameters over all supported widths.
fn arb_params() -> impl Strategy<Value = (u128, u64, bool, u64)> {
  (
    prop_oneof![
      Just(CrcWidth::W8),
      Just(CrcWidth::W16),
      Just(CrcWidth::W24),
      Just(CrcWidth::W32),
      Just(CrcWidth::W64),
    ],
    any::<u64>(),
    any::<u64>(),
    any::<bool>(),
    any::<u64>(),
  )
    .prop_map(|(width, coefficients, init, reversed, xor_out)| {
      let mask = width.mask();
      let poly = (1u128 << width.bits()) | u128::from(coefficients & mask);
      (poly, init & mask, reversed, xor_out & mask)
    })
}

fn build(params: (u128, u64, bool, u64), backend: Backend) -> Crc {
  let (poly, init, reversed, xor_out) = params;
  match Crc::with_backend(poly, init, reversed, xor_out, backend) {
    Ok(crc) => crc,
    Err(err) => panic!("generated parameters must be valid: {err}"),
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn chunking_equivalence(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk_pattern in proptest::collection::vec(1usize..=128, 1..=16),
  ) {
    let mut oneshot = build(params, Backend::Bytewise);
    oneshot.update(&data);

    let mut streamed = oneshot.fresh();
    let mut offset = 0;
    let mut pattern_idx = 0;
    while offset < data.len() {
      let chunk = chunk_pattern[pattern_idx % chunk_pattern.len()];
      let end = (offset + chunk).min(data.len());
      streamed.update(&data[offset..end]);
      offset = end;
      pattern_idx += 1;
    }

    prop_assert_eq!(streamed.value(), oneshot.value(),
      "chunking pattern {:?} produced a different value", chunk_pattern);
  }

  #[test]
  fn backend_equivalence(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut bytewise = build(params, Backend::Bytewise);
    let mut slice4 = build(params, Backend::Slice4);
    for engine in [&mut bytewise, &mut slice4] {
      engine.update(a);
      engine.update(b);
    }

    prop_assert_eq!(bytewise.value(), slice4.value());
    let bytewise_digest = bytewise.digest();
    let slice4_digest = slice4.digest();
    prop_assert_eq!(bytewise_digest.as_bytes(), slice4_digest.as_bytes());
  }

  #[test]
  fn clone_isolation(
    params in arb_params(),
    prefix in proptest::collection::vec(any::<u8>(), 0..=256),
    left in proptest::collection::vec(any::<u8>(), 0..=256),
    right in proptest::collection::vec(any::<u8>(), 0..=256),
  ) {
    let mut original = build(params, Backend::Bytewise);
    original.update(&prefix);

    let mut branch = original.clone();
    prop_assert_eq!(original.value(), branch.value());

    original.update(&left);
    branch.update(&right);

    let mut expect_left = build(params, Backend::Bytewise);
    let joined: Vec<u8> = prefix.iter().chain(&left).copied().collect();
    expect_left.update(&joined);
    prop_assert_eq!(original.value(), expect_left.value());

    let mut expect_right = build(params, Backend::Bytewise);
    let joined: Vec<u8> = prefix.iter().chain(&right).copied().collect();
    expect_right.update(&joined);
    prop_assert_eq!(branch.value(), expect_right.value());
  }

  #[test]
  fn fresh_restores_initial_value(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    seed in proptest::collection::vec(any::<u8>(), 0..=64),
  ) {
    let (_, init, _, xor_out) = params;
    let mut crc = build(params, Backend::Bytewise);
    crc.update(&data);

    prop_assert_eq!(crc.fresh().value(), init ^ xor_out);

    let mut expected = build(params, Backend::Bytewise);
    expected.update(&seed);
    prop_assert_eq!(crc.fresh_with(&seed).value(), expected.value());
  }

  #[test]
  fn hexdigest_decodes_to_digest(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let mut crc = build(params, Backend::Bytewise);
    crc.update(&data);

    let hex = crc.hexdigest();
    let digest = crc.digest();
    prop_assert_eq!(hex.as_str().len(), 2 * digest.len());

    let decoded: Vec<u8> = hex
      .as_str()
      .as_bytes()
      .chunks(2)
      .map(|pair| {
        let hi = (pair[0] as char).to_digit(16).expect("hex digit");
        let lo = (pair[1] as char).to_digit(16).expect("hex digit");
        (hi * 16 + lo) as u8
      })
      .collect();
    prop_assert_eq!(decoded.as_slice(), digest.as_bytes());
  }

  #[test]
  fn digest_has_exact_width(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
  ) {
    let (poly, _, _, _) = params;
    let width = CrcWidth::classify(poly).expect("generated width is supported");

    let mut crc = build(params, Backend::Bytewise);
    crc.update(&data);

    let digest = crc.digest();
    prop_assert_eq!(digest.len(), width.digest_size());
    prop_assert_eq!(crc.value() & !width.mask(), 0);

    // Big-endian digest reconstructs the masked value, left-zero-padded.
    let mut reconstructed = 0u64;
    for &b in digest.as_bytes() {
      reconstructed = (reconstructed << 8) | u64::from(b);
    }
    prop_assert_eq!(reconstructed, crc.value());
  }

  #[test]
  fn empty_update_is_identity(params in arb_params()) {
    let mut crc = build(params, Backend::Bytewise);
    let before = crc.value();
    crc.update(&[]);
    prop_assert_eq!(crc.value(), before);
  }
}

//! Streaming consistency fuzzing.
//!
//! Any chunking of the input through `update` must equal the one-shot
//! digest, clones must stay isolated, and `hexdigest` must always decode to
//! `digest`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{Crc, CrcWidth};

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  coefficients: u64,
  init: u64,
  reversed: bool,
  xor_out: u64,
  data: Vec<u8>,
  chunks: Vec<u8>,
}

fn params(input: &Input) -> (u128, u64, bool, u64) {
  let width = CrcWidth::ALL[(input.width % 5) as usize];
  let mask = width.mask();
  let poly = (1u128 << width.bits()) | u128::from(input.coefficients & mask);
  (poly, input.init & mask, input.reversed, input.xor_out & mask)
}

fuzz_target!(|input: Input| {
  let (poly, init, reversed, xor_out) = params(&input);
  let mut oneshot = Crc::new(poly, init, reversed, xor_out).expect("generated width is supported");
  oneshot.update(&input.data);

  // Arbitrary chunking must match one-shot.
  let mut streamed = oneshot.fresh();
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < input.data.len() {
    let step = if input.chunks.is_empty() {
      1
    } else {
      (input.chunks[chunk_idx % input.chunks.len()] as usize).max(1)
    };
    let end = (offset + step).min(input.data.len());
    streamed.update(&input.data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }
  assert_eq!(streamed.value(), oneshot.value(), "chunked update diverged");

  // Clone isolation.
  let mut branch = streamed.clone();
  branch.update(b"divergence");
  assert_eq!(streamed.value(), oneshot.value(), "clone mutated its source");

  // Digest round trips.
  let digest = oneshot.digest();
  let hex = oneshot.hexdigest();
  assert_eq!(hex.as_str().len(), 2 * digest.len());
  let mut reconstructed = 0u64;
  for &b in digest.as_bytes() {
    reconstructed = (reconstructed << 8) | u64::from(b);
  }
  assert_eq!(reconstructed, oneshot.value(), "digest bytes diverged from value");

  // Fresh resets to the initial value.
  assert_eq!(oneshot.fresh().value(), init ^ xor_out);
});

//! Known-answer and protocol invariants for the engine.
//!
//! The known-answer table exercises every width and both directions against
//! independently computed CRC values for the strings `"T"` and
//! `"CatMouse987654321"`.

use polycrc::{Crc, CrcWidth};

// Generator polynomials, one per width. g8 is the product of two
// irreducible polynomials, g16 is the standard CCITT polynomial, g32 the
// AUTODIN-II polynomial.
const G8: u128 = 0x185;
const G16: u128 = 0x1_1021;
const G24: u128 = 0x15D_6DCB;
const G32: u128 = 0x1_04C1_1DB7;
const G64: u128 = 0x1_0000_0000_0000_001B;

const MSG: &[u8] = b"CatMouse987654321";

struct Known {
  poly: u128,
  init: u64,
  reversed: bool,
  t: u64,
  msg: u64,
}

const KNOWN_ANSWERS: [Known; 12] = [
  Known { poly: G8, init: 0, reversed: false, t: 0xFE, msg: 0x9D },
  Known { poly: G8, init: 0xFF, reversed: true, t: 0x4F, msg: 0x9B },
  Known { poly: G8, init: 0, reversed: true, t: 0xFE, msg: 0x62 },
  Known { poly: G16, init: 0, reversed: false, t: 0x1A71, msg: 0xE556 },
  Known { poly: G16, init: 0xFFFF, reversed: true, t: 0x1B26, msg: 0xF56E },
  Known { poly: G16, init: 0, reversed: true, t: 0x14A1, msg: 0xC28D },
  Known { poly: G24, init: 0, reversed: false, t: 0xBC_C49D, msg: 0xC4_B507 },
  Known { poly: G24, init: 0xFF_FFFF, reversed: true, t: 0x59_BD0E, msg: 0x0A_AA37 },
  Known { poly: G24, init: 0, reversed: true, t: 0xD5_2B0F, msg: 0x15_23AB },
  Known { poly: G32, init: 0, reversed: false, t: 0x6B93_DDDB, msg: 0x12DC_A0F4 },
  Known { poly: G32, init: 0xFFFF_FFFF, reversed: true, t: 0x41FB_859F, msg: 0xF7B4_00A7 },
  Known { poly: G32, init: 0, reversed: true, t: 0x6C06_95ED, msg: 0xC1A4_0EE5 },
];

#[test]
fn known_answers() {
  for (row, known) in KNOWN_ANSWERS.iter().enumerate() {
    let mut crc = Crc::new(known.poly, known.init, known.reversed, 0).expect("valid polynomial");

    crc.update(b"T");
    assert_eq!(crc.value(), known.t, "row {row}: value of \"T\"");

    let mut crc = crc.fresh();
    crc.update(MSG);
    assert_eq!(crc.value(), known.msg, "row {row}: value of {MSG:?}");
  }
}

#[test]
fn known_answers_incremental() {
  for (row, known) in KNOWN_ANSWERS.iter().enumerate() {
    let base = Crc::new(known.poly, known.init, known.reversed, 0).expect("valid polynomial");

    // Split at every position, including both ends.
    for split in 0..=MSG.len() {
      let mut crc = base.fresh();
      crc.update(&MSG[..split]);
      crc.update(&MSG[split..]);
      assert_eq!(crc.value(), known.msg, "row {row}: split {split}");
    }
  }
}

#[test]
fn crc64_check_values() {
  // CRC-64 (ISO-3309 form): reflected, zero init, zero xor-out.
  let mut crc = Crc::new(G64, 0, true, 0).expect("valid polynomial");
  crc.update(b"123456789");
  assert_eq!(crc.value(), 0x46A5_A938_8A5B_EFFE);
  assert_eq!(crc.hexdigest().as_str(), "46A5A9388A5BEFFE");

  // CRC-64/XZ: same shape as the 32-bit standard algorithms.
  let mut crc = Crc::new(
    (1u128 << 64) | 0x42F0_E1EB_A9EA_3693,
    u64::MAX,
    true,
    u64::MAX,
  )
  .expect("valid polynomial");
  crc.update(b"123456789");
  assert_eq!(crc.value(), 0x995D_C9BB_DF19_39FA);
}

#[test]
fn empty_input_from_zero_is_zero() {
  for &(poly, reversed) in &[(G8, false), (G16, true), (G24, false), (G32, true), (G64, true)] {
    let mut crc = Crc::new(poly, 0, reversed, 0).expect("valid polynomial");
    crc.update(b"");
    assert_eq!(crc.value(), 0, "poly {poly:#X}");
    assert!(crc.digest().as_bytes().iter().all(|&b| b == 0));
  }
}

#[test]
fn digest_length_covers_every_width() {
  let expectations = [
    (G8, 1usize),
    (G16, 2),
    (G24, 3),
    (G32, 4),
    (G64, 8),
  ];
  for (poly, len) in expectations {
    for data in [&b""[..], &b"x"[..], &b"123456789"[..], &[0u8; 300][..]] {
      let mut crc = Crc::with_defaults(poly).expect("valid polynomial");
      crc.update(data);
      assert_eq!(crc.digest().len(), len, "poly {poly:#X} len {}", data.len());
      assert_eq!(crc.hexdigest().as_str().len(), 2 * len);
    }
  }
}

#[test]
fn direction_changes_tables_for_wide_crcs() {
  for poly in [G16, G24, G32, G64] {
    let forward = Crc::new(poly, 0, false, 0).expect("valid polynomial");
    let reversed = Crc::new(poly, 0, true, 0).expect("valid polynomial");
    assert!(
      forward.table_entries().ne(reversed.table_entries()),
      "poly {poly:#X}: direction must produce distinct tables"
    );
  }
}

#[test]
fn width_classification_is_exposed() {
  let crc = Crc::new(G24, 0, false, 0).expect("valid polynomial");
  assert_eq!(crc.width(), CrcWidth::W24);
  assert_eq!(crc.width().bits(), 24);
  assert_eq!(crc.digest_size(), 3);
}

#[test]
fn shared_prefix_branches() {
  // One common prefix, many suffixes; clones do the prefix work once.
  let mut prefix = Crc::with_defaults(G32).expect("valid polynomial");
  prefix.update(b"header,");

  for suffix in [&b"alpha"[..], b"beta", b"gamma"] {
    let mut branch = prefix.clone();
    branch.update(suffix);

    let mut direct = prefix.fresh();
    direct.update(b"header,");
    direct.update(suffix);
    assert_eq!(branch.value(), direct.value());
  }

  // The prefix engine itself was never disturbed.
  let mut replay = prefix.fresh_with(b"header,");
  assert_eq!(replay.value(), prefix.value());
  replay.update(b"");
  assert_eq!(replay.value(), prefix.value());
}

//! Basic engine usage: one-shot, streaming, and shared-prefix cloning.
//!
//! Run with: `cargo run --example basic -p polycrc`

use polycrc::{Crc, InvalidPolynomial};

fn main() -> Result<(), InvalidPolynomial> {
  let data = b"123456789";

  // CRC-32 (ISO-HDLC) from raw parameters.
  let mut crc32 = Crc::new(0x104C11DB7, 0xFFFF_FFFF, true, 0xFFFF_FFFF)?;
  crc32.update(data);
  println!("CRC-32:          0x{}", crc32.hexdigest());
  assert_eq!(crc32.value(), 0xCBF4_3926);

  // CRC-16/CCITT-FALSE: forward algorithm.
  let mut crc16 = Crc::new(0x11021, 0xFFFF, false, 0)?;
  crc16.update(data);
  println!("CRC-16/CCITT:    0x{}", crc16.hexdigest());
  assert_eq!(crc16.value(), 0x29B1);

  // CRC-24/OPENPGP: 24-bit register with a 3-byte digest.
  let mut crc24 = Crc::new(0x1864CFB, 0xB704CE, false, 0)?;
  crc24.update(data);
  println!("CRC-24/OPENPGP:  0x{}", crc24.hexdigest());
  assert_eq!(crc24.digest().as_bytes(), &[0x21, 0xCF, 0x02]);

  // Streaming: chunked updates match the one-shot result.
  let mut streamed = crc32.fresh();
  streamed.update(b"1234");
  streamed.update(b"56789");
  assert_eq!(streamed.value(), crc32.value());
  println!("streaming matches one-shot");

  // Shared prefix: clone preserves accumulated state.
  let mut prefix = crc32.fresh_with(b"common,");
  let mut left = prefix.clone();
  left.update(b"left");
  prefix.update(b"right");
  assert_ne!(left.value(), prefix.value());
  println!("prefix branches diverge independently");

  println!("backend: {}", crc32.backend_name());
  Ok(())
}

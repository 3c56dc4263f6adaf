//! Emit C functions for a few catalogued algorithms.
//!
//! Run with: `cargo run --example generate -p polycrc-codegen`

use polycrc_codegen::{CEmitter, CodeEmitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let mut source = String::new();

  for (name, function_name) in [
    ("crc-32", "crc_32"),
    ("crc-ccitt-false", "crc_ccitt_false"),
    ("crc-24", "crc_24"),
    ("crc-64", "crc_64"),
  ] {
    let crc = polycrc_catalog::build(name)?;
    source.clear();
    CEmitter::new().emit(&crc, function_name, &mut source)?;
    println!("{source}");
  }

  // Custom type names for codebases with their own typedefs.
  let crc = polycrc_catalog::build("crc-16")?;
  source.clear();
  CEmitter::new()
    .data_type("uint8_t")
    .crc_type("uint16_t")
    .emit(&crc, "crc16_arc", &mut source)?;
  println!("{source}");

  Ok(())
}

//! Catalog lookup fuzzing.
//!
//! Name resolution must never panic, and every resolvable entry must build
//! or fail exactly as its width dictates.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
  if let Some(spec) = polycrc_catalog::find(name) {
    match spec.build() {
      Ok(mut crc) => {
        assert!(spec.supported());
        crc.update(name.as_bytes());
        let _ = crc.hexdigest();
      }
      Err(_) => assert!(!spec.supported()),
    }
  } else {
    assert!(polycrc_catalog::build(name).is_err());
  }
});

//! Table-driven CRC engine for arbitrary generator polynomials.
//!
//! Any 8, 16, 24, 32 or 64 bit polynomial can be used, in either the
//! bit-forward or the bit-reversed (reflected) algorithm. The engine builds
//! its 256-entry lookup table at construction and exposes the incremental
//! `update`/`digest` protocol.
//!
//! # Supported Widths
//!
//! | Width | Register | Digest |
//! |-------|----------|--------|
//! | 8-bit | `u8` | 1 byte |
//! | 16-bit | `u16` | 2 bytes |
//! | 24-bit | `u32` (masked) | 3 bytes |
//! | 32-bit | `u32` | 4 bytes |
//! | 64-bit | `u64` | 8 bytes |
//!
//! # Example
//!
//! ```rust
//! use polycrc::Crc;
//!
//! // CRC-32 (ISO-HDLC): polynomial with the leading bit, all-ones initial
//! // register, reflected, all-ones final XOR.
//! let mut crc = Crc::new(0x104C11DB7, 0xFFFF_FFFF, true, 0xFFFF_FFFF)?;
//! crc.update(b"123456789");
//! assert_eq!(crc.value(), 0xCBF4_3926);
//!
//! // Streaming: chunked updates match the one-shot result.
//! let mut chunked = crc.fresh();
//! chunked.update(b"1234");
//! chunked.update(b"56789");
//! assert_eq!(chunked.digest().as_bytes(), crc.digest().as_bytes());
//!
//! // Cloning preserves accumulated state for shared-prefix computations.
//! let mut branch = chunked.clone();
//! branch.update(b"suffix");
//! # Ok::<(), polycrc::InvalidPolynomial>(())
//! ```
//!
//! # Backends
//!
//! Block updates run on one of two observably equivalent backends, the
//! byte-at-a-time reference or a slice-by-4 path, selected once per process
//! and reported by [`Crc::backend_name`]. `POLYCRC_BACKEND=bytewise|slice4`
//! forces the choice under `std`.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! polycrc = { version = "0.1", default-features = false, features = ["slice-by-4"] }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod dispatch;
mod engine;
mod error;
mod kernels;
mod poly;
mod table;

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;

pub use dispatch::Backend;
pub use engine::{Crc, Digest, HexDigest};
pub use error::InvalidPolynomial;
pub use poly::{CrcWidth, reflect};
pub use table::CrcTable;

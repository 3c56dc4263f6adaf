//! C source emission for table-driven CRC functions.
//!
//! Renders a self-contained C function implementing an engine's block-update
//! algorithm, with the literal lookup table embedded as hexadecimal
//! constants. This is a pure formatting step over the description the engine
//! exposes (width, direction, table contents); no CRC computation happens
//! here, and the only I/O is writing text to the caller-supplied sink.
//!
//! Retargeting to another output language is a matter of implementing
//! [`CodeEmitter`] for a new type over the same description; there is no
//! inheritance relationship with the engine.
//!
//! # Example
//!
//! ```
//! use polycrc::Crc;
//! use polycrc_codegen::{CEmitter, CodeEmitter};
//!
//! let crc = Crc::new(0x104C11DB7, 0xFFFF_FFFF, true, 0xFFFF_FFFF)?;
//! let mut source = String::new();
//! CEmitter::new().emit(&crc, "crc_32", &mut source)?;
//! assert!(source.contains("UINT32"));
//! assert!(source.contains("crc_32(UINT8 *data, int len, UINT32 crc)"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

use core::fmt::{self, Write};

use polycrc::{Crc, CrcWidth};

/// Renders a CRC block-update function in some target language.
///
/// Implementations are parameterized by the engine's description (table
/// contents, width, direction, and a function name) and write the finished
/// source to `out`.
pub trait CodeEmitter {
  /// Emit a function named `function_name` implementing `crc`'s algorithm.
  ///
  /// # Errors
  ///
  /// Propagates formatting errors from the sink.
  fn emit(&self, crc: &Crc, function_name: &str, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// The C emitter.
///
/// Produces a function in a general C-like syntax:
///
/// ```c
/// // Automatically generated CRC function
/// // polynomial: 0x104C11DB7, bit reverse algorithm
/// UINT32
/// crc_32(UINT8 *data, int len, UINT32 crc)
/// {
///     static const UINT32 table[256] = {
///     ...
///     };
///     while (len > 0)
///     {
///         crc = table[*data ^ (UINT8)crc] ^ (crc >> 8);
///         data++;
///         len--;
///     }
///     return crc;
/// }
/// ```
///
/// The integer type names default to `UINT8` for the data pointer and to
/// `UINT8`/`UINT16`/`UINT32`/`UINT64` for the CRC register by width; both
/// can be overridden for codebases with their own typedefs. 24-bit CRCs are
/// computed in a 32-bit register, so their register type defaults to
/// `UINT32` and the emitted code masks the register to 24 bits: before the
/// loop for the reversed algorithm, after it for the forward one, matching
/// the engine's own masking discipline.
#[derive(Clone, Copy, Debug, Default)]
pub struct CEmitter<'a> {
  data_type: Option<&'a str>,
  crc_type: Option<&'a str>,
}

impl<'a> CEmitter<'a> {
  /// An emitter with default type names.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      data_type: None,
      crc_type: None,
    }
  }

  /// Override the data pointer's element type (default `UINT8`).
  #[must_use]
  pub const fn data_type(mut self, name: &'a str) -> Self {
    self.data_type = Some(name);
    self
  }

  /// Override the CRC register type (default by width, 24-bit promoted to
  /// the 32-bit register type).
  #[must_use]
  pub const fn crc_type(mut self, name: &'a str) -> Self {
    self.crc_type = Some(name);
    self
  }

  fn default_crc_type(width: CrcWidth) -> &'static str {
    match width {
      CrcWidth::W8 => "UINT8",
      CrcWidth::W16 => "UINT16",
      CrcWidth::W24 | CrcWidth::W32 => "UINT32",
      CrcWidth::W64 => "UINT64",
    }
  }
}

impl CodeEmitter for CEmitter<'_> {
  fn emit(&self, crc: &Crc, function_name: &str, out: &mut dyn fmt::Write) -> fmt::Result {
    let width = crc.width();
    let size = width.digest_size();
    let data_type = self.data_type.unwrap_or("UINT8");
    let crc_type = self.crc_type.unwrap_or_else(|| Self::default_crc_type(width));

    writeln!(out, "// Automatically generated CRC function")?;
    if crc.reversed() {
      writeln!(out, "// polynomial: {:#X}, bit reverse algorithm", crc.poly())?;
    } else {
      writeln!(out, "// polynomial: {:#X}", crc.poly())?;
    }
    writeln!(out, "{crc_type}")?;
    writeln!(out, "{function_name}({data_type} *data, int len, {crc_type} crc)")?;
    writeln!(out, "{{")?;

    // The table block: fixed-width hex constants, entries-per-line chosen
    // by entry byte width (cosmetic only).
    write!(out, "    static const {crc_type} table[256] = {{")?;
    let per_line = match width {
      CrcWidth::W8 | CrcWidth::W16 => 8,
      CrcWidth::W24 | CrcWidth::W32 => 4,
      CrcWidth::W64 => 2,
    };
    let digits = 2 * size;
    let suffix = if size <= 4 { "U" } else { "ULL" };
    for (i, entry) in crc.table_entries().enumerate() {
      if i % per_line == 0 {
        write!(out, "\n    ")?;
      }
      write!(out, "0x{entry:0digits$X}{suffix},")?;
    }
    writeln!(out, "\n    }};")?;

    // 24-bit CRCs run in a 4-byte register: the reversed algorithm clears
    // the high byte before the loop, the forward one after it.
    let mask24 = width == CrcWidth::W24;
    if mask24 && crc.reversed() {
      writeln!(out, "    crc = crc & 0xFFFFFFU;")?;
    }

    writeln!(out, "    while (len > 0)")?;
    writeln!(out, "    {{")?;
    if size == 1 {
      // Both 8-bit algorithms share the shift-free update expression.
      writeln!(out, "        crc = table[*data ^ ({data_type})crc];")?;
    } else if crc.reversed() {
      writeln!(out, "        crc = table[*data ^ ({data_type})crc] ^ (crc >> 8);")?;
    } else {
      let shift = 8 * (size - 1);
      writeln!(
        out,
        "        crc = table[*data ^ ({data_type})(crc >> {shift})] ^ (crc << 8);"
      )?;
    }
    writeln!(out, "        data++;")?;
    writeln!(out, "        len--;")?;
    writeln!(out, "    }}")?;

    if mask24 && !crc.reversed() {
      writeln!(out, "    crc = crc & 0xFFFFFFU;")?;
    }

    writeln!(out, "    return crc;")?;
    writeln!(out, "}}")
  }
}

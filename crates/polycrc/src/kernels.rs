//! Block update kernels.
//!
//! The byte-at-a-time kernels are the reference definition of the update
//! algorithm; the slice-by-4 kernels are a multi-byte substitution that must
//! be observably equivalent (identical final CRC for every input). Names
//! ending in `_r` are the bit-reversed variants.
//!
//! Forward kernels shift the register left and index with its top byte;
//! reversed kernels shift right and index with its low byte. The 24-bit
//! kernels run in a 32-bit register: the forward variant masks back to 24
//! bits after each step, the reversed variant masks once before the loop.

// Table indices are `u8` casts into 256-entry tables; chunk sizes are
// guaranteed by `as_chunks`.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// Byte-at-a-Time Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// 8-bit update, both directions.
///
/// With an 8-bit register the shift terms of the wider kernels vanish
/// (`crc << 8` is zero, `crc >> 0` is the register), so the forward and
/// reversed update expressions coincide; only the table contents differ.
#[inline]
pub(crate) fn crc8(mut crc: u8, table: &[u8; 256], data: &[u8]) -> u8 {
  for &b in data {
    crc = table[(b ^ crc) as usize];
  }
  crc
}

/// 16-bit forward update.
#[inline]
pub(crate) fn crc16(mut crc: u16, table: &[u16; 256], data: &[u8]) -> u16 {
  for &b in data {
    crc = table[(b ^ (crc >> 8) as u8) as usize] ^ (crc << 8);
  }
  crc
}

/// 16-bit reversed update.
#[inline]
pub(crate) fn crc16_r(mut crc: u16, table: &[u16; 256], data: &[u8]) -> u16 {
  for &b in data {
    crc = table[(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

/// 24-bit forward update in a 32-bit register.
#[inline]
pub(crate) fn crc24(mut crc: u32, table: &[u32; 256], data: &[u8]) -> u32 {
  for &b in data {
    crc = table[(b ^ (crc >> 16) as u8) as usize] ^ (crc << 8);
    crc &= 0x00FF_FFFF;
  }
  crc
}

/// 24-bit reversed update in a 32-bit register.
#[inline]
pub(crate) fn crc24_r(mut crc: u32, table: &[u32; 256], data: &[u8]) -> u32 {
  crc &= 0x00FF_FFFF;
  for &b in data {
    crc = table[(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

/// 32-bit forward update.
#[inline]
pub(crate) fn crc32(mut crc: u32, table: &[u32; 256], data: &[u8]) -> u32 {
  for &b in data {
    crc = table[(b ^ (crc >> 24) as u8) as usize] ^ (crc << 8);
  }
  crc
}

/// 32-bit reversed update.
#[inline]
pub(crate) fn crc32_r(mut crc: u32, table: &[u32; 256], data: &[u8]) -> u32 {
  for &b in data {
    crc = table[(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

/// 64-bit forward update.
#[inline]
pub(crate) fn crc64(mut crc: u64, table: &[u64; 256], data: &[u8]) -> u64 {
  for &b in data {
    crc = table[(b ^ (crc >> 56) as u8) as usize] ^ (crc << 8);
  }
  crc
}

/// 64-bit reversed update.
#[inline]
pub(crate) fn crc64_r(mut crc: u64, table: &[u64; 256], data: &[u8]) -> u64 {
  for &b in data {
    crc = table[(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Slice-by-4 Kernels (reversed mode)
// ─────────────────────────────────────────────────────────────────────────────
//
// Four bytes per iteration through four stacked tables, with a byte-at-a-time
// tail for the remainder. The register bytes are folded through the deeper
// tables, pure data bytes through the shallower ones.

/// 16-bit reversed slice-by-4 update.
#[inline]
pub(crate) fn crc16_r_slice4(mut crc: u16, tables: &[[u16; 256]; 4], data: &[u8]) -> u16 {
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    let a = u16::from_le_bytes([chunk[0], chunk[1]]) ^ crc;
    crc = tables[3][(a & 0xFF) as usize]
      ^ tables[2][(a >> 8) as usize]
      ^ tables[1][chunk[2] as usize]
      ^ tables[0][chunk[3] as usize];
  }

  for &b in remainder {
    crc = tables[0][(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

/// 24-bit reversed slice-by-4 update in a 32-bit register.
#[inline]
pub(crate) fn crc24_r_slice4(mut crc: u32, tables: &[[u32; 256]; 4], data: &[u8]) -> u32 {
  crc &= 0x00FF_FFFF;
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    let a = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], 0]) ^ crc;
    crc = tables[3][(a & 0xFF) as usize]
      ^ tables[2][((a >> 8) & 0xFF) as usize]
      ^ tables[1][(a >> 16) as usize]
      ^ tables[0][chunk[3] as usize];
  }

  for &b in remainder {
    crc = tables[0][(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

/// 32-bit reversed slice-by-4 update.
#[inline]
pub(crate) fn crc32_r_slice4(mut crc: u32, tables: &[[u32; 256]; 4], data: &[u8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    let a = u32::from_le_bytes(*chunk) ^ crc;
    crc = tables[3][(a & 0xFF) as usize]
      ^ tables[2][((a >> 8) & 0xFF) as usize]
      ^ tables[1][((a >> 16) & 0xFF) as usize]
      ^ tables[0][(a >> 24) as usize];
  }

  for &b in remainder {
    crc = tables[0][(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

/// 64-bit reversed slice-by-4 update.
#[inline]
pub(crate) fn crc64_r_slice4(mut crc: u64, tables: &[[u64; 256]; 4], data: &[u8]) -> u64 {
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    let a = (crc as u32) ^ u32::from_le_bytes(*chunk);
    crc = (crc >> 32)
      ^ tables[3][(a & 0xFF) as usize]
      ^ tables[2][((a >> 8) & 0xFF) as usize]
      ^ tables[1][((a >> 16) & 0xFF) as usize]
      ^ tables[0][(a >> 24) as usize];
  }

  for &b in remainder {
    crc = tables[0][(b ^ crc as u8) as usize] ^ (crc >> 8);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Backend selection: probe once, cache, allow explicit override.
//!
//! Two block-update implementations exist: the portable byte-at-a-time
//! reference and the slice-by-4 accelerated path. Selection runs once per
//! process from an ordered candidate list (best first) and is cached;
//! engines capture the selected backend at construction and depend only on
//! the kernel signature, never on which implementation backs it. The two
//! must be observably equivalent for every input.
//!
//! Under `std` the choice can be forced with `POLYCRC_BACKEND=bytewise` or
//! `POLYCRC_BACKEND=slice4` for debugging and differential testing.

/// A block-update implementation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
  /// Byte-at-a-time table lookup; the reference definition.
  Bytewise,
  /// Four bytes per step through stacked tables (reversed mode only;
  /// engines fall back to bytewise where slicing does not apply).
  Slice4,
}

impl Backend {
  /// Diagnostic name of this backend.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bytewise => "portable/bytewise",
      Self::Slice4 => "portable/slice4",
    }
  }
}

/// A candidate backend with an availability probe.
///
/// Candidates are ordered from best to worst; the selector takes the first
/// whose probe passes. The bytewise candidate is unconditionally available,
/// so selection always succeeds.
struct Candidate {
  backend: Backend,
  available: fn() -> bool,
}

const CANDIDATES: [Candidate; 2] = [
  Candidate {
    backend: Backend::Slice4,
    available: slice4_available,
  },
  Candidate {
    backend: Backend::Bytewise,
    available: always,
  },
];

fn slice4_available() -> bool {
  cfg!(feature = "slice-by-4")
}

fn always() -> bool {
  true
}

/// Parse a force-override value.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_force(value: &str) -> Option<Backend> {
  match value {
    "bytewise" => Some(Backend::Bytewise),
    "slice4" => Some(Backend::Slice4),
    _ => None,
  }
}

#[cfg(feature = "std")]
fn forced() -> Option<Backend> {
  let value = std::env::var("POLYCRC_BACKEND").ok()?;
  parse_force(&value)
}

#[cfg(not(feature = "std"))]
fn forced() -> Option<Backend> {
  None
}

/// Run the candidate probe. Not cached; use [`selected`].
fn choose() -> Backend {
  if let Some(backend) = forced() {
    return backend;
  }
  for candidate in &CANDIDATES {
    if (candidate.available)() {
      return candidate.backend;
    }
  }
  // The bytewise candidate always probes true.
  Backend::Bytewise
}

/// The process-wide selected backend, probed on first call.
#[cfg(feature = "std")]
pub(crate) fn selected() -> Backend {
  use std::sync::OnceLock;

  static SELECTED: OnceLock<Backend> = OnceLock::new();
  *SELECTED.get_or_init(choose)
}

/// The process-wide selected backend, probed on first call.
#[cfg(not(feature = "std"))]
pub(crate) fn selected() -> Backend {
  use core::sync::atomic::{AtomicU8, Ordering};

  static SELECTED: AtomicU8 = AtomicU8::new(0);
  match SELECTED.load(Ordering::Acquire) {
    1 => Backend::Bytewise,
    2 => Backend::Slice4,
    _ => {
      let backend = choose();
      let tag = match backend {
        Backend::Bytewise => 1,
        Backend::Slice4 => 2,
      };
      SELECTED.store(tag, Ordering::Release);
      backend
    }
  }
}

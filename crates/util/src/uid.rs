//! Contains [Uid], used to give UI elements identities that are unique for the
//! lifetime of the process.

use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A unique ID.
///
/// No 2 calls to [Uid::new] return the same value within a process. The
/// creation time is mixed in so that IDs from separate runs are unlikely to
/// collide either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid {
    nanos: u64,
    seq: u64,
}

impl Uid {
    pub fn new() -> Self {
        static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

        // A clock before the epoch only costs us the cross-run uniqueness, the
        // sequence number still keeps IDs apart within this process.
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            nanos,
            seq: NEXT_SEQ.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// This ID as a string with a human readable prefix, e.g.
    /// `menu-button-18a2f...-3`.
    pub fn tagged(&self, prefix: &str) -> String {
        format!("{prefix}-{self}")
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Uid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}-{:x}", self.nanos, self.seq)
    }
}

//! Admin dashboard data and the flag itself.
//!
//! The flag ships inside the artifact, lightly obfuscated with base64 so it
//! does not fall out of a casual string search. Decoding it is not the
//! puzzle; getting [`AuthGate::require_admin`] to say yes (or noticing that
//! you do not have to) is.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::auth::AuthGate;
use crate::storage::Storage;

// Base64 of the flag, not stored in cleartext. Can you find it?
const FLAG_B64: &str = "TkZTVUNURns4YTVmMTMwMDQyZTMwNDNjZTk3Yzg1MTYyMWJlM2V9";

/// Decode the shipped flag.
fn decode_flag() -> String {
    STANDARD
        .decode(FLAG_B64)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Reveal the flag to an admin session.
///
/// Returns `None` unless `gate` reports the admin role. The gate's opinion
/// is, of course, only as trustworthy as the storage behind it.
#[must_use]
pub fn reveal_flag<S: Storage>(gate: &AuthGate<S>) -> Option<String> {
    if !gate.require_admin() {
        return None;
    }
    Some(decode_flag())
}

/// The fake numbers shown on the admin dashboard.
///
/// The original page counts these up with an animation; the animation is
/// view-layer, the numbers are data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub revenue_cents: u64,
    pub customers: u64,
    pub conversion_bps: u64,
}

impl DashboardStats {
    /// The demo dashboard's static figures.
    #[must_use]
    pub const fn demo() -> Self {
        Self {
            total_orders: 1284,
            revenue_cents: 8_421_500,
            customers: 956,
            conversion_bps: 320,
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clearance-rate arithmetic for the admin dashboard.

/// Share of approved no-due records, as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearanceRate {
    percent: u32,
}

impl ClearanceRate {
    /// The rounded percentage in `0..=100`.
    #[must_use]
    pub const fn percent(&self) -> u32 {
        self.percent
    }
}

impl std::fmt::Display for ClearanceRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent)
    }
}

/// Computes `round(approved / total * 100)`.
///
/// An empty record set yields `0%`. `approved` is clamped to `total` so a
/// racing count can never produce a rate above 100.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn clearance_rate(approved: i64, total: i64) -> ClearanceRate {
    if total <= 0 {
        return ClearanceRate { percent: 0 };
    }

    let approved: i64 = approved.clamp(0, total);
    let ratio: f64 = approved as f64 / total as f64;
    ClearanceRate {
        percent: (ratio * 100.0).round() as u32,
    }
}

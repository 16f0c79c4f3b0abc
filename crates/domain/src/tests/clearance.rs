// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clearance_rate;

#[test]
fn test_empty_record_set_is_zero_percent() {
    assert_eq!(clearance_rate(0, 0).to_string(), "0%");
}

#[test]
fn test_rate_is_rounded_to_whole_percent() {
    // 1/3 = 33.33..%
    assert_eq!(clearance_rate(1, 3).to_string(), "33%");
    // 2/3 = 66.66..%
    assert_eq!(clearance_rate(2, 3).to_string(), "67%");
    // 1/8 = 12.5% rounds half away from zero
    assert_eq!(clearance_rate(1, 8).percent(), 13);
}

#[test]
fn test_full_clearance() {
    assert_eq!(clearance_rate(1200, 1200).to_string(), "100%");
}

#[test]
fn test_approved_above_total_is_clamped() {
    assert_eq!(clearance_rate(5, 4).percent(), 100);
}

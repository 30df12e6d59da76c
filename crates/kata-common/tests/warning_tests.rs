//! Tests for warning deduplication.
//!
//! Kept in its own test binary with a single test: `clear_warnings` resets
//! process-wide state that parallel tests would otherwise observe.

use kata_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_warnings_deduplicate_until_cleared() {
    warn_once("CSS", "empty class fragment");
    warn_once("CSS", "empty class fragment");
    warn_once("Serial", "field \"depth\" not present on prototype");
    assert!(has_warned("CSS", "empty class fragment"));
    assert!(has_warned("Serial", "field \"depth\" not present on prototype"));
    assert!(!has_warned("Serial", "empty class fragment"));

    clear_warnings();

    assert!(!has_warned("CSS", "empty class fragment"));
    assert!(!has_warned("Serial", "field \"depth\" not present on prototype"));
}

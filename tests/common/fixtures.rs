//! Static result-file corpora used across harnesses.
//!
//! Each fixture is the full text of an input file together with the exact
//! stdout stampnorm must produce for it, where one exists.

/// Smallest valid file: no peers.
pub const MINIMAL: &str = "run1\nBefore: 100\nAfter: 150\n";
pub const MINIMAL_EXPECTED: &str = "run1\nmaster_begin: 0\nmaster_end: 50\n\n";

/// Two peers.
pub const TWO_PEERS: &str = "run2\nBefore: 1000\npeer0: 1005\npeer1: 1010\nAfter: 1020\n";
pub const TWO_PEERS_EXPECTED: &str =
    "run2\nmaster_begin: 0\nmid_0: 5\nmid_1: 10\nmaster_end: 20\n\n";

/// Output of the MPI broadcast test as the benchmark prints it: microsecond
/// wall clock, label containing a colon, peers tagged `remote <i>`.
pub const BROADCAST_TEST: &str = "\
Experiment: broadcast_test, N=4
Before: 1713812345000100
remote 0: 1713812345000150
remote 1: 1713812345000148
remote 2: 1713812345000099
After: 1713812345000210
";
pub const BROADCAST_TEST_EXPECTED: &str = "\
Experiment: broadcast_test, N=4
master_begin: 0
mid_0: 50
mid_1: 48
mid_2: -1
master_end: 110

";

/// Same as [`TWO_PEERS`] but with CRLF endings and stray padding.
pub const PADDED_CRLF: &str =
    "  run2  \r\n\tBefore: 1000 \r\npeer0:1005\r\n  peer1 :   1010\r\nAfter:   1020\r\n";

/// Second line tagged `Start` instead of `Before`.
pub const MALFORMED_TAG: &str = "run3\nStart: 10\npeer0: 12\nAfter: 20\n";

/// `After` value is not a number.
pub const NON_NUMERIC: &str = "run4\nBefore: 10\npeer0: 12\nAfter: abc\n";

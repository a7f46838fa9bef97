//! Decode and query tests covering the flag table contract end to end.

use rstest::rstest;
use taint_flags::{decode, list, parse_taint_query, QueryWarning, TAINT_FLAGS};

#[test]
fn table_has_eighteen_entries() {
    assert_eq!(TAINT_FLAGS.len(), 18);
    for (bit, flag) in TAINT_FLAGS.iter().enumerate() {
        assert_eq!(flag.shift, bit as u32);
    }
}

#[test]
fn set_details_match_set_bits() {
    let status = 1 | 1 << 4 | 1 << 17;
    let report = decode(status);
    let set_values: Vec<u64> = report
        .details
        .iter()
        .filter(|detail| detail.set)
        .map(|detail| detail.value)
        .collect();
    assert_eq!(set_values, vec![1, 1 << 4, 1 << 17]);
}

#[test]
fn decode_zero_reports_not_tainted() {
    let report = decode(0);
    assert!(report.is_clean());
    assert_eq!(report.details.iter().filter(|detail| detail.set).count(), 0);
}

#[test]
fn bits_outside_table_are_ignored() {
    let report = decode(1 << 18 | 1 << 63);
    assert_eq!(report.details.iter().filter(|detail| detail.set).count(), 0);
    assert!(!report.is_clean());
}

#[test]
fn every_mnemonic_round_trips_to_its_bit() {
    for flag in &TAINT_FLAGS {
        let parsed = parse_taint_query(&flag.on_char.to_string());
        assert_eq!(parsed.status, flag.value(), "mnemonic {}", flag.on_char);
        assert!(parsed.warnings.is_empty());
    }
}

#[rstest]
#[case("PG", 1)]
#[case("GP", 1)]
#[case("pg", 1)]
fn on_flag_takes_precedence_over_off_flag(#[case] input: &str, #[case] expected: u64) {
    let parsed = parse_taint_query(input);
    assert_eq!(parsed.status, expected);
    assert_eq!(parsed.warnings, vec![QueryWarning::Conflict { on: 'P', off: 'G' }]);
}

#[test]
fn unknown_letter_is_non_fatal() {
    let parsed = parse_taint_query("Z");
    assert_eq!(parsed.status, 0);
    assert_eq!(parsed.warnings, vec![QueryWarning::UnknownFlag { flag: 'Z' }]);
}

#[test]
fn listing_shape() {
    let lines = list();
    assert_eq!(lines.iter().filter(|line| !line.unset).count(), 18);
    assert_eq!(lines.iter().filter(|line| line.unset).count(), 1);
}

#[rstest]
#[case(0, "0000000000000000")]
#[case(1, "0000000000000001")]
#[case(1 << 17, "0000000000020000")]
#[case(u64::MAX, "FFFFFFFFFFFFFFFF")]
fn hex_rendering(#[case] status: u64, #[case] expected: &str) {
    assert_eq!(decode(status).hex(), expected);
}

#[test]
fn report_serializes() {
    let value = serde_json::to_value(decode(1)).unwrap();
    assert_eq!(value["status"], 1);
    assert_eq!(value["symbols"][0]["ch"], "P");
}

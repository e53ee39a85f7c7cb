#![cfg(test)]
use ipcast_common::addr::parse::{self, ParseError};
use ipcast_common::addr::report::{self, Report};

fn row<'a>(report: &'a Report, label: &str) -> &'a str {
    report
        .entries()
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, value)| value.as_str())
        .unwrap_or_else(|| panic!("missing row '{label}'"))
}

/// 256 values spread evenly across the whole 32-bit space, including
/// both ends.
fn sample_space() -> impl Iterator<Item = u32> {
    (0..=255u32).map(|i| i.wrapping_mul(0x0101_0101))
}

#[test]
fn dotted_output_round_trips_across_the_space() {
    for value in sample_space() {
        let report = report::build(value, "roundtrip");
        let dotted = row(&report, "Dotted Decimal");
        assert_eq!(
            parse::parse(dotted),
            Ok(value),
            "dotted form '{dotted}' of {value} did not round-trip"
        );
    }
}

#[test]
fn numeric_outputs_round_trip() {
    for value in sample_space() {
        let report = report::build(value, "roundtrip");

        for label in ["Decimal (full)", "Hexadecimal", "Octal", "Partial 1"] {
            let rendered = row(&report, label);
            assert_eq!(
                parse::parse(rendered),
                Ok(value),
                "row '{label}' of {value} did not round-trip: '{rendered}'"
            );
        }
    }
}

#[test]
fn partial_outputs_round_trip_when_top_octet_is_nonzero() {
    for value in sample_space().filter(|v| v >> 24 != 0) {
        let report = report::build(value, "roundtrip");

        for label in ["Partial 2", "Partial 3", "Partial 4"] {
            let rendered = row(&report, label);
            assert_eq!(
                parse::parse(rendered),
                Ok(value),
                "row '{label}' of {value} did not round-trip: '{rendered}'"
            );
        }
    }
}

/// When the top octet is zero, the partial renderings start with "0."
/// and land in the legacy octal rule, where the dot is a bad digit.
/// The full dotted form is unaffected (the standard-syntax rule claims
/// it first).
#[test]
fn partials_of_the_low_space_hit_the_octal_rule() {
    let report = report::build(257, "257");

    assert_eq!(row(&report, "Partial 2"), "0.257");
    assert!(matches!(
        parse::parse(row(&report, "Partial 2")),
        Err(ParseError::InvalidDigit { .. })
    ));
    assert!(matches!(
        parse::parse(row(&report, "Partial 3")),
        Err(ParseError::InvalidDigit { .. })
    ));

    assert_eq!(parse::parse(row(&report, "Partial 4")), Ok(257));
}

#[test]
fn parsing_the_canonical_form_is_idempotent() {
    let inputs = [
        "192.168.1.1",
        "192.168.257",
        "192.11010305",
        "0xC0A80101",
        "3232235777",
        "010",
        "0o777",
        "0",
        "255.255.255.255",
    ];

    for input in inputs {
        let value = parse::parse(input).unwrap();
        let report = report::build(value, input);
        assert_eq!(
            parse::parse(row(&report, "Dotted Decimal")),
            Ok(value),
            "canonical form of '{input}' shifted on re-parse"
        );
    }
}

#[test]
fn report_always_has_ten_rows() {
    for value in sample_space() {
        let report = report::build(value, "shape");
        assert_eq!(report.entries().len(), 10);
    }
}

use lai_see_tally::tally::{parse_count, Denomination, LineItem, ReportBody, Tally};
use lai_see_tally::AppError;

fn tally_with(counts: &[(u32, u32)]) -> Tally {
    let mut tally = Tally::new();
    for (face_value, count) in counts {
        let denomination = Denomination::try_from(*face_value).unwrap();
        tally.set(denomination, *count);
    }
    tally
}

#[test]
fn starts_with_every_denomination_at_zero() {
    let tally = Tally::new();
    for denomination in Denomination::ALL {
        assert_eq!(tally.count(denomination), 0);
    }
    assert_eq!(tally.total(), 0);
}

#[test]
fn denominations_are_descending_and_unique() {
    let values: Vec<u32> = Denomination::ALL.iter().map(|d| d.face_value()).collect();
    assert_eq!(values, vec![1000, 500, 100, 50, 20, 10]);
}

#[test]
fn set_count_stores_valid_input_and_leaves_others_alone() {
    for target in Denomination::ALL {
        for n in [0u32, 1, 7, 250, 99_999] {
            let mut tally = tally_with(&[(1000, 4), (10, 9)]);
            let before = tally.clone();
            tally.set_count(target, &n.to_string());
            assert_eq!(tally.count(target), n);
            for other in Denomination::ALL.into_iter().filter(|d| *d != target) {
                assert_eq!(tally.count(other), before.count(other));
            }
        }
    }
}

#[test]
fn invalid_input_becomes_zero() {
    for raw in ["", "abc", "-3", "-0", " ", "x12", "--5", "+-1", "-99999999999"] {
        let mut tally = tally_with(&[(100, 8)]);
        tally.set_count(Denomination::Hundred, raw);
        assert_eq!(tally.count(Denomination::Hundred), 0, "input {raw:?}");
    }
}

#[test]
fn parses_leading_integer_like_a_browser() {
    assert_eq!(parse_count("12abc"), 12);
    assert_eq!(parse_count("  7"), 7);
    assert_eq!(parse_count("+4"), 4);
    assert_eq!(parse_count("3.9"), 3);
    assert_eq!(parse_count("1e3"), 1);
    assert_eq!(parse_count("007"), 7);
    assert_eq!(parse_count("99999999999999"), u32::MAX);
}

#[test]
fn total_is_weighted_sum() {
    let tally = tally_with(&[(1000, 2), (50, 3)]);
    assert_eq!(tally.total(), 2150);

    let tally = tally_with(&[(1000, 1), (500, 1), (100, 1), (50, 1), (20, 1), (10, 1)]);
    assert_eq!(tally.total(), 1680);
}

#[test]
fn total_does_not_overflow_at_saturated_counts() {
    let mut tally = Tally::new();
    for denomination in Denomination::ALL {
        tally.set(denomination, u32::MAX);
    }
    assert_eq!(tally.total(), 1680 * u64::from(u32::MAX));
}

#[test]
fn non_zero_entries_skip_zeros_in_descending_order() {
    let tally = tally_with(&[(10, 5), (1000, 0), (500, 1)]);
    assert_eq!(
        tally.non_zero_entries(),
        vec![
            LineItem {
                denomination: Denomination::FiveHundred,
                count: 1,
                line_total: 500,
            },
            LineItem {
                denomination: Denomination::Ten,
                count: 5,
                line_total: 50,
            },
        ]
    );
}

#[test]
fn empty_tally_reports_placeholder() {
    assert_eq!(Tally::new().report(), ReportBody::Empty);

    let mut tally = tally_with(&[(20, 3)]);
    tally.set_count(Denomination::Twenty, "");
    assert_eq!(tally.report(), ReportBody::Empty);
}

#[test]
fn populated_tally_reports_lines() {
    let tally = tally_with(&[(100, 2)]);
    match tally.report() {
        ReportBody::Lines(lines) => {
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].line_total, 200);
        }
        ReportBody::Empty => panic!("expected report lines"),
    }
}

#[test]
fn zero_counts_show_as_blank_inputs() {
    let tally = tally_with(&[(50, 12)]);
    assert_eq!(tally.input_value(Denomination::Fifty), "12");
    assert_eq!(tally.input_value(Denomination::Ten), "");
}

#[test]
fn rejects_unknown_face_values() {
    assert_eq!(Denomination::try_from(20).unwrap(), Denomination::Twenty);
    assert!(matches!(
        Denomination::try_from(5),
        Err(AppError::UnknownDenomination(5))
    ));
    assert_eq!(Denomination::Thousand.to_string(), "$1000");
}

use lai_see_tally::chart::ChartKind;
use lai_see_tally::tally::{Denomination, Tally};
use lai_see_tally::view::{ChartToggles, ViewAction, ViewMode};

#[test]
fn report_can_be_generated_with_zero_total() {
    let tally = Tally::new();
    assert_eq!(tally.total(), 0);
    assert_eq!(
        ViewMode::Calculator.apply(ViewAction::GenerateReport),
        ViewMode::Report
    );
}

#[test]
fn round_trip_leaves_tally_untouched() {
    let mut tally = Tally::new();
    tally.set_count(Denomination::Hundred, "6");
    tally.set_count(Denomination::Twenty, "2");
    let before = tally.clone();

    let view = ViewMode::default()
        .apply(ViewAction::GenerateReport)
        .apply(ViewAction::Back);

    assert_eq!(view, ViewMode::Calculator);
    assert_eq!(tally, before);
    assert_eq!(tally.total(), 640);
}

#[test]
fn chart_toggles_start_hidden() {
    let toggles = ChartToggles::default();
    for kind in ChartKind::ALL {
        assert!(!toggles.is_shown(kind));
    }
}

#[test]
fn chart_toggles_are_independent() {
    let toggles = ChartToggles::default().toggled(ChartKind::Insurance);
    assert!(toggles.is_shown(ChartKind::Insurance));
    assert!(!toggles.is_shown(ChartKind::TechFund));

    let toggles = toggles.toggled(ChartKind::TechFund);
    assert!(toggles.is_shown(ChartKind::Insurance));
    assert!(toggles.is_shown(ChartKind::TechFund));

    let toggles = toggles.toggled(ChartKind::Insurance);
    assert!(!toggles.is_shown(ChartKind::Insurance));
    assert!(toggles.is_shown(ChartKind::TechFund));
}

#![forbid(unsafe_code)]
mod common;

use common::{candidate, day, guard, site};
use vigile::report::exit_code;
use vigile::{evaluate, AvailabilityEntry, DecisionRenderer, ShiftType, TextReport, Verdict};

#[test]
fn text_report_lists_conflicts_in_rule_order() {
    let g = guard().with_availability(day(), AvailabilityEntry::unavailable(Some("sick leave")));
    let c = candidate("22:00", "06:00").with_type(ShiftType::Replacement);
    let decision = evaluate(&c, &g, &site(), &[]).unwrap();

    let text = TextReport.render(&c, &decision);
    insta::assert_snapshot!(text.trim_end(), @r"
g-1 @ hq | 2025-10-01 22:00-06:00 (8h, replacement)
verdict: reject
  [error] guard_unavailable: Guard g-1 is unavailable on 2025-10-01: sick leave
  [warning] overtime_limit: Shift would exceed weekly hour limit (44/40 hours)
");
}

#[test]
fn text_report_for_clean_candidate() {
    let c = candidate("08:00", "11:30");
    let decision = evaluate(&c, &guard(), &site(), &[]).unwrap();
    let text = TextReport.render(&c, &decision);
    assert_eq!(
        text,
        "g-1 @ hq | 2025-10-01 08:00-11:30 (3.5h, regular)\nverdict: accept\n"
    );
}

#[test]
fn verdicts_map_to_exit_codes() {
    assert_eq!(exit_code(Verdict::Accept), 0);
    assert_eq!(exit_code(Verdict::AcceptWithWarnings), 2);
    assert_eq!(exit_code(Verdict::Reject), 3);
}

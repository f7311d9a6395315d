use rbreakscheduler::models::break_kind::BreakKind;
use rbreakscheduler::models::break_record::BreakRecord;
use rbreakscheduler::pdf::{parse_line, parse_page};

fn row(r: &BreakRecord) -> String {
    r.fields().join(",")
}

#[test]
fn test_lunch_line() {
    let r = parse_line("Alice Lunch 12:00 12:30 2024-01-01").expect("lunch record");
    assert_eq!(row(&r), "Alice,12:00,12:30,,,2024-01-01");
}

#[test]
fn test_tea_line() {
    let r = parse_line("Bob Tea 15:00 15:15 2024-01-01").expect("tea record");
    assert_eq!(row(&r), "Bob,,,15:00,15:15,2024-01-01");
}

#[test]
fn test_short_line_is_skipped() {
    assert!(parse_line("Carol Lunch 12:00").is_none());
    assert!(parse_line("Carol Lunch 12:00 12:30").is_none());
}

#[test]
fn test_line_without_keyword_is_skipped() {
    assert!(parse_line("Dave Break 10:00 10:15 2024-01-01").is_none());
    assert!(parse_line("Total hours worked this week 38").is_none());
}

#[test]
fn test_keyword_is_case_insensitive() {
    let r = parse_line("eve LUNCH 12:00 12:30 2024-01-02").expect("record");
    assert_eq!(row(&r), "eve,12:00,12:30,,,2024-01-02");

    let r = parse_line("frank tea 10:00 10:15 2024-01-02").expect("record");
    assert_eq!(row(&r), "frank,,,10:00,10:15,2024-01-02");
}

#[test]
fn test_label_decides_branch_when_both_keywords_present() {
    // line mentions Lunch, but the label token is "Tea"
    let r = parse_line("Gina Tea 15:00 15:15 2024-01-01 after Lunch").expect("record");
    assert_eq!(row(&r), "Gina,,,15:00,15:15,2024-01-01");

    // keyword only in the name, label is neither: tea branch
    let r = parse_line("Steady Break 09:00 09:10 2024-01-01").expect("record");
    assert_eq!(row(&r), "Steady,,,09:00,09:10,2024-01-01");
}

#[test]
fn test_extra_tokens_and_spacing_are_ignored() {
    let r = parse_line("  Hank\tLunch   12:00  12:30 2024-01-03 extra tokens here")
        .expect("record");
    assert_eq!(row(&r), "Hank,12:00,12:30,,,2024-01-03");
}

#[test]
fn test_no_time_validation_by_default() {
    let r = parse_line("Ivan Lunch noon later tomorrow").expect("record");
    assert_eq!(row(&r), "Ivan,noon,later,,,tomorrow");
}

#[test]
fn test_page_yields_one_record_per_matching_line() {
    let text = "Weekly roster\n\
                Alice Lunch 12:00 12:30 2024-01-01\n\
                \n\
                Bob Tea 15:00 15:15 2024-01-01\r\n\
                Carol Lunch 12:00\n\
                Dave Break 10:00 10:15 2024-01-01\n\
                Eve Tea 10:00 10:15 2024-01-02\n";

    let page = parse_page(text, false);

    assert!(page.rejected.is_empty());
    let rows: Vec<String> = page.records.iter().map(row).collect();
    assert_eq!(
        rows,
        vec![
            "Alice,12:00,12:30,,,2024-01-01",
            "Bob,,,15:00,15:15,2024-01-01",
            "Eve,,,10:00,10:15,2024-01-02",
        ]
    );
}

#[test]
fn test_strict_mode_rejects_bad_fields() {
    let text = "Alice Lunch 12:00 12:30 2024-01-01\n\
                Ivan Lunch noon 12:30 2024-01-01\n\
                Jane Tea 15:00 15:15 01/02/2024\n";

    let page = parse_page(text, true);

    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].name, "Alice");
    assert_eq!(page.rejected.len(), 2);
    assert!(page.rejected[0].contains("invalid time 'noon'"));
    assert!(page.rejected[1].contains("invalid date '01/02/2024'"));

    // the same text without strict mode keeps everything
    assert_eq!(parse_page(text, false).records.len(), 3);
}

#[test]
fn test_break_kind_from_label() {
    assert_eq!(BreakKind::from_label("Lunch"), BreakKind::Lunch);
    assert_eq!(BreakKind::from_label("lunch-break"), BreakKind::Lunch);
    assert_eq!(BreakKind::from_label("Tea"), BreakKind::Tea);
    assert_eq!(BreakKind::from_label("Other"), BreakKind::Tea);
}

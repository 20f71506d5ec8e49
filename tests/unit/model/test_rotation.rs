use bitthought_jobs::error::AppError;
use bitthought_jobs::model::rotation::{RotationStep, parse_lines};

#[test]
fn last_line_wraps_to_first() {
    for total in 1..=10usize {
        let n = total as i64;
        let step = RotationStep::advance(n, total).unwrap();
        assert_eq!(step.served_line_number(), n);
        assert_eq!(step.line_index, total - 1);
        assert_eq!(step.next_line_number, 1);
    }
}

#[test]
fn first_run_serves_first_line() {
    let step = RotationStep::advance(1, 4).unwrap();
    assert_eq!(step.line_index, 0);
    assert_eq!(step.next_line_number, 2);
}

#[test]
fn pointer_past_shrunk_file_is_renormalised() {
    // 7 stored, file now has 5 lines: serve line 2, persist 3
    let step = RotationStep::advance(7, 5).unwrap();
    assert_eq!(step.served_line_number(), 2);
    assert_eq!(step.next_line_number, 3);
}

#[test]
fn non_positive_pointer_is_renormalised() {
    let step = RotationStep::advance(0, 3).unwrap();
    assert_eq!(step.served_line_number(), 3);
    assert_eq!(step.next_line_number, 1);

    let step = RotationStep::advance(-1, 3).unwrap();
    assert_eq!(step.served_line_number(), 2);
    assert_eq!(step.next_line_number, 3);
}

#[test]
fn empty_resource_is_an_error() {
    assert!(matches!(
        RotationStep::advance(1, 0),
        Err(AppError::EmptyResource(_))
    ));
}

#[test]
fn parse_lines_trims_and_drops_blanks() {
    let text = "  first  \r\n\n   \nsecond\n\tthird\t\n";
    assert_eq!(parse_lines(text), vec!["first", "second", "third"]);
    assert!(parse_lines("\n \n\t\n").is_empty());
    assert!(parse_lines("").is_empty());
}

//! Tests for the textual request format.

use plural::Quantity;
use plural::parser::{ParseError, parse_request, parse_request_list, parse_requests};

#[test]
fn quantity_only() {
    let r = parse_request("2").unwrap();
    assert_eq!(r.quantity(), &Quantity::Integer(2));
    assert!(r.candidates().is_empty());
}

#[test]
fn bare_and_quoted_candidates() {
    let r = parse_request("3 This|These \"a |\"").unwrap();
    assert_eq!(r.candidates(), ["This|These", "a |"]);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let r = parse_request("  \t1   man|men  ").unwrap();
    assert_eq!(r.quantity(), &Quantity::Integer(1));
    assert_eq!(r.candidates(), ["man|men"]);
}

#[test]
fn quoted_escapes() {
    let r = parse_request(r#"2 "say \"hi\"|say \"his\"" "a\\b" "tab\there""#).unwrap();
    assert_eq!(
        r.candidates(),
        ["say \"hi\"|say \"his\"", "a\\b", "tab\there"]
    );
}

#[test]
fn empty_quoted_candidate() {
    let r = parse_request("1 \"\"").unwrap();
    assert_eq!(r.candidates(), [""]);
}

#[test]
fn quantity_kinds() {
    assert_eq!(
        parse_request("-4").unwrap().quantity(),
        &Quantity::Integer(-4)
    );
    assert_eq!(
        parse_request("0.0").unwrap().quantity(),
        &Quantity::Float(0.0)
    );
    assert_eq!(
        parse_request("false").unwrap().quantity(),
        &Quantity::Bool(false)
    );
    assert_eq!(
        parse_request("none").unwrap().quantity(),
        &Quantity::Text("none".into())
    );
}

#[test]
fn empty_request_is_missing_quantity() {
    assert_eq!(
        parse_request("").unwrap_err(),
        ParseError::MissingQuantity { line: 1 }
    );
    assert_eq!(
        parse_request("   ").unwrap_err(),
        ParseError::MissingQuantity { line: 1 }
    );
}

#[test]
fn quoted_first_field_is_missing_quantity() {
    assert_eq!(
        parse_request("\"leaf|leaves\"").unwrap_err(),
        ParseError::MissingQuantity { line: 1 }
    );
}

#[test]
fn unterminated_quote() {
    let err = parse_request("2 \"leaf|leaves").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
}

#[test]
fn unknown_escape() {
    let err = parse_request(r#"2 "a\qb""#).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
}

#[test]
fn quote_must_be_followed_by_whitespace() {
    let err = parse_request("2 \"a\"b").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax {
            line: 1,
            column: 6,
            message: "unexpected character: 'b'".into(),
        }
    );
}

#[test]
fn multiple_lines() {
    let input = "2\n0 leaf|leaves\n\n// comment\n  // indented comment\n1 null|single|multi\n";
    let requests = parse_requests(input).unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].quantity(), &Quantity::Integer(2));
    assert_eq!(requests[1].candidates(), ["leaf|leaves"]);
    assert_eq!(requests[2].quantity(), &Quantity::Integer(1));
}

#[test]
fn empty_input_has_no_requests() {
    assert!(parse_requests("").unwrap().is_empty());
    assert!(parse_requests("\n\n// nothing\n").unwrap().is_empty());
}

#[test]
fn errors_report_their_line() {
    let err = parse_requests("2\n1 ok\n\"orphan\"\n").unwrap_err();
    assert_eq!(err, ParseError::MissingQuantity { line: 3 });
    assert_eq!(err.line(), 3);

    let err = parse_requests("2\n\n3 \"open").unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn single_request_rejects_line_breaks() {
    assert_eq!(
        parse_request("2\n3").unwrap_err(),
        ParseError::Syntax {
            line: 1,
            column: 2,
            message: "unexpected character: '\\n'".into(),
        }
    );
    assert!(parse_request("2 leaf|leaves\n").is_err());
}

#[test]
fn tabs_separate_fields() {
    let r = parse_request("1\tman|men").unwrap();
    assert_eq!(r.candidates(), ["man|men"]);
}

#[test]
fn request_list_keeps_every_position() {
    let requests = parse_request_list(["//x", "1", "2 leaf|leaves"]).unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].quantity(), &Quantity::Text("//x".into()));
    assert_eq!(requests[2].candidates(), ["leaf|leaves"]);
}

#[test]
fn request_list_empty_item_is_missing_quantity() {
    assert_eq!(
        parse_request_list(["2", "", "1"]).unwrap_err(),
        ParseError::MissingQuantity { line: 2 }
    );
    assert_eq!(
        parse_request_list(["2", "1", "  "]).unwrap_err(),
        ParseError::MissingQuantity { line: 3 }
    );
}

#[test]
fn request_list_item_with_line_break_is_rejected() {
    let err = parse_request_list(["2", "0\n1"]).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 2, .. }));
}

#[test]
fn empty_request_list() {
    assert!(parse_request_list(Vec::<String>::new()).unwrap().is_empty());
}

//! Request line parser using winnow.
//!
//! A request line is a whitespace-separated list of fields:
//! - the first field is a bare quantity token (`2`, `0`, `1.5`, `none`)
//! - every following field is a candidate string, either bare (`leaf|leaves`)
//!   or double-quoted (`"a |"`) with escapes `\"` `\\` `\n` `\t`

use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, separated};
use winnow::error::{ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::error::ParseError;
use crate::types::{Quantity, VariantRequest};

/// Prefix of lines skipped by [`parse_requests`].
const COMMENT_PREFIX: &str = "//";

/// A field as written on a request line.
#[derive(Debug, Clone)]
enum Field {
    Bare(String),
    Quoted(String),
}

/// Parse a single request line.
///
/// An empty line has no quantity and is rejected, as is input spanning more
/// than one line.
///
/// # Example
///
/// ```
/// use plural::Quantity;
/// use plural::parser::parse_request;
///
/// let request = parse_request("0 \"leaf|leaves\" man|men").unwrap();
/// assert_eq!(request.quantity(), &Quantity::Integer(0));
/// assert_eq!(request.candidates(), ["leaf|leaves", "man|men"]);
/// ```
pub fn parse_request(input: &str) -> Result<VariantRequest, ParseError> {
    parse_numbered(input, 1)
}

/// Parse a list of requests given one per item, such as command-line
/// arguments.
///
/// Unlike [`parse_requests`] nothing is skipped: every item becomes exactly
/// one request at its own index, and an empty item is a missing quantity.
/// Errors report the 1-based item position as their line.
///
/// # Example
///
/// ```
/// use plural::parser::{ParseError, parse_request_list};
///
/// assert_eq!(parse_request_list(["2", "0 leaf|leaves", "1"]).unwrap().len(), 3);
/// assert_eq!(
///     parse_request_list(["2", "", "1"]).unwrap_err(),
///     ParseError::MissingQuantity { line: 2 }
/// );
/// ```
pub fn parse_request_list<I>(items: I) -> Result<Vec<VariantRequest>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(offset, item)| parse_numbered(item.as_ref(), offset + 1))
        .collect()
}

/// Parse exactly one request, reporting errors at `line_number`.
fn parse_numbered(input: &str, line_number: usize) -> Result<VariantRequest, ParseError> {
    parse_line(input, line_number)?.ok_or(ParseError::MissingQuantity { line: line_number })
}

/// Parse one request per line.
///
/// Blank lines and lines starting with `//` are skipped. Requests keep the
/// order of their lines, so the first request line becomes index `0`.
pub fn parse_requests(input: &str) -> Result<Vec<VariantRequest>, ParseError> {
    let mut requests = Vec::new();
    for (offset, line) in input.lines().enumerate() {
        if line.trim_start().starts_with(COMMENT_PREFIX) {
            continue;
        }
        if let Some(request) = parse_line(line, offset + 1)? {
            requests.push(request);
        }
    }
    Ok(requests)
}

/// Parse a line into a request, or `None` if the line has no fields.
fn parse_line(line: &str, line_number: usize) -> Result<Option<VariantRequest>, ParseError> {
    let mut remaining = line;
    let fields = match fields(&mut remaining) {
        Ok(fields) => fields,
        Err(e) => {
            let message = match e {
                ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.to_string(),
                ErrMode::Incomplete(_) => "unexpected end of input".to_string(),
            };
            return Err(ParseError::Syntax {
                line: line_number,
                column: column(line, remaining),
                message,
            });
        }
    };

    if !remaining.is_empty() {
        return Err(ParseError::Syntax {
            line: line_number,
            column: column(line, remaining),
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?').escape_debug()
            ),
        });
    }

    let mut fields = fields.into_iter();
    let quantity = match fields.next() {
        None => return Ok(None),
        Some(Field::Quoted(_)) => {
            return Err(ParseError::MissingQuantity { line: line_number });
        }
        Some(Field::Bare(token)) => Quantity::from_token(&token),
    };

    let candidates = fields.map(|field| match field {
        Field::Bare(text) | Field::Quoted(text) => text,
    });
    Ok(Some(VariantRequest::new(quantity).with_candidates(candidates)))
}

/// Calculate the 1-based byte column of `remaining` within `line`.
fn column(line: &str, remaining: &str) -> usize {
    line.len() - remaining.len() + 1
}

/// Parse all fields of a line, with surrounding whitespace.
fn fields(input: &mut &str) -> ModalResult<Vec<Field>> {
    delimited(ws, separated(0.., field, ws1), ws).parse_next(input)
}

/// Parse a quoted or bare field.
fn field(input: &mut &str) -> ModalResult<Field> {
    alt((quoted, bare)).parse_next(input)
}

/// Parse a bare field: a run of non-whitespace characters.
fn bare(input: &mut &str) -> ModalResult<Field> {
    take_while(1.., |c: char| !c.is_whitespace())
        .map(|s: &str| Field::Bare(s.to_string()))
        .parse_next(input)
}

/// Parse a double-quoted field. Once the opening quote is seen, a missing
/// closing quote is an error rather than a fallback to a bare field.
fn quoted(input: &mut &str) -> ModalResult<Field> {
    preceded(
        '"',
        cut_err((quoted_content, '"'))
            .context(StrContext::Expected(StrContextValue::Description(
                "closing quote",
            ))),
    )
    .map(|(text, _)| Field::Quoted(text))
    .parse_next(input)
}

/// Parse the characters between quotes, resolving escapes.
fn quoted_content(input: &mut &str) -> ModalResult<String> {
    repeat(0.., alt((escaped_char, none_of(['"', '\\'])))).parse_next(input)
}

/// Parse an escape sequence: \" \\ \n \t
fn escaped_char(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        cut_err(alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
        )))
        .context(StrContext::Expected(StrContextValue::Description(
            "escape sequence",
        ))),
    )
    .parse_next(input)
}

/// Parse optional spaces and tabs. Line breaks never separate fields.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

/// Parse required spaces or tabs between fields.
fn ws1(input: &mut &str) -> ModalResult<()> {
    take_while(1.., [' ', '\t']).void().parse_next(input)
}

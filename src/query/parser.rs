//! nom parsers for the three clause shapes the encoder emits.
//!
//! ```text
//! funder  := "(funder.name.keyword:" list " OR funding.funder.name.keyword:" list ")"
//! source  := "(" "_index:indexed_" stem "*" (" OR " "_index:indexed_" stem "*")* ")"
//! terms   := field [".keyword"] ":" list
//! list    := "(" quoted ("," quoted)* ")"
//! quoted  := '"' [^"]* '"'
//! ```
//!
//! Values are not escaped on the way out, so a quote inside a value cannot be
//! read back.

use super::clause::{INDEX_PREFIX, KEYWORD_SUFFIX};
use crate::facets::cleaner::SOURCE_FIELD;
use crate::facets::funders::{FUNDER_FIELD, FUNDING_FUNDER_FIELD};
use nom::bytes::complete::{tag, take_till, take_till1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, map};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

fn quoted(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        String::from,
    )(input)
}

fn value_list(input: &str) -> IResult<&str, Vec<String>> {
    delimited(
        char('('),
        separated_list1(delimited(multispace0, char(','), multispace0), quoted),
        char(')'),
    )(input)
}

fn field_list<'a>(field: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<String>> {
    preceded(pair(tag(field), char(':')), value_list)
}

/// Both value lists of a funder clause, funder first.
pub(crate) fn funder_clause(input: &str) -> IResult<&str, (Vec<String>, Vec<String>)> {
    all_consuming(map(
        tuple((
            char('('),
            field_list(FUNDER_FIELD),
            tag(" OR "),
            field_list(FUNDING_FUNDER_FIELD),
            char(')'),
        )),
        |(_, funder, _, funding, _)| (funder, funding),
    ))(input)
}

fn source_stem(input: &str) -> IResult<&str, &str> {
    delimited(
        pair(tag(SOURCE_FIELD), pair(char(':'), tag(INDEX_PREFIX))),
        take_till1(|c: char| c == '*'),
        char('*'),
    )(input)
}

/// Index-name stems of a source clause, in order.
pub(crate) fn source_clause(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(
        char('('),
        separated_list1(tag(" OR "), source_stem),
        char(')'),
    ))(input)
}

/// Field id (with any `.keyword` removed) and its values.
pub(crate) fn terms_clause(input: &str) -> IResult<&str, (String, Vec<String>)> {
    all_consuming(map(
        pair(
            terminated(take_till1(|c: char| c == ':' || c == '('), char(':')),
            value_list,
        ),
        |(field, values): (&str, Vec<String>)| (field.replacen(KEYWORD_SUFFIX, "", 1), values),
    ))(input)
}

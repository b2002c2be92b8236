//! Helpers shared by the per-command parsers

use crate::logic::error::{ParseError, ParseResult};
use crate::logic::index::Index;
use crate::logic::tokenizer::{ArgumentMultimap, Prefix};
use crate::model::fields::{FieldError, Tag};
use std::collections::BTreeSet;

/// Fail with the usage message unless every prefix is present and nothing precedes them
pub fn require_prefixes(
    arguments: &ArgumentMultimap,
    prefixes: &[Prefix],
    usage: &str,
) -> ParseResult<()> {
    if !arguments.are_all_present(prefixes) || !arguments.preamble().is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    Ok(())
}

/// Build a field from the last value given for `prefix`
///
/// Callers check presence first; an absent prefix is treated as an empty value.
pub fn parse_field<T>(
    arguments: &ArgumentMultimap,
    prefix: &Prefix,
    build: impl FnOnce(String) -> Result<T, FieldError>,
) -> ParseResult<T> {
    Ok(build(arguments.value(prefix).unwrap_or_default().to_string())?)
}

/// Build a field only when `prefix` was given
pub fn parse_optional_field<T>(
    arguments: &ArgumentMultimap,
    prefix: &Prefix,
    build: impl FnOnce(String) -> Result<T, FieldError>,
) -> ParseResult<Option<T>> {
    arguments
        .value(prefix)
        .map(|value| build(value.to_string()))
        .transpose()
        .map_err(ParseError::from)
}

pub fn parse_index(text: &str) -> ParseResult<Index> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_tags<S: AsRef<str>>(values: &[S]) -> ParseResult<BTreeSet<Tag>> {
    values
        .iter()
        .map(|value| Tag::new(value.as_ref()).map_err(ParseError::from))
        .collect()
}

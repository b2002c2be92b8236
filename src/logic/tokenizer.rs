//! Argument tokenizer
//!
//! Splits the text after a command keyword into a preamble and the values that
//! follow each recognised prefix, e.g. `1 n/Amy Bee t/vip t/ward3` with prefixes
//! `n/` and `t/` gives preamble `1`, `n/` => `["Amy Bee"]`, `t/` => `["vip", "ward3"]`.
//! A prefix only counts when it is preceded by whitespace. Absent prefixes simply
//! have no values; deciding whether that is an error is left to the parsers.

use std::collections::HashMap;
use std::fmt;

/// A short marker such as `n/` that introduces a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Preamble plus prefix => values mapping produced by [`tokenize`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value supplied for `prefix`
    pub fn value(&self, prefix: &Prefix) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value supplied for `prefix`, in input order
    pub fn all_values(&self, prefix: &Prefix) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: &Prefix) -> bool {
        self.values.contains_key(prefix)
    }

    pub fn are_all_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(p))
    }
}

/// Tokenize `args` against the given prefixes
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            find_prefix_positions(args, prefix)
                .into_iter()
                .map(move |pos| (pos, *prefix))
        })
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        let value = args[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

fn find_prefix_positions(args: &str, prefix: &Prefix) -> Vec<usize> {
    args.match_indices(prefix.as_str())
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            args[..pos]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        })
        .collect()
}

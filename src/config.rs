use std::num::ParseIntError;
use std::ops::Range;

use thiserror::Error;

use crate::algo::sorting::{Order, SelectionSorter};
use crate::error::ParseOrderError;

/// The array the demo sorts when no numbers are given.
pub const PLAYGROUND: [i64; 7] = [6, 5, 4, 3, 2, 0, 1];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownOrder(#[from] ParseOrderError),

    #[error("invalid range `{0}`, expected start..end")]
    InvalidRange(String),

    #[error("invalid number `{arg}`: {source}")]
    InvalidNumber {
        arg: String,
        source: ParseIntError,
    },
}

/// Demo settings read from the command line:
/// `[asc|desc] [start..end] [n1 n2 ...]` in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub order: Order,
    pub range: Option<Range<usize>>,
    pub values: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            order: Order::default(),
            range: None,
            values: PLAYGROUND.to_vec(),
        }
    }
}

impl Config {
    /// `args` excludes the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut order = Order::default();
        let mut range = None;
        let mut values = Vec::new();
        for arg in args {
            if arg.contains("..") {
                range = Some(parse_range(&arg)?);
            } else if arg.starts_with(|c: char| c.is_ascii_alphabetic()) {
                order = arg.parse()?;
            } else {
                let n: i64 = arg
                    .parse()
                    .map_err(|source| ConfigError::InvalidNumber { arg, source })?;
                values.push(n);
            }
        }
        if values.is_empty() {
            values = PLAYGROUND.to_vec();
        }
        Ok(Config {
            order,
            range,
            values,
        })
    }

    pub fn sorter(&self) -> SelectionSorter {
        let sorter = SelectionSorter::new(self.order);
        match &self.range {
            Some(range) => sorter.with_range(range.clone()),
            None => sorter,
        }
    }
}

fn parse_range(arg: &str) -> Result<Range<usize>, ConfigError> {
    let invalid = || ConfigError::InvalidRange(arg.to_owned());
    let mut bounds = arg.splitn(2, "..");
    let start = bounds.next().ok_or_else(invalid)?;
    let end = bounds.next().ok_or_else(invalid)?;
    let start = start.trim().parse().map_err(|_| invalid())?;
    let end = end.trim().parse().map_err(|_| invalid())?;
    Ok(start..end)
}

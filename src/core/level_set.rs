//! Sets of enabled log levels
//!
//! Handlers are switched on per level rather than by a minimum threshold:
//! a handler enabled for `{Trace, Error}` ignores everything in between.

use super::log_level::LogLevel;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A set of [`LogLevel`]s, stored as a bitset.
///
/// # Example
///
/// ```
/// use monolog::{LevelSet, LogLevel};
///
/// let levels = LevelSet::of(&[LogLevel::Error, LogLevel::Fatal]);
/// assert!(levels.contains(LogLevel::Error));
/// assert!(!levels.contains(LogLevel::Warn));
///
/// let parsed: LevelSet = "error, fatal".parse().unwrap();
/// assert_eq!(parsed, levels);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelSet(u8);

impl LevelSet {
    const MASK: u8 = 0b0011_1111;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    pub fn of(levels: &[LogLevel]) -> Self {
        levels.iter().copied().collect()
    }

    /// Every level at or above `level`.
    ///
    /// This only builds the set; filtering is still done by membership.
    pub fn at_least(level: LogLevel) -> Self {
        LogLevel::ALL.iter().copied().filter(|l| *l >= level).collect()
    }

    #[inline]
    pub const fn contains(&self, level: LogLevel) -> bool {
        self.0 & level.bit() != 0
    }

    #[must_use]
    pub const fn with(self, level: LogLevel) -> Self {
        Self(self.0 | level.bit())
    }

    pub fn insert(&mut self, level: LogLevel) {
        self.0 |= level.bit();
    }

    pub fn remove(&mut self, level: LogLevel) {
        self.0 &= !level.bit();
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Levels in the set, in increasing severity.
    pub fn iter(&self) -> impl Iterator<Item = LogLevel> + '_ {
        LogLevel::ALL.into_iter().filter(move |l| self.contains(*l))
    }
}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        let mut set = LevelSet::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl From<LogLevel> for LevelSet {
    fn from(level: LogLevel) -> Self {
        LevelSet::empty().with(level)
    }
}

impl From<&[LogLevel]> for LevelSet {
    fn from(levels: &[LogLevel]) -> Self {
        LevelSet::of(levels)
    }
}

impl<const N: usize> From<[LogLevel; N]> for LevelSet {
    fn from(levels: [LogLevel; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|l| l.to_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

impl FromStr for LevelSet {
    type Err = String;

    /// Accepts a comma separated list of level names, `*`/`all`, or `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "*" || trimmed.eq_ignore_ascii_case("all") {
            return Ok(LevelSet::all());
        }
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(LevelSet::empty());
        }

        trimmed
            .split(',')
            .map(|part| part.parse::<LogLevel>())
            .collect()
    }
}

impl Serialize for LevelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for level in self.iter() {
            seq.serialize_element(&level)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for LevelSet {
    /// Accepts either a list of level names or a single string in the
    /// [`FromStr`] syntax. Names are case-insensitive.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<String>),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::List(names) => names
                .iter()
                .map(|name| name.parse::<LogLevel>())
                .collect::<Result<LevelSet, _>>()
                .map_err(de::Error::custom),
            Repr::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

//! Sexagenary (干支, 60-unit) labels.
//!
//! A label pairs one stem with one branch. Stems and branches advance
//! together, so only pairs of equal parity occur: 甲子, 乙丑, … 癸亥.
//! 甲丑 is not a valid label.

use std::str::FromStr;

use serde::Serialize;

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::error::LiurenError;
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// A stem+branch pair in the 60-unit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sexagenary {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Sexagenary {
    /// Pair a stem with a branch, rejecting mismatched parity.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, LiurenError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(LiurenError::MalformedCalendarLabel(format!(
                "{stem}{branch}"
            )));
        }
        Ok(Self { stem, branch })
    }

    /// Label at `index` modulo 60 (0 = 甲子).
    pub const fn from_index(index: u32) -> Self {
        let i = (index % 60) as usize;
        Self {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        }
    }

    /// 0-based position in the cycle (甲子=0 .. 癸亥=59).
    pub const fn index(self) -> u8 {
        // i ≡ stem (mod 10) and i ≡ branch (mod 12)
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Parse a two-character label such as `甲子`.
    pub fn parse(label: &str) -> Result<Self, LiurenError> {
        let malformed = || LiurenError::MalformedCalendarLabel(label.to_owned());
        let mut chars = label.chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };
        let stem = HeavenlyStem::from_char(s).ok_or_else(malformed)?;
        let branch = EarthlyBranch::from_char(b).ok_or_else(malformed)?;
        Self::new(stem, branch)
    }
}

impl FromStr for Sexagenary {
    type Err = LiurenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Sexagenary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_full_cycle() {
        for i in 0..60u32 {
            let s = Sexagenary::from_index(i);
            assert_eq!(s.index() as u32, i);
            assert_eq!(Sexagenary::new(s.stem, s.branch), Ok(s));
        }
    }

    #[test]
    fn known_labels() {
        assert_eq!(Sexagenary::parse("甲子").unwrap().index(), 0);
        assert_eq!(Sexagenary::parse("甲戌").unwrap().index(), 10);
        assert_eq!(Sexagenary::parse("戊午").unwrap().index(), 54);
        assert_eq!(Sexagenary::parse("癸亥").unwrap().index(), 59);
    }

    #[test]
    fn display_matches_label() {
        let s: Sexagenary = "乙亥".parse().unwrap();
        assert_eq!(s.to_string(), "乙亥");
        assert_eq!(s.stem, HeavenlyStem::Yi);
        assert_eq!(s.branch, EarthlyBranch::Hai);
    }

    #[test]
    fn malformed_labels() {
        for bad in ["", "甲", "甲子丑", "子甲", "甲丑", "AB", "甲 "] {
            assert!(
                matches!(
                    Sexagenary::parse(bad),
                    Err(LiurenError::MalformedCalendarLabel(_))
                ),
                "{bad:?} should be malformed"
            );
        }
    }
}

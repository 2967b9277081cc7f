//! Earthly branches (地支) and the hour-to-branch time-slot mapping.
//!
//! The day is divided into 12 two-hour slots (時辰). 子 straddles midnight
//! (23:00–01:00); every following slot starts on an odd hour, so 丑 covers
//! 01:00–03:00 and 亥 covers 21:00–23:00.

use serde::Serialize;

use crate::element::FiveElement;
use crate::error::{LiurenError, SymbolKind};

/// The 12 earthly branches starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EarthlyBranch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];

impl EarthlyBranch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub const fn as_char(self) -> char {
        BRANCH_CHARS[self.index() as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Zodiac animal paired with this branch.
    pub const fn zodiac(self) -> &'static str {
        ZODIAC_NAMES[self.index() as usize]
    }

    /// Element of the branch: 寅卯 wood, 巳午 fire, 申酉 metal, 亥子 water,
    /// 辰戌丑未 earth.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::Wu => FiveElement::Fire,
            Self::Shen | Self::You => FiveElement::Metal,
            Self::Hai | Self::Zi => FiveElement::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => FiveElement::Earth,
        }
    }

    /// Branch at a 0-based index. Indices outside 0..=11 are rejected.
    pub fn from_index(index: u8) -> Result<Self, LiurenError> {
        ALL_BRANCHES
            .get(index as usize)
            .copied()
            .ok_or_else(|| LiurenError::invalid("hour_slot", index))
    }

    /// Branch at `index` modulo 12.
    pub const fn wrapping(index: u32) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Parse a single-character branch label.
    pub fn from_label(label: &str) -> Result<Self, LiurenError> {
        let mut chars = label.chars();
        let branch = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        branch.ok_or_else(|| LiurenError::unknown(SymbolKind::Branch, label))
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Element of a branch given by its label.
pub fn branch_element(label: &str) -> Result<FiveElement, LiurenError> {
    EarthlyBranch::from_label(label).map(EarthlyBranch::element)
}

/// Map an hour of day (0–23) to its time-slot branch index (0–11).
///
/// Hours 23 and 0 both fall in 子 (index 0).
pub fn hour_to_branch_index(hour: u32) -> Result<u8, LiurenError> {
    match hour {
        0 | 23 => Ok(0),
        1..=22 => Ok(((hour + 1) / 2) as u8),
        _ => Err(LiurenError::invalid("hour", hour)),
    }
}

/// Map an hour of day (0–23) to its time-slot branch.
pub fn shichen_from_hour(hour: u32) -> Result<EarthlyBranch, LiurenError> {
    hour_to_branch_index(hour).map(|i| ALL_BRANCHES[i as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(EarthlyBranch::from_char(b.as_char()), Some(*b));
        }
    }

    #[test]
    fn midnight_slot() {
        assert_eq!(hour_to_branch_index(23).unwrap(), 0);
        assert_eq!(hour_to_branch_index(0).unwrap(), 0);
    }

    #[test]
    fn two_hour_buckets() {
        assert_eq!(shichen_from_hour(1).unwrap(), EarthlyBranch::Chou);
        assert_eq!(shichen_from_hour(2).unwrap(), EarthlyBranch::Chou);
        assert_eq!(shichen_from_hour(3).unwrap(), EarthlyBranch::Yin);
        assert_eq!(shichen_from_hour(13).unwrap(), EarthlyBranch::Wei);
        assert_eq!(shichen_from_hour(14).unwrap(), EarthlyBranch::Wei);
        assert_eq!(shichen_from_hour(21).unwrap(), EarthlyBranch::Hai);
        assert_eq!(shichen_from_hour(22).unwrap(), EarthlyBranch::Hai);
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(
            hour_to_branch_index(24),
            Err(LiurenError::InvalidInput {
                field: "hour",
                value: 24
            })
        );
    }

    #[test]
    fn element_groups() {
        let counts = ALL_BRANCHES.iter().fold([0u8; 5], |mut acc, b| {
            acc[b.element().index() as usize] += 1;
            acc
        });
        // wood, fire, earth, metal, water
        assert_eq!(counts, [2, 2, 4, 2, 2]);
        assert_eq!(branch_element("亥").unwrap(), FiveElement::Water);
        assert_eq!(branch_element("未").unwrap(), FiveElement::Earth);
    }

    #[test]
    fn unknown_label_fails_loudly() {
        assert!(branch_element("甲").is_err());
        assert!(branch_element("子丑").is_err());
        assert!(branch_element("").is_err());
    }

    #[test]
    fn slot_index_bounds() {
        assert_eq!(EarthlyBranch::from_index(11).unwrap(), EarthlyBranch::Hai);
        assert!(EarthlyBranch::from_index(12).is_err());
        assert_eq!(EarthlyBranch::wrapping(14), EarthlyBranch::Yin);
    }

    #[test]
    fn zodiac_pairs() {
        assert_eq!(EarthlyBranch::Zi.zodiac(), "鼠");
        assert_eq!(EarthlyBranch::Chen.zodiac(), "龍");
        assert_eq!(EarthlyBranch::Hai.zodiac(), "豬");
    }
}

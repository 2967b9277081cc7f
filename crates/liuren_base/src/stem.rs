//! Heavenly stems (天干).

use serde::Serialize;

use crate::element::FiveElement;
use crate::error::{LiurenError, SymbolKind};

/// The 10 heavenly stems starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HeavenlyStem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub const fn as_char(self) -> char {
        STEM_CHARS[self.index() as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element of the stem. Stems pair up in generation order:
    /// 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    /// Stem at `index` modulo 10.
    pub const fn wrapping(index: u32) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        STEM_CHARS
            .iter()
            .position(|&s| s == c)
            .map(|i| ALL_STEMS[i])
    }

    /// Parse a single-character stem label.
    pub fn from_label(label: &str) -> Result<Self, LiurenError> {
        let mut chars = label.chars();
        let stem = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        stem.ok_or_else(|| LiurenError::unknown(SymbolKind::Stem, label))
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Element of a stem given by its label.
pub fn stem_element(label: &str) -> Result<FiveElement, LiurenError> {
    HeavenlyStem::from_label(label).map(HeavenlyStem::element)
}

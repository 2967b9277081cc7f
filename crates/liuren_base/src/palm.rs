//! The six palm positions of the Six-Ren ring.
//!
//! Positions are counted on the left hand in a fixed cycle:
//! 大安 → 留連 → 速喜 → 赤口 → 小吉 → 空亡 → 大安.

use serde::Serialize;

/// Number of positions on the ring.
pub const RING_SIZE: u8 = 6;

/// The 6 palm positions in counting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalmPosition {
    #[serde(rename = "大安")]
    DaAn,
    #[serde(rename = "留連")]
    LiuLian,
    #[serde(rename = "速喜")]
    SuXi,
    #[serde(rename = "赤口")]
    ChiKou,
    #[serde(rename = "小吉")]
    XiaoJi,
    #[serde(rename = "空亡")]
    KongWang,
}

/// All 6 positions in ring order (index 0 = 大安).
pub const ALL_POSITIONS: [PalmPosition; 6] = [
    PalmPosition::DaAn,
    PalmPosition::LiuLian,
    PalmPosition::SuXi,
    PalmPosition::ChiKou,
    PalmPosition::XiaoJi,
    PalmPosition::KongWang,
];

impl PalmPosition {
    /// Chinese name of the position.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DaAn => "大安",
            Self::LiuLian => "留連",
            Self::SuXi => "速喜",
            Self::ChiKou => "赤口",
            Self::XiaoJi => "小吉",
            Self::KongWang => "空亡",
        }
    }

    /// Romanized name of the position.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::DaAn => "Da An",
            Self::LiuLian => "Liu Lian",
            Self::SuXi => "Su Xi",
            Self::ChiKou => "Chi Kou",
            Self::XiaoJi => "Xiao Ji",
            Self::KongWang => "Kong Wang",
        }
    }

    /// 0-based ring index (大安=0 .. 空亡=5).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Position at a ring index, wrapping modulo 6.
    pub const fn from_ring_index(index: u8) -> Self {
        ALL_POSITIONS[(index % RING_SIZE) as usize]
    }

    /// Short verdict for the position.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::DaAn => "諸事順利",
            Self::LiuLian => "運氣平平",
            Self::SuXi => "時機已到",
            Self::ChiKou => "謹防小人",
            Self::XiaoJi => "好事發生，耐心等待",
            Self::KongWang => "諸事不順，事事小心",
        }
    }

    /// Base guidance sentence used to open the suggestion text.
    pub const fn tip(self) -> &'static str {
        match self {
            Self::DaAn => "事事昌隆，求謀在東方，求財利官。宜靜守、長遠佈局。",
            Self::LiuLian => "難成之事，暫且擱置，需等申時或改日。宜耐心等待，不宜強求。",
            Self::SuXi => "喜訊已在途中，求財向南。宜迅速行動，事不宜遲。",
            Self::ChiKou => "口舌是非，謹防官非。宜避開尖銳爭執，行事低調。",
            Self::XiaoJi => "貴人相助，合夥利成。宜主動交流，必有好事發生。",
            Self::KongWang => "諸事空亡，財物失脫。宜反省修身，靜待時變。",
        }
    }

    /// Whether the position is traditionally read as favorable.
    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::DaAn | Self::SuXi | Self::XiaoJi)
    }
}

impl std::fmt::Display for PalmPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

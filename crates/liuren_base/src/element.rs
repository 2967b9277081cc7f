//! Five elements (Wu Xing), their attribute table and pairwise interactions.
//!
//! The generation cycle is Wood → Fire → Earth → Metal → Water → Wood.
//! An element controls the element two steps ahead of it in that cycle.

use serde::Serialize;

use crate::error::{LiurenError, SymbolKind};

/// The five elements in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FiveElement {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

/// All 5 elements in generation order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// Chinese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based position in the generation cycle.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates.
    pub const fn generates(self) -> FiveElement {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one controls.
    pub const fn controls(self) -> FiveElement {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }

    /// Fixed direction/color attribute of this element.
    pub const fn attribute(self) -> ElementAttribute {
        ELEMENT_ATTRIBUTES[self.index() as usize]
    }

    /// Look up an element by its single-character Chinese name.
    pub fn from_label(label: &str) -> Result<Self, LiurenError> {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name() == label)
            .ok_or_else(|| LiurenError::unknown(SymbolKind::Element, label))
    }
}

impl std::fmt::Display for FiveElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction and color associated with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAttribute {
    pub element: FiveElement,
    /// Compass label, e.g. 東方.
    pub direction: &'static str,
    /// Semantic color name, e.g. 青色.
    pub color: &'static str,
    /// Display color as `#rrggbb`.
    pub color_hex: &'static str,
}

const ELEMENT_ATTRIBUTES: [ElementAttribute; 5] = [
    ElementAttribute {
        element: FiveElement::Wood,
        direction: "東方",
        color: "青色",
        color_hex: "#10b981",
    },
    ElementAttribute {
        element: FiveElement::Fire,
        direction: "南方",
        color: "紅色",
        color_hex: "#ef4444",
    },
    ElementAttribute {
        element: FiveElement::Earth,
        direction: "中央",
        color: "黃色",
        color_hex: "#f59e0b",
    },
    ElementAttribute {
        element: FiveElement::Metal,
        direction: "西方",
        color: "白色",
        color_hex: "#f8fafc",
    },
    ElementAttribute {
        element: FiveElement::Water,
        direction: "北方",
        color: "黑色",
        color_hex: "#334155",
    },
];

/// Relationship of a source element to a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interaction {
    /// Both are the same element.
    #[serde(rename = "同")]
    Same,
    /// Source generates target.
    #[serde(rename = "生")]
    Generates,
    /// Source controls target.
    #[serde(rename = "剋")]
    Controls,
    /// Target generates source.
    #[serde(rename = "洩")]
    DrainedBy,
    /// Target controls source.
    #[serde(rename = "耗")]
    Weakens,
}

impl Interaction {
    /// Single-character Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "同",
            Self::Generates => "生",
            Self::Controls => "剋",
            Self::DrainedBy => "洩",
            Self::Weakens => "耗",
        }
    }

    /// Whether this interaction produces an advisory line.
    pub const fn is_advisory(self) -> bool {
        matches!(self, Self::Generates | Self::Controls)
    }
}

/// Classify how `source` acts on `target` in the generation cycle.
pub const fn interaction(source: FiveElement, target: FiveElement) -> Interaction {
    let s = source.index();
    let t = target.index();
    if s == t {
        Interaction::Same
    } else if (s + 1) % 5 == t {
        Interaction::Generates
    } else if (s + 2) % 5 == t {
        Interaction::Controls
    } else if (t + 1) % 5 == s {
        Interaction::DrainedBy
    } else {
        Interaction::Weakens
    }
}

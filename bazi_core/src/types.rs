//! Core domain types for the Four Pillars chart engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Heavenly stems and earthly branches, the two cyclic symbol sets
//! - Pillars (stem + branch pairs)
//! - Birth input and the computed chart result

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Cyclic Symbols
// ============================================================================

/// The ten heavenly stems (天干) in cycle order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Stem {
    Jia = 0,
    Yi = 1,
    Bing = 2,
    Ding = 3,
    Wu = 4,
    Ji = 5,
    Geng = 6,
    Xin = 7,
    Ren = 8,
    Gui = 9,
}

impl Stem {
    /// 0-based ordinal (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for a raw ordinal.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Jia),
            1 => Some(Self::Yi),
            2 => Some(Self::Bing),
            3 => Some(Self::Ding),
            4 => Some(Self::Wu),
            5 => Some(Self::Ji),
            6 => Some(Self::Geng),
            7 => Some(Self::Xin),
            8 => Some(Self::Ren),
            9 => Some(Self::Gui),
            _ => None,
        }
    }

    /// The Chinese glyph for this stem.
    pub const fn symbol(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Stem for a Chinese glyph.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '甲' => Some(Self::Jia),
            '乙' => Some(Self::Yi),
            '丙' => Some(Self::Bing),
            '丁' => Some(Self::Ding),
            '戊' => Some(Self::Wu),
            '己' => Some(Self::Ji),
            '庚' => Some(Self::Geng),
            '辛' => Some(Self::Xin),
            '壬' => Some(Self::Ren),
            '癸' => Some(Self::Gui),
            _ => None,
        }
    }

    /// Stems at even ordinals are Yang, odd ordinals Yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The twelve earthly branches (地支) in cycle order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Branch {
    Zi = 0,
    Chou = 1,
    Yin = 2,
    Mao = 3,
    Chen = 4,
    Si = 5,
    Wu = 6,
    Wei = 7,
    Shen = 8,
    You = 9,
    Xu = 10,
    Hai = 11,
}

impl Branch {
    /// 0-based ordinal (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for a raw ordinal.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Zi),
            1 => Some(Self::Chou),
            2 => Some(Self::Yin),
            3 => Some(Self::Mao),
            4 => Some(Self::Chen),
            5 => Some(Self::Si),
            6 => Some(Self::Wu),
            7 => Some(Self::Wei),
            8 => Some(Self::Shen),
            9 => Some(Self::You),
            10 => Some(Self::Xu),
            11 => Some(Self::Hai),
            _ => None,
        }
    }

    /// The Chinese glyph for this branch.
    pub const fn symbol(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Branch for a Chinese glyph.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '子' => Some(Self::Zi),
            '丑' => Some(Self::Chou),
            '寅' => Some(Self::Yin),
            '卯' => Some(Self::Mao),
            '辰' => Some(Self::Chen),
            '巳' => Some(Self::Si),
            '午' => Some(Self::Wu),
            '未' => Some(Self::Wei),
            '申' => Some(Self::Shen),
            '酉' => Some(Self::You),
            '戌' => Some(Self::Xu),
            '亥' => Some(Self::Hai),
            _ => None,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Yin/Yang polarity of a stem
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

// ============================================================================
// Pillar
// ============================================================================

/// A stem-branch pair.
///
/// Of the 120 possible combinations only 60 belong to the sexagenary cycle;
/// membership is checked by [`crate::cycle::index_of`], not here. Serializes
/// as the canonical two-glyph string (e.g. `甲子`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = crate::Error;

    /// Parse a hand-entered two-glyph pillar string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let pair = match (chars.next(), chars.next(), chars.next()) {
            (Some(stem), Some(branch), None) => {
                Stem::from_symbol(stem).zip(Branch::from_symbol(branch))
            }
            _ => None,
        };
        match pair {
            Some((stem, branch)) => Ok(Self { stem, branch }),
            None => Err(crate::Error::PillarNotFound(trimmed.to_string())),
        }
    }
}

impl From<Pillar> for String {
    fn from(pillar: Pillar) -> Self {
        pillar.to_string()
    }
}

impl TryFrom<String> for Pillar {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Birth Input and Chart Result
// ============================================================================

/// Gender of the chart subject; drives the Da Yun direction rule.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown gender '{}' (expected male or female)",
                other
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Direction in which the decade cycles step through the sexagenary table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DaYunDirection {
    Forward,
    Backward,
}

impl fmt::Display for DaYunDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Raw birth data as collected by a front end.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthInput {
    /// Calendar birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// Birth time, `HH:MM` (24-hour)
    pub birth_time: String,
    /// Birth place; carried through for front ends, not used in computation
    #[serde(default)]
    pub birth_place: String,
    pub gender: Gender,
    #[serde(default)]
    pub name: Option<String>,
}

/// A fully computed chart.
///
/// Produced fresh per call and never mutated or persisted by the engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaziResult {
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    /// First decade-cycle pillar, one step from the month pillar
    pub first_da_yun: Pillar,
    /// Age in whole years at which the first decade cycle begins (>= 1)
    pub start_age: u32,
    pub birth_year: i32,
}

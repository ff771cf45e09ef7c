use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod generator;

pub use generator::generate;

pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotState {
    Dot,
    NoDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Blue,
    Green,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Large,
}

impl DotState {
    pub const ALL: [Self; 2] = [Self::Dot, Self::NoDot];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::NoDot => "no-dot",
        }
    }
}

impl Color {
    pub const ALL: [Self; 3] = [Self::Blue, Self::Green, Self::Orange];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }
}

impl Size {
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// An item field that a target can be defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Dot,
    Color,
    Size,
}

impl Attribute {
    pub const ALL: [Self; 3] = [Self::Dot, Self::Color, Self::Size];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Color => "color",
            Self::Size => "size",
        }
    }

    /// Field accessor for this attribute.
    pub fn accessor(self) -> fn(&Item) -> AttributeValue {
        match self {
            Self::Dot => |item: &Item| AttributeValue::Dot(item.dot),
            Self::Color => |item: &Item| AttributeValue::Color(item.color),
            Self::Size => |item: &Item| AttributeValue::Size(item.size),
        }
    }

    /// Parses `raw` as a value of this attribute, e.g. `no-dot` for [`Attribute::Dot`].
    pub fn parse_value(self, raw: &str) -> Result<AttributeValue, ParseAttributeError> {
        match self {
            Self::Dot => raw.parse().map(AttributeValue::Dot),
            Self::Color => raw.parse().map(AttributeValue::Color),
            Self::Size => raw.parse().map(AttributeValue::Size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "attribute", content = "value", rename_all = "kebab-case")]
pub enum AttributeValue {
    Dot(DotState),
    Color(Color),
    Size(Size),
}

impl AttributeValue {
    pub fn attribute(self) -> Attribute {
        match self {
            Self::Dot(_) => Attribute::Dot,
            Self::Color(_) => Attribute::Color,
            Self::Size(_) => Attribute::Size,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot(dot) => dot.as_str(),
            Self::Color(color) => color.as_str(),
            Self::Size(size) => size.as_str(),
        }
    }

    /// Display label with the first letter upper-cased (`No-dot`, `Small`).
    pub fn label(self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseAttributeError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! impl_from_str {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = ParseAttributeError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_str() == normalized)
                    .ok_or_else(|| ParseAttributeError {
                        kind: $kind,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

impl_from_str!(DotState, "dot state");
impl_from_str!(Color, "color");
impl_from_str!(Size, "size");
impl_from_str!(Attribute, "attribute");

/// A grid item. Attributes are fixed at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub dot: DotState,
    pub color: Color,
    pub size: Size,
}

impl Item {
    pub fn has_dot(&self) -> bool {
        self.dot == DotState::Dot
    }
}

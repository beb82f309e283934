//! Structural style configuration shared by every block family.
//!
//! Each field is independently optional: absence means "let the renderer
//! decide", never "apply a system default". Out-of-enum values coming from
//! stored JSON degrade to absence field-by-field rather than failing the
//! whole block.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Vertical or horizontal spacing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    None,
    S,
    M,
    L,
    Xl,
}

/// Content width clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    Full,
}

/// Viewport-relative section height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Height {
    Auto,
    Half,
    Screen,
}

/// Theme background token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Base,
    Muted,
    Accent,
    Inverted,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// How a block's primary image fills its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFit {
    Auto,
    Cover,
    Contain,
    ScaleDown,
}

/// Structural style config nested under a block's `data.style`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub padding: Option<Spacing>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub padding_x: Option<Spacing>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub max_width: Option<MaxWidth>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub height: Option<Height>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub background: Option<Background>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub alignment: Option<Alignment>,

    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub image_fit: Option<ImageFit>,
}

impl StyleConfig {
    /// True when no field is set at all.
    pub fn is_empty(&self) -> bool {
        *self == StyleConfig::default()
    }
}

/// Deserialize an optional enum field, mapping any out-of-enum value to
/// `None` instead of failing the containing struct.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

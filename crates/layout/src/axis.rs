//! Variation axis settings.

use std::{fmt, str::FromStr};

use font_types::Tag;

use crate::error::Error;

/// Weight axis.
pub const WGHT: Tag = Tag::new(b"wght");

/// Width axis.
pub const WDTH: Tag = Tag::new(b"wdth");

/// Optical size axis.
pub const OPSZ: Tag = Tag::new(b"opsz");

/// Axis setting (tag + user-space value).
///
/// The value is in user-space coordinates, matching what you'd see in font
/// variation settings. For example, `wght=700` for Bold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSetting {
    pub tag: Tag,
    pub value: f32,
}

impl AxisSetting {
    /// Create a new axis setting. Tags shorter than four bytes are padded with spaces.
    ///
    /// # Example
    ///
    /// ```
    /// use varposter_layout::AxisSetting;
    /// let setting = AxisSetting::new("wght", 700.0);
    /// ```
    pub fn new(tag: &str, value: f32) -> Self {
        let mut tag_bytes = [b' '; 4];
        for (dst, src) in tag_bytes.iter_mut().zip(tag.as_bytes().iter()) {
            *dst = *src;
        }
        Self {
            tag: Tag::new(&tag_bytes),
            value,
        }
    }

    pub const fn with_tag(tag: Tag, value: f32) -> Self {
        Self { tag, value }
    }
}

impl From<(&str, f32)> for AxisSetting {
    fn from((tag, value): (&str, f32)) -> Self {
        Self::new(tag, value)
    }
}

impl From<(Tag, f32)> for AxisSetting {
    fn from((tag, value): (Tag, f32)) -> Self {
        Self::with_tag(tag, value)
    }
}

impl fmt::Display for AxisSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

/// Parses `TAG=VALUE`, e.g. `wght=900` or `slnt=-12.5`.
impl FromStr for AxisSetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, value) = s
            .split_once('=')
            .ok_or_else(|| Error::InvalidAxisSpec(s.to_string()))?;

        if tag.len() != 4 {
            return Err(Error::InvalidTag(tag.to_string()));
        }

        let value: f32 = value
            .parse()
            .map_err(|_| Error::InvalidValue(value.to_string()))?;

        Ok(Self::new(tag, value))
    }
}

/// Replace (or append) the setting for `setting.tag`, keeping the others.
pub fn with_axis(axes: &[AxisSetting], setting: AxisSetting) -> Vec<AxisSetting> {
    axes.iter()
        .filter(|axis| axis.tag != setting.tag)
        .copied()
        .chain(Some(setting))
        .collect()
}

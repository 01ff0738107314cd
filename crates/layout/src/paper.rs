//! ISO paper formats.

use std::fmt;

use log::warn;

use crate::PageSize;

/// Format used when a name is not recognized.
pub const DEFAULT_FORMAT: PaperFormat = PaperFormat::A4;

/// ISO 216 A-series paper format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaperFormat {
    A5,
    A4,
    A3,
    A2,
    A1,
    A0,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl PaperFormat {
    pub const ALL: [Self; 6] = [Self::A5, Self::A4, Self::A3, Self::A2, Self::A1, Self::A0];

    pub fn name(self) -> &'static str {
        match self {
            Self::A5 => "A5",
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::A2 => "A2",
            Self::A1 => "A1",
            Self::A0 => "A0",
        }
    }

    /// Portrait width and height in points.
    fn portrait_points(self) -> (f64, f64) {
        match self {
            Self::A5 => (420.0, 595.0),
            Self::A4 => (595.0, 842.0),
            Self::A3 => (842.0, 1190.0),
            Self::A2 => (1190.0, 1684.0),
            Self::A1 => (1684.0, 2384.0),
            Self::A0 => (2384.0, 3370.0),
        }
    }

    pub fn size(self, orientation: Orientation) -> PageSize {
        let (short, long) = self.portrait_points();
        match orientation {
            Orientation::Landscape => PageSize::new(long, short),
            Orientation::Portrait => PageSize::new(short, long),
        }
    }

    /// Case-insensitive lookup.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }

    /// Look up a format by name, falling back to [`DEFAULT_FORMAT`] with a warning.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("Unknown paper format '{name}', using {DEFAULT_FORMAT}");
            DEFAULT_FORMAT
        })
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_sizes_match_print_shop_values() {
        let a4 = PaperFormat::A4.size(Orientation::Landscape);
        let a3 = PaperFormat::A3.size(Orientation::Landscape);
        assert_eq!(a4, PageSize::new(842.0, 595.0));
        assert_eq!(a3, PageSize::new(1190.0, 842.0));
    }

    #[test]
    fn portrait_swaps_dimensions() {
        let a4 = PaperFormat::A4.size(Orientation::Portrait);
        assert_eq!(a4, PageSize::new(595.0, 842.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(PaperFormat::parse("a3"), Some(PaperFormat::A3));
        assert_eq!(PaperFormat::parse(" A0 "), Some(PaperFormat::A0));
    }

    #[test]
    fn unknown_name_falls_back_to_a4() {
        assert_eq!(PaperFormat::parse("Letter"), None);
        assert_eq!(PaperFormat::from_name("Letter"), PaperFormat::A4);
    }

    #[test]
    fn each_format_doubles_the_previous() {
        for pair in PaperFormat::ALL.windows(2) {
            let smaller = pair[0].size(Orientation::Portrait);
            let larger = pair[1].size(Orientation::Portrait);
            assert!(
                (larger.width - smaller.height).abs() <= 1.0,
                "{} vs {}",
                pair[0],
                pair[1]
            );
        }
    }
}

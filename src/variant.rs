use std::fmt;
use std::str::FromStr;

use crate::config::SumConfig;
use crate::error::ConfigError;
use crate::sequence::Sequence;

/// Variant: which demonstration program's formulas and constants to use
///
/// - `Primary`:   a[i] = 5i,  b[i] = (i + 0.5) * 2.1, N = 20100, chunk 150, show 12
/// - `Secondary`: a[i] = 10i, b[i] = (i + 2.5) * 3.6, N = 10000, chunk 100, show 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

impl Variant {
    /// Value of the first input array at `index`
    pub fn a_at(self, index: usize) -> f32 {
        let i = index as f32;
        match self {
            Variant::Primary => i * 5.0,
            Variant::Secondary => i * 10.0,
        }
    }

    /// Value of the second input array at `index`
    pub fn b_at(self, index: usize) -> f32 {
        let i = index as f32;
        match self {
            Variant::Primary => (i + 0.5) * 2.1,
            Variant::Secondary => (i + 2.5) * 3.6,
        }
    }

    pub fn fill_a(self, len: usize) -> Sequence {
        Sequence::from_fn(len, |i| self.a_at(i))
    }

    pub fn fill_b(self, len: usize) -> Sequence {
        Sequence::from_fn(len, |i| self.b_at(i))
    }

    /// Built-in constants of this variant
    pub fn config(self) -> SumConfig {
        let (len, chunk_size, display_count) = match self {
            Variant::Primary => (20_100, 150, 12),
            Variant::Secondary => (10_000, 100, 8),
        };
        SumConfig::preset(self, len, chunk_size, display_count)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Variant::Primary),
            "secondary" => Ok(Variant::Secondary),
            _ => Err(ConfigError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_formulas() {
        assert_eq!(Variant::Primary.fill_a(4).as_slice(), &[0.0, 5.0, 10.0, 15.0]);
        let b = Variant::Primary.fill_b(4);
        let expected = [1.05, 3.15, 5.25, 7.35];
        for (got, want) in b.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{got} != {want}");
        }
    }

    #[test]
    fn test_secondary_formulas() {
        assert_eq!(Variant::Secondary.fill_a(4).as_slice(), &[0.0, 10.0, 20.0, 30.0]);
        let b = Variant::Secondary.fill_b(4);
        let expected = [9.0, 12.6, 16.2, 19.8];
        for (got, want) in b.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{got} != {want}");
        }
    }

    #[test]
    fn test_presets() {
        let primary = Variant::Primary.config();
        assert_eq!(primary.variant(), Variant::Primary);
        assert_eq!(primary.len(), 20_100);
        assert_eq!(primary.chunk_size().get(), 150);
        assert_eq!(primary.display_count(), 12);

        let secondary = Variant::Secondary.config();
        assert_eq!(secondary.variant(), Variant::Secondary);
        assert_eq!(secondary.len(), 10_000);
        assert_eq!(secondary.chunk_size().get(), 100);
        assert_eq!(secondary.display_count(), 8);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("primary".parse::<Variant>().unwrap(), Variant::Primary);
        assert_eq!(" Secondary ".parse::<Variant>().unwrap(), Variant::Secondary);
        assert!(matches!(
            "tertiary".parse::<Variant>(),
            Err(ConfigError::UnknownVariant { .. })
        ));
    }
}

use std::str::FromStr;

/// An error type for dimension arguments.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// The value is neither a pixel count nor a percentage.
    #[error("Invalid dimension '{0}', expected pixels (150) or a percentage (50%)")]
    InvalidNumber(String),
}

/// A requested image dimension, absolute or relative to the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// An absolute number of pixels, `0` keeps the source dimension.
    Pixels(usize),
    /// A percentage of the source dimension.
    Percent(f32),
}

impl Dimension {
    /// Resolve the dimension against the source dimension, truncating percentages.
    pub fn resolve(&self, source: usize) -> usize {
        match self {
            Dimension::Pixels(n) => *n,
            Dimension::Percent(p) => ((p / 100.0) * source as f32) as usize,
        }
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DimensionError::InvalidNumber(s.to_string());
        let s = s.trim();

        match s.strip_suffix('%') {
            Some(percent) => {
                let p = percent.trim().parse::<f32>().map_err(|_| invalid())?;
                if !p.is_finite() || p < 0.0 {
                    return Err(invalid());
                }
                Ok(Dimension::Percent(p))
            }
            None => s.parse::<usize>().map(Dimension::Pixels).map_err(|_| invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dimension, DimensionError};

    #[test]
    fn parse_pixels() {
        assert_eq!("120".parse::<Dimension>(), Ok(Dimension::Pixels(120)));
        assert_eq!("0".parse::<Dimension>(), Ok(Dimension::Pixels(0)));
    }

    #[test]
    fn parse_percent() {
        assert_eq!("50%".parse::<Dimension>(), Ok(Dimension::Percent(50.0)));
        assert_eq!("12.5%".parse::<Dimension>(), Ok(Dimension::Percent(12.5)));
    }

    #[test]
    fn parse_invalid() {
        for s in ["abc", "-5", "-5%", "%", "1e40%", ""] {
            assert_eq!(
                s.parse::<Dimension>(),
                Err(DimensionError::InvalidNumber(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn resolve() {
        assert_eq!(Dimension::Percent(50.0).resolve(200), 100);
        assert_eq!(Dimension::Percent(150.0).resolve(3), 4);
        assert_eq!(Dimension::Percent(0.0).resolve(640), 0);
        assert_eq!(Dimension::Pixels(120).resolve(640), 120);
    }
}

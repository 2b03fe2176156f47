//! Indentation used for multi-line type literals and tuples.

const SPACES: &str = "                ";

/// One indentation level of printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces, capped at 16.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// What the TypeScript compiler's printer emits.
    pub const COMPILER: Self = Self::Spaces(4);

    pub const COMPACT: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::COMPILER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(Indent::COMPACT.as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(0).as_str(), "");
        assert_eq!(Indent::Spaces(40).as_str().len(), 16);
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default_matches_compiler() {
        assert_eq!(Indent::default(), Indent::COMPILER);
        assert_eq!(Indent::default().as_str(), "    ");
    }
}

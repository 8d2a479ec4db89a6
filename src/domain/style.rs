use std::fmt;
use std::str::FromStr;

/// Named translation register, mapped to a descriptive instruction for the
/// translation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationStyle {
    #[default]
    Standard,
    Colloquial,
    Literary,
    Technical,
}

impl TranslationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStyle::Standard => "standard",
            TranslationStyle::Colloquial => "colloquial",
            TranslationStyle::Literary => "literary",
            TranslationStyle::Technical => "technical",
        }
    }

    /// Human-readable register description embedded in the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            TranslationStyle::Standard => "a standard, formal register",
            TranslationStyle::Colloquial => "a colloquial, informal register",
            TranslationStyle::Literary => "a literary, novelistic register",
            TranslationStyle::Technical => "a technical, specialized register",
        }
    }
}

impl FromStr for TranslationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(TranslationStyle::Standard),
            "colloquial" => Ok(TranslationStyle::Colloquial),
            "literary" => Ok(TranslationStyle::Literary),
            "technical" => Ok(TranslationStyle::Technical),
            _ => Err(format!("Invalid translation style: {}", s)),
        }
    }
}

impl fmt::Display for TranslationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

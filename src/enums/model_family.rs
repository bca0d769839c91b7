use std::fmt;
use std::str::FromStr;
use crate::errors::GenerationError;

/// Backend model family picked by the configured selector string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// Legacy single-turn `text-bison` predictor. Ignores `top_k`.
    Bison,
    /// Generative `gemini` content API.
    Gemini,
}

impl ModelFamily {
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Bison => "bison",
            Self::Gemini => "gemini",
        }
    }
}

impl FromStr for ModelFamily {
    type Err = GenerationError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "bison" => Ok(Self::Bison),
            "gemini" => Ok(Self::Gemini),
            other => Err(GenerationError::InvalidConfiguration(format!(
                "Unsupported model name '{}'. Please use 'bison' or 'gemini'.",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_selectors() {
        assert_eq!("bison".parse::<ModelFamily>().unwrap(), ModelFamily::Bison);
        assert_eq!("gemini".parse::<ModelFamily>().unwrap(), ModelFamily::Gemini);
    }

    #[test]
    fn selector_matching_is_exact() {
        for selector in ["Gemini", "BISON", " gemini", "palm", ""] {
            let err = selector.parse::<ModelFamily>().unwrap_err();
            assert!(matches!(err, GenerationError::InvalidConfiguration(_)), "{selector:?}");
        }
    }
}

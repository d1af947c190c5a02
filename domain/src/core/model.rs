//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// A domain concept naming the Groq-hosted models the researcher agent can
/// be bound to. Unknown identifiers round-trip through [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Llama models
    Llama33_70bVersatile,
    Llama31_8bInstant,
    // Other hosted models
    Gemma2_9b,
    DeepSeekR1DistillLlama70b,
    Qwen3_32b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Gemma2_9b => "gemma2-9b-it",
            Model::DeepSeekR1DistillLlama70b => "deepseek-r1-distill-llama-70b",
            Model::Qwen3_32b => "qwen/qwen3-32b",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Llama model
    pub fn is_llama(&self) -> bool {
        matches!(self, Model::Llama33_70bVersatile | Model::Llama31_8bInstant)
    }
}

impl Default for Model {
    /// Returns the default model (Llama 3.3 70B Versatile)
    fn default() -> Self {
        Model::Llama33_70bVersatile
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.3-70b-versatile" => Model::Llama33_70bVersatile,
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            "gemma2-9b-it" => Model::Gemma2_9b,
            "deepseek-r1-distill-llama-70b" => Model::DeepSeekR1DistillLlama70b,
            "qwen/qwen3-32b" => Model::Qwen3_32b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let models = vec![
            Model::Llama33_70bVersatile,
            Model::Llama31_8bInstant,
            Model::Gemma2_9b,
        ];
        for model in models {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mixtral-8x7b-32768".parse().unwrap();
        assert_eq!(model, Model::Custom("mixtral-8x7b-32768".to_string()));
        assert_eq!(model.to_string(), "mixtral-8x7b-32768");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Llama33_70bVersatile);
        assert!(Model::default().is_llama());
    }
}

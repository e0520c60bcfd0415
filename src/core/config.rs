use std::env;

use crate::errors::RelayError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bucket holding the submitted `.txt` records.
    pub input_bucket: String,
    /// Bucket receiving the synthesized `.mp3` records.
    pub output_bucket: String,
    pub sns_topic_arn: String,
    /// Value sent back in `Access-Control-Allow-Origin`.
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Every variable is
    /// required; an empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| RelayError::ConfigError(format!("{name} is not set")))
        };

        Ok(Self {
            input_bucket: required("INPUT_BUCKET")?,
            output_bucket: required("OUTPUT_BUCKET")?,
            sns_topic_arn: required("SNS_TOPIC_ARN")?,
            allowed_origin: required("ALLOWED_ORIGIN")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn loads_all_required_variables() {
        let env = vars(&[
            ("INPUT_BUCKET", "tts-input"),
            ("OUTPUT_BUCKET", "tts-output"),
            ("SNS_TOPIC_ARN", "arn:aws:sns:us-east-1:123456789012:tts"),
            ("ALLOWED_ORIGIN", "https://app.example.com"),
        ]);

        let config = AppConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.input_bucket, "tts-input");
        assert_eq!(config.output_bucket, "tts-output");
        assert_eq!(config.sns_topic_arn, "arn:aws:sns:us-east-1:123456789012:tts");
        assert_eq!(config.allowed_origin, "https://app.example.com");
    }

    #[test]
    fn missing_variable_fails_fast() {
        let env = vars(&[
            ("INPUT_BUCKET", "tts-input"),
            ("OUTPUT_BUCKET", "tts-output"),
            ("ALLOWED_ORIGIN", "*"),
        ]);

        let err = AppConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("SNS_TOPIC_ARN"));
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        let env = vars(&[
            ("INPUT_BUCKET", "tts-input"),
            ("OUTPUT_BUCKET", "  "),
            ("SNS_TOPIC_ARN", "arn"),
            ("ALLOWED_ORIGIN", "*"),
        ]);

        match AppConfig::from_lookup(|k| env.get(k).cloned()) {
            Err(RelayError::ConfigError(msg)) => assert!(msg.contains("OUTPUT_BUCKET")),
            other => panic!("Expected ConfigError, got: {other:?}"),
        }
    }
}

use crate::error::GradeError;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GradeConfig {
    pub narrative: NarrativeConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 30,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: FormatSetting,
    pub fail_under: Option<u32>,
}

impl GradeConfig {
    pub fn validate(&self) -> Result<(), GradeError> {
        let narrative = &self.narrative;
        if narrative.endpoint.trim().is_empty() {
            return Err(GradeError::ConfigParse(
                "narrative.endpoint must not be empty".to_string(),
            ));
        }
        if narrative.model.trim().is_empty() {
            return Err(GradeError::ConfigParse(
                "narrative.model must not be empty".to_string(),
            ));
        }
        if narrative.api_key_env.trim().is_empty() {
            return Err(GradeError::ConfigParse(
                "narrative.api_key_env must name an environment variable".to_string(),
            ));
        }
        if narrative.timeout_secs == 0 {
            return Err(GradeError::ConfigParse(
                "narrative.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&narrative.temperature) {
            return Err(GradeError::ConfigParse(
                "narrative.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if narrative.max_tokens == 0 {
            return Err(GradeError::ConfigParse(
                "narrative.max_tokens must be greater than 0".to_string(),
            ));
        }
        if let Some(fail_under) = self.report.fail_under {
            if fail_under > 100 {
                return Err(GradeError::ConfigParse(format!(
                    "report.fail_under must be between 0 and 100 (found {fail_under})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: GradeConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.narrative.enabled);
        assert_eq!(cfg.narrative.model, DEFAULT_MODEL);
        assert_eq!(cfg.narrative.timeout_secs, 30);
        assert_eq!(cfg.report.format, FormatSetting::Md);
        assert!(cfg.report.fail_under.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[narrative]
enabled = false
endpoint = "http://localhost:8080/v1/chat/completions"
model = "local-model"
api_key_env = "LOCAL_KEY"
timeout_secs = 5
temperature = 0.2
max_tokens = 512

[report]
format = "json"
fail_under = 60
"#;
        let cfg: GradeConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(!cfg.narrative.enabled);
        assert_eq!(cfg.narrative.api_key_env, "LOCAL_KEY");
        assert_eq!(cfg.narrative.max_tokens, 512);
        assert_eq!(cfg.report.format, FormatSetting::Json);
        assert_eq!(cfg.report.fail_under, Some(60));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg: GradeConfig = toml::from_str("[narrative]\ntimeout_secs = 0\n")
            .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(GradeError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let cfg: GradeConfig = toml::from_str("[narrative]\ntemperature = 3.5\n")
            .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(GradeError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_fail_under_above_hundred() {
        let cfg: GradeConfig =
            toml::from_str("[report]\nfail_under = 101\n").expect("config should parse");
        assert!(matches!(cfg.validate(), Err(GradeError::ConfigParse(_))));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result: Result<GradeConfig, _> = toml::from_str("[report]\nformat = \"sarif\"\n");
        assert!(result.is_err());
    }
}

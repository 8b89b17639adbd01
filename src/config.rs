//! Filter Configuration
//!
//! Field ids, endpoint and behavior switches. Defaults match the academic
//! intake admin form; a page can override any of them with a JSON object
//! (see [`CONFIG_ELEMENT_ID`]).

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{FilterError, FilterResult};

/// Id of the optional `<script type="application/json">` element holding
/// overrides, as rendered by Django's `json_script` filter
pub const CONFIG_ELEMENT_ID: &str = "program-filter-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// DOM id of the parent (university) select
    pub parent_field_id: String,
    /// DOM id of the dependent (program) select
    pub dependent_field_id: String,
    /// Path of the program filter endpoint
    pub endpoint: String,
    /// Query parameter carrying the selected university id
    pub query_param: String,
    /// Label of the synthetic "no selection" option
    pub empty_label: String,
    /// Property path on `window` that must exist before attaching.
    /// Empty disables the check.
    pub host_global: Vec<String>,
    /// Drop responses of refreshes that were superseded by a newer one
    pub discard_stale_responses: bool,
    /// Attach as soon as the module starts
    pub auto_attach: bool,
    pub log_level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            parent_field_id: "id_university".to_string(),
            dependent_field_id: "id_program".to_string(),
            endpoint: "/admin/programs/academicintake/filter-programs/".to_string(),
            query_param: "university_id".to_string(),
            empty_label: "---------".to_string(),
            host_global: vec!["django".to_string(), "jQuery".to_string()],
            discard_stale_responses: false,
            auto_attach: true,
            log_level: "info".to_string(),
        }
    }
}

impl FilterConfig {
    /// Parse overrides from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let config: FilterConfig =
            serde_json::from_str(json).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FilterResult<()> {
        let required = [
            ("parent_field_id", &self.parent_field_id),
            ("dependent_field_id", &self.dependent_field_id),
            ("endpoint", &self.endpoint),
            ("query_param", &self.query_param),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(FilterError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.parent_field_id == self.dependent_field_id {
            return Err(FilterError::Config(
                "parent_field_id and dependent_field_id must differ".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> FilterResult<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| FilterError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    /// Dotted form of `host_global` for diagnostics, e.g. `django.jQuery`
    pub fn host_global_path(&self) -> String {
        self.host_global.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_academic_intake_form() {
        let config = FilterConfig::default();
        assert_eq!(config.parent_field_id, "id_university");
        assert_eq!(config.dependent_field_id, "id_program");
        assert_eq!(config.query_param, "university_id");
        assert_eq!(config.host_global_path(), "django.jQuery");
        assert!(!config.discard_stale_responses);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = FilterConfig::from_json(
            r#"{"dependent_field_id": "id_course", "discard_stale_responses": true}"#,
        )
        .unwrap();
        assert_eq!(config.dependent_field_id, "id_course");
        assert!(config.discard_stale_responses);
        assert_eq!(config.parent_field_id, "id_university");
        assert_eq!(config.empty_label, "---------");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FilterConfig::from_json(r#"{"parent_id": "id_campus"}"#).unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let err = FilterConfig::from_json(r#"{"endpoint": "  "}"#).unwrap_err();
        assert_eq!(
            err,
            FilterError::Config("endpoint must not be empty".to_string())
        );
    }

    #[test]
    fn test_same_field_ids_rejected() {
        let err = FilterConfig::from_json(r#"{"dependent_field_id": "id_university"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let config = FilterConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);

        assert!(FilterConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
    }

    #[test]
    fn test_host_check_can_be_disabled() {
        let config = FilterConfig::from_json(r#"{"host_global": []}"#).unwrap();
        assert!(config.host_global.is_empty());
    }
}

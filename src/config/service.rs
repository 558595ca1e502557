use serde::{Deserialize, Serialize};

use crate::value::OptionValue;

/// A single named option of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub name: String,
    /// Clients sometimes drop the key entirely when the value is unset.
    #[serde(default)]
    pub value: OptionValue,
}

impl ServiceOption {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Options for one service slot (`llm`, `tts`, `stt`, `vad`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service: String,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
}

impl ServiceConfig {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            options: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.push(ServiceOption::new(name, value));
        self
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        find_option(self, name)
    }

    /// Replaces the value of the first option called `name`, keeping its
    /// position, or appends a new option.
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        match self.options.iter_mut().find(|o| o.name == name) {
            Some(option) => option.value = value,
            None => self.options.push(ServiceOption::new(name, value)),
        }
    }
}

/// First service config whose id matches. A missing list behaves as empty.
pub fn find_service<'a>(
    config: Option<&'a [ServiceConfig]>,
    service_id: &str,
) -> Option<&'a ServiceConfig> {
    config?.iter().find(|c| c.service == service_id)
}

/// First option of `service` called `name`.
pub fn find_option<'a>(service: &'a ServiceConfig, name: &str) -> Option<&'a OptionValue> {
    service
        .options
        .iter()
        .find(|o| o.name == name)
        .map(|o| &o.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn services() -> Vec<ServiceConfig> {
        vec![
            ServiceConfig::new("tts").with_option("voice", "first"),
            ServiceConfig::new("llm").with_option("model", "gpt-4o"),
            ServiceConfig::new("tts").with_option("voice", "second"),
        ]
    }

    #[test]
    fn find_service_returns_first_match() {
        let list = services();
        let tts = find_service(Some(&list), "tts").unwrap();
        assert_eq!(tts.option("voice").and_then(OptionValue::as_str), Some("first"));
    }

    #[test]
    fn missing_list_is_treated_as_empty() {
        for id in ["llm", "tts", "stt", "vad", "transport"] {
            assert!(find_service(None, id).is_none());
            assert!(find_service(Some(&[]), id).is_none());
        }
    }

    #[test]
    fn find_option_misses_unknown_names() {
        let service = ServiceConfig::new("llm").with_option("model", "gpt-4o");
        assert!(find_option(&service, "run_on_config").is_none());
    }

    #[test]
    fn set_option_replaces_in_place() {
        let mut service = ServiceConfig::new("tts")
            .with_option("voice", "a")
            .with_option("model", "sonic-english");
        service.set_option("voice", "b");
        service.set_option("language", "fr");
        let names: Vec<_> = service.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["voice", "model", "language"]);
        assert_eq!(service.option("voice").and_then(OptionValue::as_str), Some("b"));
    }

    #[test]
    fn missing_option_value_decodes_as_null() {
        let service: ServiceConfig =
            serde_json::from_value(json!({"service": "tts", "options": [{"name": "model"}]}))
                .unwrap();
        assert!(service.option("model").unwrap().is_null());
    }
}

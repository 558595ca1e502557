#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SttLanguage {
    pub id: &'static str,
    pub model: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SttProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub languages: &'static [SttLanguage],
}

impl SttProvider {
    pub fn model_for(&self, language: &str) -> Option<&'static str> {
        self.languages
            .iter()
            .find(|l| l.id == language)
            .map(|l| l.model)
    }
}

pub const STT_PROVIDERS: &[SttProvider] = &[SttProvider {
    id: "deepgram",
    name: "Deepgram",
    languages: &[
        SttLanguage {
            id: "en",
            model: "nova-2-conversationalai",
        },
        SttLanguage {
            id: "fr",
            model: "nova-2-general",
        },
        SttLanguage {
            id: "de",
            model: "nova-2-general",
        },
        SttLanguage {
            id: "es",
            model: "nova-2-general",
        },
    ],
}];

pub fn stt_provider(id: &str) -> Option<&'static SttProvider> {
    STT_PROVIDERS.iter().find(|p| p.id == id)
}

pub fn default_stt_provider() -> &'static SttProvider {
    &STT_PROVIDERS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deepgram_models_by_language() {
        let deepgram = stt_provider("deepgram").unwrap();
        assert_eq!(deepgram.model_for("en"), Some("nova-2-conversationalai"));
        assert_eq!(deepgram.model_for("de"), Some("nova-2-general"));
        assert_eq!(deepgram.model_for("ja"), None);
    }
}

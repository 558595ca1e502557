/// A spoken language the voice pipeline supports end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Language code written into the `language` options (`en`, `fr`, ...)
    pub code: &'static str,
    pub name: &'static str,
    /// Identifier stored on conversations (`english`, `french`, ...)
    pub conversation_id: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        code: "en",
        name: "English",
        conversation_id: "english",
    },
    Language {
        code: "fr",
        name: "French",
        conversation_id: "french",
    },
    Language {
        code: "de",
        name: "German",
        conversation_id: "german",
    },
    Language {
        code: "es",
        name: "Spanish",
        conversation_id: "spanish",
    },
];

/// Looks a language up by code or by conversation identifier.
pub fn language(id: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|l| l.code == id || l.conversation_id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_id_forms() {
        assert_eq!(language("fr").map(|l| l.name), Some("French"));
        assert_eq!(language("german").map(|l| l.code), Some("de"));
        assert!(language("pt").is_none());
    }
}

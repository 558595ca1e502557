#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
}

/// A language offered by a TTS provider, with the model that speaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtsLanguage {
    pub id: &'static str,
    pub name: &'static str,
    pub model: &'static str,
    pub voices: &'static [Voice],
}

impl TtsLanguage {
    pub fn voice(&self, id: &str) -> Option<&'static Voice> {
        self.voices.iter().find(|v| v.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtsProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub languages: &'static [TtsLanguage],
}

impl TtsProvider {
    pub fn language(&self, id: &str) -> Option<&'static TtsLanguage> {
        self.languages.iter().find(|l| l.id == id)
    }
}

/// Voice settings new workspaces start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultVoice {
    pub tts_provider: &'static str,
    pub voice_id: &'static str,
    pub tts_model: &'static str,
    pub stt_model: &'static str,
    pub language: &'static str,
}

const fn voice(name: &'static str, id: &'static str) -> Voice {
    Voice { id, name }
}

const CARTESIA_ENGLISH: &[Voice] = &[
    voice("British Lady", "79a125e8-cd45-4c13-8a67-188112f4dd22"),
    voice("California Girl", "b7d50908-b17c-442d-ad8d-810c63997ed9"),
    voice("Child", "2ee87190-8f84-4925-97da-e52547f9462c"),
    voice("Classy British Man", "95856005-0332-41b0-935f-352e296aa0df"),
    voice("Confident British Man", "63ff761f-c1e8-414b-b969-d1833d1c870c"),
    voice("Doctor Mischief", "fb26447f-308b-471e-8b00-8e9f04284eb5"),
    voice("Female Nurse", "5c42302c-194b-4d0c-ba1a-8cb485c84ab9"),
    voice("Friendly Reading Man", "69267136-1bdc-412f-ad78-0caad210fb40"),
    voice("Helpful Woman", "156fb8d2-335b-4950-9cb3-a2d33befec77"),
    voice("Kentucky Man", "726d5ae5-055f-4c3d-8355-d9677de68937"),
    voice("Madame Mischief", "e13cae5c-ec59-4f71-b0a6-266df3c9bb8e"),
    voice("Movieman", "c45bc5ec-dc68-4feb-8829-6e6b2748095d"),
    voice("Newsman", "d46abd1d-2d02-43e8-819f-51fb652c1c61"),
    voice("Polite Man", "ee7ea9f8-c0c1-498c-9279-764d6b56d189"),
    voice("Salesman", "820a3788-2b37-4d21-847a-b65d8a68c99a"),
    voice("Southern Woman", "f9836c6e-a0bd-460e-9d3c-f7299fa60f94"),
    voice("Storyteller Lady", "996a8b96-4804-46f0-8e05-3fd4ef1a87cd"),
    voice("The Merchant", "50d6beb4-80ea-4802-8387-6c948fe84208"),
];

const CARTESIA_FRENCH: &[Voice] = &[
    voice("Calm French Woman", "a8a1eb38-5f15-4c1d-8722-7ac0f329727d"),
    voice("French Conversational Lady", "a249eaff-1e96-4d2c-b23b-12efa4f66f41"),
    voice("French Narrator Lady", "8832a0b5-47b2-4751-bb22-6a8e2149303d"),
    voice("French Narrator Man", "5c3c89e5-535f-43ef-b14d-f8ffe148c1f0"),
    voice("Friendly French Man", "ab7c61f5-3daa-47dd-a23b-4ac0aac5f5c3"),
    voice("Helpful French Lady", "65b25c5d-ff07-4687-a04c-da2f43ef6fa9"),
    voice("Stern French Man", "0418348a-0ca2-4e90-9986-800fb8b3bbc0"),
];

const CARTESIA_GERMAN: &[Voice] = &[
    voice("Friendly German Man", "fb9fcab6-aba5-49ec-8d7e-3f1100296dde"),
    voice("German Conversation Man", "384b625b-da5d-49e8-a76d-a2855d4f31eb"),
    voice("German Conversational Woman", "3f4ade23-6eb4-4279-ab05-6a144947c4d5"),
    voice("German Reporter Man", "3f6e78a8-5283-42aa-b5e7-af82e8bb310c"),
    voice("German Reporter Woman", "119e03e4-0705-43c9-b3ac-a658ce2b6639"),
    voice("German Storyteller Man", "db229dfe-f5de-4be4-91fd-7b077c158578"),
    voice("German Woman", "b9de4a89-2257-424b-94c2-db18ba68c81a"),
];

const CARTESIA_SPANISH: &[Voice] = &[
    voice("Mexican Man", "15d0c2e2-8d29-44c3-be23-d585d5f154a1"),
    voice("Mexican Woman", "5c5ad5e7-1020-476b-8b91-fdcbe9cc313c"),
    voice("Spanish Narrator Lady", "2deb3edf-b9d8-4d06-8db9-5742fb8a3cb2"),
    voice("Spanish Narrator Man", "a67e0421-22e0-4d5b-b586-bd4a64aee41d"),
    voice("Spanish Speaking Lady", "846d6cb0-2301-48b6-9683-48f5618ea2f6"),
    voice("Spanish Speaking Man", "34dbb662-8e98-413c-a1ef-1a3407675fe7"),
    voice("Spanish Speaking Reporter Man", "2695b6b5-5543-4be1-96d9-3967fb5e7fec"),
    voice("Young Spanish Speaking Woman", "db832ebd-3cb6-42e7-9d47-912b425adbaa"),
    voice("Spanish Speaking Storyteller Man", "846fa30b-6e1a-49b9-b7df-6be47092a09a"),
];

// ElevenLabs voices are multilingual.
const ELEVENLABS_VOICES: &[Voice] = &[
    voice("Alice", "Xb7hH8MSUJpSbSDYk0k2"),
    voice("Aria", "9BWtsMINqrJLrRacOk9x"),
    voice("Bill", "pqHfZKP75CvOlQylNhV4"),
    voice("Brian", "nPczCjzI2devNBz1zQrb"),
    voice("Callum", "N2lVS1w4EtoT3dr4eOWO"),
    voice("Charlie", "IKne3meq5aSn9XLyUdCD"),
    voice("Charlotte", "XB0fDUnXU5powFXDhCwa"),
    voice("Chris", "iP95p4xoKVk53GoZ742B"),
    voice("Daniel", "onwK4e9ZLuTAKqWW03F9"),
    voice("Eric", "cjVigY5qzO86Huf0OWal"),
    voice("George", "JBFqnCBsd6RMkjVDRZzb"),
    voice("Jessica", "cgSgspJ2msm6clMCkdW9"),
    voice("Laura", "FGY2WhTYpPnrIDTdsKH5"),
    voice("Liam", "TX3LPaxmHKxFdv7VOQHJ"),
    voice("Lily", "pFZP5JQG7iQjIQuC4Bku"),
    voice("Matilda", "XrExE9yKIg1WjnnlVkGX"),
    voice("River", "SAz9YHcvj6GT2YYXdXww"),
    voice("Roger", "CwhRBWXzGAHq8TQ4Fs17"),
    voice("Sarah", "EXAVITQu4vr4xnSDxMaL"),
    voice("Will", "bIHbv24MWmeRgasZH58o"),
];

const ELEVENLABS_MODEL: &str = "eleven_turbo_v2_5";

pub const TTS_PROVIDERS: &[TtsProvider] = &[
    TtsProvider {
        id: "cartesia",
        name: "Cartesia",
        languages: &[
            TtsLanguage {
                id: "en",
                name: "English",
                model: "sonic-english",
                voices: CARTESIA_ENGLISH,
            },
            TtsLanguage {
                id: "fr",
                name: "French",
                model: "sonic-multilingual",
                voices: CARTESIA_FRENCH,
            },
            TtsLanguage {
                id: "de",
                name: "German",
                model: "sonic-multilingual",
                voices: CARTESIA_GERMAN,
            },
            TtsLanguage {
                id: "es",
                name: "Spanish",
                model: "sonic-multilingual",
                voices: CARTESIA_SPANISH,
            },
        ],
    },
    TtsProvider {
        id: "elevenlabs",
        name: "ElevenLabs",
        languages: &[
            TtsLanguage {
                id: "en",
                name: "English",
                model: ELEVENLABS_MODEL,
                voices: ELEVENLABS_VOICES,
            },
            TtsLanguage {
                id: "fr",
                name: "French",
                model: ELEVENLABS_MODEL,
                voices: ELEVENLABS_VOICES,
            },
            TtsLanguage {
                id: "de",
                name: "German",
                model: ELEVENLABS_MODEL,
                voices: ELEVENLABS_VOICES,
            },
            TtsLanguage {
                id: "es",
                name: "Spanish",
                model: ELEVENLABS_MODEL,
                voices: ELEVENLABS_VOICES,
            },
        ],
    },
];

pub fn tts_provider(id: &str) -> Option<&'static TtsProvider> {
    TTS_PROVIDERS.iter().find(|p| p.id == id)
}

/// Finds a voice anywhere in the catalog, returning the provider and
/// language it was found under first.
pub fn find_voice(
    voice_id: &str,
) -> Option<(&'static TtsProvider, &'static TtsLanguage, &'static Voice)> {
    TTS_PROVIDERS.iter().find_map(|provider| {
        provider
            .languages
            .iter()
            .find_map(|language| language.voice(voice_id).map(|v| (provider, language, v)))
    })
}

pub fn default_voice() -> DefaultVoice {
    DefaultVoice {
        tts_provider: "cartesia",
        voice_id: CARTESIA_ENGLISH[0].id,
        tts_model: "sonic-english",
        stt_model: "nova-2-conversationalai",
        language: "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesia_uses_multilingual_model_outside_english() {
        let cartesia = tts_provider("cartesia").unwrap();
        assert_eq!(cartesia.language("en").unwrap().model, "sonic-english");
        assert_eq!(cartesia.language("es").unwrap().model, "sonic-multilingual");
    }

    #[test]
    fn find_voice_reports_its_language() {
        let (provider, language, voice) =
            find_voice("a8a1eb38-5f15-4c1d-8722-7ac0f329727d").unwrap();
        assert_eq!(provider.id, "cartesia");
        assert_eq!(language.id, "fr");
        assert_eq!(voice.name, "Calm French Woman");
    }

    #[test]
    fn default_voice_is_in_catalog() {
        let default = default_voice();
        let language = tts_provider(default.tts_provider)
            .and_then(|p| p.language(default.language))
            .unwrap();
        assert_eq!(language.model, default.tts_model);
        assert!(language.voice(default.voice_id).is_some());
    }
}

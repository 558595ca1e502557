/// An LLM model a workspace can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmModel {
    /// Provider id as stored in `services.llm`
    pub provider: &'static str,
    /// Model id as stored in the `llm.model` option
    pub id: &'static str,
    pub label: &'static str,
}

const fn model(provider: &'static str, id: &'static str, label: &'static str) -> LlmModel {
    LlmModel {
        provider,
        id,
        label,
    }
}

/// All selectable models. The first entry is the default for new workspaces.
pub const LLM_MODELS: &[LlmModel] = &[
    // Anthropic
    model(
        "anthropic",
        "claude-3-5-sonnet-20241022",
        "Claude 3.5 Sonnet (2024-10-22)",
    ),
    model(
        "anthropic",
        "claude-3-5-sonnet-20240620",
        "Claude 3.5 Sonnet (2024-06-20)",
    ),
    model(
        "anthropic",
        "claude-3-5-sonnet-latest",
        "Claude 3.5 Sonnet (Latest)",
    ),
    model(
        "anthropic",
        "claude-3-5-haiku-20241022",
        "Claude 3.5 Haiku (2024-10-22)",
    ),
    model(
        "anthropic",
        "claude-3-5-haiku-latest",
        "Claude 3.5 Haiku (Latest)",
    ),
    // Together AI
    model(
        "together",
        "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo",
        "Llama 3.1 8B",
    ),
    model(
        "together",
        "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo",
        "Llama 3.1 70B",
    ),
    model(
        "together",
        "meta-llama/Meta-Llama-3.1-405B-Instruct-Turbo",
        "Llama 3.1 405B",
    ),
    model(
        "together",
        "meta-llama/Llama-3.2-3B-Instruct-Turbo",
        "Llama 3.2 3B",
    ),
    model(
        "together",
        "meta-llama/Llama-3.2-11B-Vision-Instruct-Turbo",
        "Llama 3.2 11B",
    ),
    model(
        "together",
        "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo",
        "Llama 3.2 90B",
    ),
    // Groq
    model("groq", "llama-3.1-8b-instant", "Llama 3.1 8B"),
    model("groq", "llama-3.1-70b-versatile", "Llama 3.1 70B"),
    // OpenAI
    model("openai", "gpt-4o", "gpt-4o"),
    model("openai", "gpt-4o-mini", "gpt-4o mini"),
    // Google
    model("google", "gemini-1.5-flash", "Gemini 1.5 Flash"),
    model("google", "gemini-1.5-pro", "Gemini 1.5 Pro"),
];

pub fn default_llm_model() -> &'static LlmModel {
    &LLM_MODELS[0]
}

/// Looks a model up by id, regardless of provider.
pub fn llm_model(id: &str) -> Option<&'static LlmModel> {
    LLM_MODELS.iter().find(|m| m.id == id)
}

pub fn llm_models_for(provider: &str) -> impl Iterator<Item = &'static LlmModel> + '_ {
    LLM_MODELS.iter().filter(move |m| m.provider == provider)
}

/// Distinct provider ids, in catalog order.
pub fn llm_providers() -> Vec<&'static str> {
    let mut providers: Vec<&'static str> = Vec::new();
    for m in LLM_MODELS {
        if !providers.contains(&m.provider) {
            providers.push(m.provider);
        }
    }
    providers
}

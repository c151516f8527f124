//! Process configuration read once from the environment.

use anyhow::{Context, Result, bail};

use torque_llm::ProviderDescriptor;
use torque_llm::provider::{DEFAULT_GEMINI_MODEL, DEFAULT_GROQ_MODEL, DEFAULT_OPENAI_MODEL};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 5000;

/// Immutable startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderDescriptor,
    pub port: u16,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let provider_name = get("CHAT_PROVIDER").unwrap_or_else(|| "gemini".into());
        let (key_var, default_model) = match provider_name.as_str() {
            "gemini" => ("GEMINI_API_KEY", DEFAULT_GEMINI_MODEL),
            "groq" | "groq-full" => ("GROQ_API_KEY", DEFAULT_GROQ_MODEL),
            "openai" => ("OPENAI_API_KEY", DEFAULT_OPENAI_MODEL),
            other => bail!("unknown CHAT_PROVIDER {other:?} (expected gemini, groq, groq-full or openai)"),
        };

        let Some(api_key) = get(key_var) else {
            bail!("{key_var} must be set for provider {provider_name}");
        };
        let model = get("CHAT_MODEL").unwrap_or_else(|| default_model.to_owned());

        let mut provider = match provider_name.as_str() {
            "gemini" => ProviderDescriptor::gemini(api_key, model),
            "groq" => ProviderDescriptor::groq(api_key, model),
            "groq-full" => ProviderDescriptor::groq_full(api_key, model),
            _ => ProviderDescriptor::openai(api_key, model),
        };

        if let Some(raw) = get("CHAT_MAX_TOKENS") {
            let max_tokens = raw
                .parse::<u32>()
                .with_context(|| format!("CHAT_MAX_TOKENS is not a positive integer: {raw}"))?;
            provider = provider.with_max_tokens(max_tokens);
        }

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { provider, port })
    }
}

use std::env;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_EXPLAIN_MODEL: &str = "llama3-8b-8192";

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the completion API. Absence is not fatal at startup;
    /// completion calls fail until it is provided.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Model used for `/explain`; `/generate_code` takes the model from the request.
    pub explain_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
            base_url: env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            explain_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| DEFAULT_EXPLAIN_MODEL.to_string()),
        }
    }
}

/// Configuration for one suggestion-generation backend.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Model identifier string (e.g. `"llama3"`, `"qwen3:14b"`).
    pub model: String,

    /// Ollama endpoint, e.g. `"http://localhost:11434"`.
    pub endpoint: String,

    /// Request timeout in seconds. Inference latency varies far more than
    /// ordinary API traffic, so the default is a generous 60 s.
    pub timeout_secs: Option<u64>,
}

use clap::ValueEnum;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum EmbedMode {
    /// OpenAI-compatible embedding service (requires an API key)
    Api,
    /// Deterministic offline embeddings (testing / dry runs)
    Stub,
}

impl EmbedMode {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            EmbedMode::Api => "api",
            EmbedMode::Stub => "stub",
        }
    }
}

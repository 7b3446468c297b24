use crate::error::{Result, VectorStoreError};
use crate::throttle::RequestGate;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The embedding oracle seam.
///
/// The indexer and search engine are generic over this trait so the real
/// HTTP-backed service can be swapped for the deterministic stub in tests
/// and offline runs. Implementations own their own rate limiting.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one text into a fixed-length vector.
    ///
    /// The length is constant for a given provider instance; callers rely on
    /// that to keep one index at a single dimensionality.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Configuration for the OpenAI-compatible embedding endpoint
#[derive(Debug, Clone)]
pub struct OpenAiEmbedderConfig {
    /// API base, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Sustained request rate the gate enforces
    pub requests_per_sec: f64,
}

impl Default for OpenAiEmbedderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "text-embedding-3-small".to_string(),
            requests_per_sec: 10.0,
        }
    }
}

/// HTTP client for an OpenAI-compatible `/embeddings` endpoint.
///
/// Failures are surfaced, never retried: the caller decides whether a failed
/// embedding aborts an index build or a search.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    config: OpenAiEmbedderConfig,
    gate: RequestGate,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    #[must_use]
    pub fn new(config: OpenAiEmbedderConfig) -> Self {
        let gate = RequestGate::new(1, config.requests_per_sec);
        Self {
            client: reqwest::Client::new(),
            config,
            gate,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/embeddings", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.gate.acquire().await;

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&EmbeddingRequest {
                model: &self.config.model,
                input: text,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(VectorStoreError::EmbeddingService {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: EmbeddingResponse = serde_json::from_str(&body)
            .map_err(|err| VectorStoreError::MalformedResponse(err.to_string()))?;

        let row = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| VectorStoreError::MalformedResponse("empty data array".to_string()))?;
        if row.embedding.is_empty() {
            return Err(VectorStoreError::MalformedResponse(
                "empty embedding vector".to_string(),
            ));
        }

        Ok(row.embedding)
    }
}

/// Deterministic offline embedder.
///
/// Hashes the input into a unit vector of the configured dimension;
/// identical text always maps to an identical vector. Used by tests and by
/// the CLI's stub embed mode.
pub struct StubEmbedder {
    dimension: usize,
}

impl StubEmbedder {
    pub const DEFAULT_DIMENSION: usize = 64;

    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(stub_embed(text, self.dimension))
    }
}

fn stub_embed(text: &str, dimension: usize) -> Vec<f32> {
    let mut state =
        fnv1a_64(text.as_bytes()) ^ (dimension as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut vec = Vec::with_capacity(dimension);
    for _ in 0..dimension {
        let bits = splitmix64(&mut state);
        let high = (bits >> 32) as u32;
        let mantissa = high >> 9;
        let unit = f32::from_bits(0x3f80_0000 | mantissa) - 1.0;
        vec.push(unit.mul_add(2.0, -1.0));
    }
    normalize(&mut vec);
    vec
}

fn normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

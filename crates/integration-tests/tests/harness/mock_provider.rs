//! Mock speech-synthesis backend server for integration tests
//!
//! Implements the minimal `OpenAI` speech endpoint and returns canned audio

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Canned audio returned unless echoing is enabled
pub const DEFAULT_AUDIO: &[u8] = b"mock-audio-bytes";

/// Mock speech backend that returns predictable audio
pub struct MockSpeech {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSpeechState>,
}

struct MockSpeechState {
    speech_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Pause before answering each request
    delay: Duration,
    /// When set, the audio bytes echo the request input
    echo_input: bool,
    /// Bodies of received requests, in arrival order
    captured: Mutex<Vec<SpeechRequest>>,
}

/// Request body of the speech endpoint, as the worker sends it
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub response_format: String,
}

impl MockSpeech {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, Duration::ZERO, false).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, Duration::ZERO, false).await
    }

    /// Start a mock server that pauses before answering each request
    pub async fn start_delayed(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(0, delay, false).await
    }

    /// Start a mock server whose audio bytes echo the request input
    pub async fn start_echoing() -> anyhow::Result<Self> {
        Self::start_inner(0, Duration::ZERO, true).await
    }

    async fn start_inner(fail_count: u32, delay: Duration, echo_input: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockSpeechState {
            speech_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            delay,
            echo_input,
            captured: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a synthesis backend
    ///
    /// Includes `/v1` since the provider appends `/audio/speech`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of speech requests received
    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    /// Bodies of all received speech requests, in arrival order
    pub fn captured(&self) -> Vec<SpeechRequest> {
        self.state.captured.lock().unwrap().clone()
    }
}

impl Drop for MockSpeech {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(State(state): State<Arc<MockSpeechState>>, Json(req): Json<SpeechRequest>) -> impl IntoResponse {
    state.speech_count.fetch_add(1, Ordering::Relaxed);
    state.captured.lock().unwrap().push(req.clone());

    // If fail_count > 0, decrement and return 500
    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {
                    "message": "mock server intentional failure",
                    "type": "server_error"
                }
            })),
        )
            .into_response();
    }

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let audio = if state.echo_input {
        req.input.into_bytes()
    } else {
        DEFAULT_AUDIO.to_vec()
    };

    ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response()
}

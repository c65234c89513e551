//! # Classroom SDK
//!
//! A Rust client for the classroom backend: class summaries built from
//! lecture recordings, and error-question analysis with AI training sets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: ID newtypes, the backend response envelope, domain types
//! 2. **HTTP**: `ClassroomHttp`, the shared transport (timeouts, auth header,
//!    status mapping, optional `GET` retries)
//! 3. **High-Level Client**: `ClassroomClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use classroom_sdk::prelude::*;
//!
//! let client = ClassroomClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let audio = AudioFile::from_path("week3.mp3").await?;
//! let stored = client
//!     .class_summaries()
//!     .upload_audio(audio, CourseId::new(3))
//!     .await?
//!     .into_data()?;
//!
//! let stats = client.error_questions().statistics(StudentId::new(1001)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, response envelope and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): entities, request bodies, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport with per-request timeouts and retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ClassroomClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + envelope
    pub use crate::shared::{
        ApiResponse, CourseId, EmptyResponse, QuestionId, StudentId, SummaryId, TeacherId,
        TrainingId,
    };

    // Domain types: class summary
    pub use crate::domain::class_summary::{
        AudioFile, ClassSummary, CreateClassSummaryRequest, SummaryStatistics, SummaryStatus,
    };

    // Domain types: error question
    pub use crate::domain::error_question::{
        AnswerResult, ComprehensiveTrainingRequest, ErrorDistribution, ErrorQuestionAnalysis,
        ErrorStatistics, EvaluateTrainingRequest, KnowledgePointRequest, SimilarQuestionsRequest,
        TrainingEvaluation, TrainingSession, TrainingType,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

    // HTTP client + sub-clients
    pub use crate::client::{
        ClassSummariesClient, ClassroomClient, ClassroomClientBuilder, ErrorQuestionsClient,
    };
    pub use crate::http::{RequestOptions, RetryConfig, RetryPolicy};
}

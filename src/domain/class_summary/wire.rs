//! Request bodies for the class summary endpoints.

use crate::shared::{CourseId, SummaryId, TeacherId};
use serde::{Deserialize, Serialize};

/// Body for `POST /api/class-summary/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassSummaryRequest {
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courseware_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl CreateClassSummaryRequest {
    pub fn new(course_id: CourseId, teacher_id: TeacherId, title: impl Into<String>) -> Self {
        Self {
            course_id,
            teacher_id,
            title: title.into(),
            description: None,
            courseware_file_path: None,
            keywords: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_courseware_file_path(mut self, path: impl Into<String>) -> Self {
        self.courseware_file_path = Some(path.into());
        self
    }

    /// Comma-separated keywords, stored verbatim by the backend.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }
}

/// Body for `POST /api/class-summary/process-audio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessAudioRequest {
    pub summary_id: SummaryId,
    pub audio_file_path: String,
}

/// Body for `POST /api/class-summary/generate-summary`.
///
/// `courseware_content` is always sent; callers without courseware send `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryRequest {
    pub summary_id: SummaryId,
    pub transcript_text: String,
    #[serde(default)]
    pub courseware_content: String,
}

/// Body for `PUT /api/class-summary/update-content/{summaryId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFinalContentRequest {
    pub final_content: String,
}

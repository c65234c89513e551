//! Class summary domain: lecture recordings turned into published notes.
//!
//! A summary starts as a `DRAFT` record, gains a transcript from the uploaded
//! recording, an AI-generated summary, a teacher-edited final document, and
//! finally becomes `PUBLISHED` for students.

pub mod audio;
pub mod client;
pub mod wire;

use crate::shared::serde_util::local_datetime;
use crate::shared::{CourseId, SummaryId, TeacherId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use audio::AudioFile;
pub use wire::{
    CreateClassSummaryRequest, GenerateSummaryRequest, ProcessAudioRequest,
    UpdateFinalContentRequest,
};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Publication status of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SummaryStatus {
    Draft,
    Published,
    /// Any status this SDK does not know about, kept verbatim.
    Other(String),
}

impl SummaryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SummaryStatus::Draft => "DRAFT",
            SummaryStatus::Published => "PUBLISHED",
            SummaryStatus::Other(s) => s,
        }
    }
}

impl From<&str> for SummaryStatus {
    fn from(s: &str) -> Self {
        match s {
            "DRAFT" => SummaryStatus::Draft,
            "PUBLISHED" => SummaryStatus::Published,
            other => SummaryStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SummaryStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SummaryStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SummaryStatus::from(s.as_str()))
    }
}

// ─── ClassSummary ────────────────────────────────────────────────────────────

/// A class summary record as stored by the backend.
///
/// Every field is optional: list endpoints may omit heavy columns, and
/// fields this SDK does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    #[serde(default)]
    pub id: Option<SummaryId>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub audio_file_path: Option<String>,
    #[serde(default)]
    pub transcript_text: Option<String>,
    #[serde(default)]
    pub summary_content: Option<String>,
    #[serde(default)]
    pub final_content: Option<String>,
    #[serde(default)]
    pub courseware_file_path: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub status: Option<SummaryStatus>,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default, with = "local_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "local_datetime")]
    pub update_time: Option<NaiveDateTime>,
    #[serde(default, with = "local_datetime")]
    pub publish_time: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClassSummary {
    pub fn is_published(&self) -> bool {
        self.status == Some(SummaryStatus::Published)
    }

    /// The text students should read: the edited document when present,
    /// otherwise the AI summary.
    pub fn display_content(&self) -> Option<&str> {
        self.final_content
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.summary_content.as_deref())
    }
}

// ─── Statistics ──────────────────────────────────────────────────────────────

/// Per-teacher counters from `GET /statistics/{teacherId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub published_count: u64,
    #[serde(default)]
    pub draft_count: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserialize_full_record() {
        let json = r#"{
            "id": 12,
            "courseId": 3,
            "teacherId": 7,
            "title": "第三章 进程管理",
            "audioFilePath": "uploads/audio/course3/a.mp3",
            "summaryContent": "AI 总结",
            "finalContent": "",
            "keywords": "进程,线程",
            "status": "PUBLISHED",
            "viewCount": 5,
            "createTime": "2024-03-01T09:30:00",
            "publishTime": "2024-03-02 10:00:00",
            "chapter": "3"
        }"#;
        let summary: ClassSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, Some(SummaryId::new(12)));
        assert_eq!(summary.teacher_id, Some(TeacherId::new(7)));
        assert!(summary.is_published());
        assert_eq!(summary.view_count, Some(5));
        assert!(summary.publish_time.is_some());
        assert_eq!(summary.display_content(), Some("AI 总结"));
        assert_eq!(summary.extra.get("chapter"), Some(&serde_json::json!("3")));
    }

    #[test]
    fn test_summary_tolerates_sparse_record() {
        let summary: ClassSummary = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(summary.id, Some(SummaryId::new(1)));
        assert!(summary.status.is_none());
        assert!(!summary.is_published());
        assert!(summary.display_content().is_none());
    }

    #[test]
    fn test_status_passthrough() {
        let status: SummaryStatus = serde_json::from_str(r#""ARCHIVED""#).unwrap();
        assert_eq!(status, SummaryStatus::Other("ARCHIVED".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""ARCHIVED""#);
        assert_eq!(SummaryStatus::from("DRAFT"), SummaryStatus::Draft);
    }

    #[test]
    fn test_statistics_deserialize() {
        let json = r#"{"totalCount": 4, "publishedCount": 3, "draftCount": 1, "totalViews": 120}"#;
        let stats: SummaryStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.published_count + stats.draft_count, 4);
        assert_eq!(stats.total_views, 120);
    }
}

//! Class summaries sub-client: recording upload, transcription, AI summary,
//! publishing and queries.

use crate::client::ClassroomClient;
use crate::domain::class_summary::{
    AudioFile, ClassSummary, CreateClassSummaryRequest, GenerateSummaryRequest,
    ProcessAudioRequest, SummaryStatistics, UpdateFinalContentRequest,
};
use crate::error::SdkError;
use crate::http::RequestOptions;
use crate::shared::{ApiResponse, CourseId, EmptyResponse, SummaryId, TeacherId};
use std::time::Duration;

/// Base path for every class summary endpoint.
pub const BASE_PATH: &str = "/api/class-summary";

/// Large recordings need a long transfer window.
pub const UPLOAD_AUDIO_TIMEOUT: Duration = Duration::from_secs(300);

/// Speech recognition runs synchronously on the backend.
pub const PROCESS_AUDIO_TIMEOUT: Duration = Duration::from_secs(180);

/// AI summary generation runs synchronously on the backend.
pub const GENERATE_SUMMARY_TIMEOUT: Duration = Duration::from_secs(120);

/// Sub-client for class summary operations.
pub struct ClassSummaries<'a> {
    pub(crate) client: &'a ClassroomClient,
}

impl<'a> ClassSummaries<'a> {
    /// Create a draft summary record.
    pub async fn create(
        &self,
        request: &CreateClassSummaryRequest,
    ) -> Result<ApiResponse<ClassSummary>, SdkError> {
        let path = format!("{}/create", BASE_PATH);
        Ok(self
            .client
            .http
            .post(&path, Some(request), RequestOptions::new())
            .await?)
    }

    /// Upload a lecture recording. The response data is the stored file path,
    /// which feeds [`ClassSummaries::process_audio`].
    pub async fn upload_audio(
        &self,
        audio: AudioFile,
        course_id: CourseId,
    ) -> Result<ApiResponse<String>, SdkError> {
        let path = format!("{}/upload-audio", BASE_PATH);
        tracing::debug!(
            course_id = course_id.get(),
            file_name = %audio.file_name,
            bytes = audio.len(),
            "Uploading lecture recording"
        );
        let form = audio.into_form(course_id)?;
        Ok(self
            .client
            .http
            .post_multipart(&path, form, RequestOptions::new().timeout(UPLOAD_AUDIO_TIMEOUT))
            .await?)
    }

    /// Transcribe a previously uploaded recording. The response data is the transcript.
    pub async fn process_audio(
        &self,
        summary_id: SummaryId,
        audio_file_path: &str,
    ) -> Result<ApiResponse<String>, SdkError> {
        let path = format!("{}/process-audio", BASE_PATH);
        let body = ProcessAudioRequest {
            summary_id,
            audio_file_path: audio_file_path.to_string(),
        };
        Ok(self
            .client
            .http
            .post(
                &path,
                Some(&body),
                RequestOptions::new().timeout(PROCESS_AUDIO_TIMEOUT),
            )
            .await?)
    }

    /// Generate the AI summary from a transcript and optional courseware text.
    /// The response data is the generated summary.
    pub async fn generate_summary(
        &self,
        summary_id: SummaryId,
        transcript_text: &str,
        courseware_content: Option<&str>,
    ) -> Result<ApiResponse<String>, SdkError> {
        let path = format!("{}/generate-summary", BASE_PATH);
        let body = GenerateSummaryRequest {
            summary_id,
            transcript_text: transcript_text.to_string(),
            courseware_content: courseware_content.unwrap_or_default().to_string(),
        };
        Ok(self
            .client
            .http
            .post(
                &path,
                Some(&body),
                RequestOptions::new().timeout(GENERATE_SUMMARY_TIMEOUT),
            )
            .await?)
    }

    /// Replace the teacher-edited final document.
    pub async fn update_final_content(
        &self,
        summary_id: SummaryId,
        final_content: &str,
    ) -> Result<EmptyResponse, SdkError> {
        let path = format!("{}/update-content/{}", BASE_PATH, summary_id);
        let body = UpdateFinalContentRequest {
            final_content: final_content.to_string(),
        };
        Ok(self
            .client
            .http
            .put(&path, Some(&body), RequestOptions::new())
            .await?)
    }

    pub async fn publish(&self, summary_id: SummaryId) -> Result<EmptyResponse, SdkError> {
        let path = format!("{}/publish/{}", BASE_PATH, summary_id);
        Ok(self
            .client
            .http
            .put(&path, None::<&()>, RequestOptions::new())
            .await?)
    }

    /// All summaries owned by a teacher, drafts included.
    pub async fn teacher_summaries(
        &self,
        teacher_id: TeacherId,
    ) -> Result<ApiResponse<Vec<ClassSummary>>, SdkError> {
        let path = format!("{}/teacher/{}", BASE_PATH, teacher_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    /// Published summaries for one course.
    pub async fn published_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<ApiResponse<Vec<ClassSummary>>, SdkError> {
        let path = format!("{}/course/{}", BASE_PATH, course_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    /// Every published summary (student view).
    pub async fn all_published(&self) -> Result<ApiResponse<Vec<ClassSummary>>, SdkError> {
        let path = format!("{}/published", BASE_PATH);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    /// Fetch one summary. The backend counts this as a view.
    pub async fn detail(
        &self,
        summary_id: SummaryId,
    ) -> Result<ApiResponse<ClassSummary>, SdkError> {
        let path = format!("{}/detail/{}", BASE_PATH, summary_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    pub async fn search_published(
        &self,
        keyword: &str,
    ) -> Result<ApiResponse<Vec<ClassSummary>>, SdkError> {
        let path = format!("{}/search", BASE_PATH);
        Ok(self
            .client
            .http
            .get(&path, RequestOptions::new().query("keyword", keyword))
            .await?)
    }

    /// Delete a summary. The backend refuses unless `teacher_id` owns it.
    pub async fn delete(
        &self,
        summary_id: SummaryId,
        teacher_id: TeacherId,
    ) -> Result<EmptyResponse, SdkError> {
        let path = format!("{}/delete/{}", BASE_PATH, summary_id);
        Ok(self
            .client
            .http
            .delete(&path, RequestOptions::new().query("teacherId", teacher_id))
            .await?)
    }

    pub async fn statistics(
        &self,
        teacher_id: TeacherId,
    ) -> Result<ApiResponse<SummaryStatistics>, SdkError> {
        let path = format!("{}/statistics/{}", BASE_PATH, teacher_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }
}

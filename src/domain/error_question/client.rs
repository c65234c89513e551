//! Error questions sub-client: analysis, training generation, evaluation.

use crate::client::ClassroomClient;
use crate::domain::error_question::{
    ComprehensiveTrainingRequest, ErrorDistribution, ErrorQuestionAnalysis, ErrorStatistics,
    EvaluateTrainingRequest, KnowledgePointRequest, SimilarQuestionsRequest, TrainingEvaluation,
    TrainingSession,
};
use crate::error::SdkError;
use crate::http::RequestOptions;
use crate::shared::{ApiResponse, QuestionId, StudentId};

/// Base path for every error question endpoint.
pub const BASE_PATH: &str = "/api/error-questions";

pub struct ErrorQuestions<'a> {
    pub(crate) client: &'a ClassroomClient,
}

impl<'a> ErrorQuestions<'a> {
    /// Historical analysis of every question the student answered wrong.
    pub async fn analysis(
        &self,
        student_id: StudentId,
    ) -> Result<ApiResponse<Vec<ErrorQuestionAnalysis>>, SdkError> {
        let path = format!("{}/analysis/{}", BASE_PATH, student_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    /// Analysis of one wrong question. `data` is absent when the student has
    /// no error record for it.
    pub async fn analyze_question(
        &self,
        student_id: StudentId,
        question_id: QuestionId,
    ) -> Result<ApiResponse<ErrorQuestionAnalysis>, SdkError> {
        let path = format!("{}/analysis/{}/{}", BASE_PATH, student_id, question_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    pub async fn generate_similar(
        &self,
        request: &SimilarQuestionsRequest,
    ) -> Result<ApiResponse<TrainingSession>, SdkError> {
        self.post_training("similar", request).await
    }

    pub async fn generate_for_knowledge_point(
        &self,
        request: &KnowledgePointRequest,
    ) -> Result<ApiResponse<TrainingSession>, SdkError> {
        self.post_training("knowledge-point", request).await
    }

    pub async fn generate_comprehensive(
        &self,
        request: &ComprehensiveTrainingRequest,
    ) -> Result<ApiResponse<TrainingSession>, SdkError> {
        self.post_training("comprehensive", request).await
    }

    pub async fn statistics(
        &self,
        student_id: StudentId,
    ) -> Result<ApiResponse<ErrorStatistics>, SdkError> {
        let path = format!("{}/statistics/{}", BASE_PATH, student_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    pub async fn distribution(
        &self,
        student_id: StudentId,
    ) -> Result<ApiResponse<ErrorDistribution>, SdkError> {
        let path = format!("{}/distribution/{}", BASE_PATH, student_id);
        Ok(self.client.http.get(&path, RequestOptions::new()).await?)
    }

    /// Grade a completed training set.
    pub async fn evaluate_training(
        &self,
        request: &EvaluateTrainingRequest,
    ) -> Result<ApiResponse<TrainingEvaluation>, SdkError> {
        self.post_training("evaluate", request).await
    }

    async fn post_training<T, B>(&self, action: &str, body: &B) -> Result<ApiResponse<T>, SdkError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let path = format!("{}/training/{}", BASE_PATH, action);
        Ok(self
            .client
            .http
            .post(&path, Some(body), RequestOptions::new())
            .await?)
    }
}

//! Request bodies for the error question training endpoints.

use crate::shared::{QuestionId, StudentId, TrainingId};
use serde::{Deserialize, Serialize};

/// Body for `POST /api/error-questions/training/similar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarQuestionsRequest {
    pub student_id: StudentId,
    pub original_question_id: QuestionId,
    pub question_count: u32,
}

impl SimilarQuestionsRequest {
    pub fn new(student_id: StudentId, original_question_id: QuestionId, question_count: u32) -> Self {
        Self {
            student_id,
            original_question_id,
            question_count,
        }
    }
}

/// Body for `POST /api/error-questions/training/knowledge-point`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePointRequest {
    pub student_id: StudentId,
    pub knowledge_point: String,
    pub question_count: u32,
}

impl KnowledgePointRequest {
    pub fn new(student_id: StudentId, knowledge_point: impl Into<String>, question_count: u32) -> Self {
        Self {
            student_id,
            knowledge_point: knowledge_point.into(),
            question_count,
        }
    }
}

/// Body for `POST /api/error-questions/training/comprehensive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveTrainingRequest {
    pub student_id: StudentId,
    pub question_count: u32,
}

impl ComprehensiveTrainingRequest {
    pub fn new(student_id: StudentId, question_count: u32) -> Self {
        Self {
            student_id,
            question_count,
        }
    }
}

/// Body for `POST /api/error-questions/training/evaluate`.
///
/// `answers` are positional: the n-th entry answers the n-th training question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateTrainingRequest {
    pub student_id: StudentId,
    pub training_id: TrainingId,
    pub answers: Vec<String>,
}

impl EvaluateTrainingRequest {
    pub fn new<I, S>(student_id: StudentId, training_id: TrainingId, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            student_id,
            training_id,
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_bodies_camel_case() {
        let similar = SimilarQuestionsRequest::new(StudentId::new(1), QuestionId::new(31), 5);
        assert_eq!(
            serde_json::to_value(&similar).unwrap(),
            json!({"studentId": 1, "originalQuestionId": 31, "questionCount": 5})
        );

        let kp = KnowledgePointRequest::new(StudentId::new(1), "进程调度", 3);
        assert_eq!(
            serde_json::to_value(&kp).unwrap(),
            json!({"studentId": 1, "knowledgePoint": "进程调度", "questionCount": 3})
        );

        let comp = ComprehensiveTrainingRequest::new(StudentId::new(1), 10);
        assert_eq!(
            serde_json::to_value(&comp).unwrap(),
            json!({"studentId": 1, "questionCount": 10})
        );
    }

    #[test]
    fn test_evaluate_request_collects_answers() {
        let request = EvaluateTrainingRequest::new(StudentId::new(1), TrainingId::new(8), ["A", "", "C"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"studentId": 1, "trainingId": 8, "answers": ["A", "", "C"]})
        );
    }
}

//! Error question domain: analysis of a student's wrong answers and
//! AI-generated training sets targeting them.

pub mod client;
pub mod wire;

use crate::shared::serde_util::local_datetime;
use crate::shared::{QuestionId, StudentId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

pub use wire::{
    ComprehensiveTrainingRequest, EvaluateTrainingRequest, KnowledgePointRequest,
    SimilarQuestionsRequest,
};

// ─── Analysis ────────────────────────────────────────────────────────────────

/// Analysis of one question a student keeps getting wrong.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorQuestionAnalysis {
    #[serde(default)]
    pub question_id: Option<QuestionId>,
    #[serde(default)]
    pub question_content: Option<String>,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub knowledge_point: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub student_answer: Option<String>,
    #[serde(default)]
    pub error_count: Option<u32>,
    /// Percentage, 0–100.
    #[serde(default)]
    pub error_rate: Option<f64>,
    #[serde(default, with = "local_datetime")]
    pub last_error_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_reason: Option<String>,
    #[serde(default)]
    pub improvement_suggestion: Option<String>,
    #[serde(default)]
    pub related_concepts: Vec<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── Training ────────────────────────────────────────────────────────────────

/// How a training set was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrainingType {
    /// Variations of one original wrong question.
    Similar,
    /// Questions drilling a single knowledge point.
    KnowledgePoint,
    /// A mix across the student's weakest areas.
    Comprehensive,
    Other(String),
}

impl TrainingType {
    pub fn as_str(&self) -> &str {
        match self {
            TrainingType::Similar => "similar",
            TrainingType::KnowledgePoint => "knowledge_point",
            TrainingType::Comprehensive => "comprehensive",
            TrainingType::Other(s) => s,
        }
    }
}

impl From<&str> for TrainingType {
    fn from(s: &str) -> Self {
        match s {
            "similar" => TrainingType::Similar,
            "knowledge_point" => TrainingType::KnowledgePoint,
            "comprehensive" => TrainingType::Comprehensive,
            other => TrainingType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for TrainingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TrainingType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TrainingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TrainingType::from(s.as_str()))
    }
}

/// A generated training set.
///
/// Questions are AI output with no fixed schema (typically `title`, `type`,
/// `options`, `answer`, `explanation`), so they stay as raw JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub training_type: Option<TrainingType>,
    #[serde(default)]
    pub original_question_id: Option<QuestionId>,
    #[serde(default)]
    pub knowledge_point: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub question_count: Option<u32>,
    #[serde(default)]
    pub questions: Vec<serde_json::Value>,
    #[serde(default)]
    pub analysis_report: Option<String>,
    #[serde(default)]
    pub target_error_types: Vec<String>,
    #[serde(default)]
    pub expected_improvement: Option<f64>,
    #[serde(default, with = "local_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── Statistics / distribution ───────────────────────────────────────────────

/// Aggregate counts from `GET /statistics/{studentId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorStatistics {
    #[serde(default)]
    pub total_error_questions: u64,
    #[serde(default)]
    pub average_error_rate: f64,
    #[serde(default)]
    pub knowledge_point_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub question_type_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub error_type_distribution: HashMap<String, u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Breakdown from `GET /distribution/{studentId}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDistribution {
    #[serde(default)]
    pub difficulty_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub topic_distribution: HashMap<String, u64>,
    /// Last 30 days, keyed by day.
    #[serde(default)]
    pub recent_time_distribution: HashMap<String, u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── Evaluation ──────────────────────────────────────────────────────────────

/// Result of grading a completed training set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEvaluation {
    /// Percentage, 0–100.
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub detailed_results: Vec<AnswerResult>,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Grading of a single answer within a [`TrainingEvaluation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    /// 1-based.
    #[serde(default)]
    pub question_index: u32,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub error_type: Option<String>,
}

impl TrainingEvaluation {
    /// Answers graded wrong.
    pub fn mistakes(&self) -> impl Iterator<Item = &AnswerResult> {
        self.detailed_results.iter().filter(|r| !r.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_deserialize() {
        let json = r#"{
            "questionId": 31,
            "questionContent": "哪种结构遵循后进先出？",
            "questionType": "choice",
            "knowledgePoint": "栈",
            "difficulty": "easy",
            "correctAnswer": "A",
            "studentAnswer": "B",
            "errorCount": 2,
            "errorRate": 66.7,
            "lastErrorTime": "2024-05-06T08:00:00",
            "errorType": "选项混淆",
            "relatedConcepts": ["栈", "队列"],
            "topic": "数据结构与算法"
        }"#;
        let analysis: ErrorQuestionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.question_id, Some(QuestionId::new(31)));
        assert_eq!(analysis.error_count, Some(2));
        assert_eq!(analysis.related_concepts, vec!["栈", "队列"]);
        assert!(analysis.last_error_time.is_some());
        assert!(analysis.extra.is_empty());
    }

    #[test]
    fn test_training_session_deserialize() {
        let json = r#"{
            "studentId": 1001,
            "trainingType": "knowledge_point",
            "knowledgePoint": "进程调度",
            "questionCount": 2,
            "questions": [
                {"title": "pwd 的作用？", "type": "choice", "options": ["A. pwd"], "answer": "A"},
                {"title": "栈的特点？", "type": "choice"}
            ],
            "targetErrorTypes": ["概念理解错误"],
            "expectedImprovement": 75.0,
            "createTime": [2024, 5, 6, 8, 0, 0, 123000000]
        }"#;
        let session: TrainingSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.training_type, Some(TrainingType::KnowledgePoint));
        assert_eq!(session.questions.len(), 2);
        assert_eq!(session.questions[0]["answer"], "A");
        assert_eq!(session.expected_improvement, Some(75.0));
        assert!(session.create_time.is_some());
    }

    #[test]
    fn test_training_type_round_trip_names() {
        for (name, ty) in [
            ("similar", TrainingType::Similar),
            ("knowledge_point", TrainingType::KnowledgePoint),
            ("comprehensive", TrainingType::Comprehensive),
        ] {
            assert_eq!(TrainingType::from(name), ty);
            assert_eq!(ty.as_str(), name);
        }
        assert_eq!(TrainingType::from("mock"), TrainingType::Other("mock".into()));
    }

    #[test]
    fn test_statistics_and_distribution() {
        let stats: ErrorStatistics = serde_json::from_str(
            r#"{"totalErrorQuestions": 3, "averageErrorRate": 40.5,
                "knowledgePointDistribution": {"栈": 2, "队列": 1},
                "errorTypeDistribution": {"选项混淆": 3}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_error_questions, 3);
        assert_eq!(stats.knowledge_point_distribution["栈"], 2);
        assert!(stats.question_type_distribution.is_empty());

        let dist: ErrorDistribution = serde_json::from_str(
            r#"{"difficultyDistribution": {"hard": 1}, "recentTimeDistribution": {"2024-05-06": 2}}"#,
        )
        .unwrap();
        assert_eq!(dist.difficulty_distribution["hard"], 1);
        assert_eq!(dist.recent_time_distribution["2024-05-06"], 2);
    }

    #[test]
    fn test_evaluation_mistakes() {
        let json = r#"{
            "accuracy": 50.0,
            "correctCount": 1,
            "totalQuestions": 2,
            "detailedResults": [
                {"questionIndex": 1, "userAnswer": "A", "correctAnswer": "A", "isCorrect": true, "errorType": null},
                {"questionIndex": 2, "userAnswer": "", "correctAnswer": "A", "isCorrect": false, "errorType": "未作答"}
            ],
            "improvementSuggestions": ["复习栈的定义"],
            "nextSteps": ["完成综合训练"]
        }"#;
        let eval: TrainingEvaluation = serde_json::from_str(json).unwrap();
        let mistakes: Vec<_> = eval.mistakes().collect();
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].question_index, 2);
        assert_eq!(mistakes[0].error_type.as_deref(), Some("未作答"));
        assert_eq!(eval.next_steps, vec!["完成综合训练"]);
    }
}

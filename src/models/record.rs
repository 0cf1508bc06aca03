//! 输出记录：科目、课时与批量统计

use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::question::ParsedQuestion;

/// 课时记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub order: u32,
    pub questions: Vec<ParsedQuestion>,
}

/// 科目记录，每个成功转换的文档对应一个
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub created_by: String,
    pub lessons: Vec<LessonRecord>,
}

impl SubjectRecord {
    /// 所有课时的题目总数
    pub fn question_count(&self) -> usize {
        self.lessons.iter().map(|l| l.questions.len()).sum()
    }
}

/// 一次批量转换的汇总（不随记录一起持久化）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSummary {
    pub documents_seen: usize,
    pub documents_converted: usize,
    pub total_questions: usize,
}

impl ConversionSummary {
    pub fn documents_failed(&self) -> usize {
        self.documents_seen - self.documents_converted
    }
}

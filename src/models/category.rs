//! 科目分类 - 按文档标识中的关键词归类

use serde::{Deserialize, Serialize};

/// 科目分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// 数量能力
    QuantitativeAptitude,
    /// 逻辑推理
    LogicalReasoning,
    /// 语言能力
    VerbalAbility,
    /// 常识
    GeneralKnowledge,
    /// 其他
    Other,
}

/// 关键词表，按优先级排列
const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::QuantitativeAptitude,
        &["quantitative", "math", "arithmetic"],
    ),
    (Category::LogicalReasoning, &["logical", "reasoning"]),
    (Category::VerbalAbility, &["verbal", "english", "language"]),
    (Category::GeneralKnowledge, &["general", "knowledge", "gk"]),
];

impl Category {
    /// 所有分类
    pub const ALL: [Category; 5] = [
        Category::QuantitativeAptitude,
        Category::LogicalReasoning,
        Category::VerbalAbility,
        Category::GeneralKnowledge,
        Category::Other,
    ];

    /// 获取标准标签
    pub fn tag(self) -> &'static str {
        match self {
            Category::QuantitativeAptitude => "quantitative-aptitude",
            Category::LogicalReasoning => "logical-reasoning",
            Category::VerbalAbility => "verbal-ability",
            Category::GeneralKnowledge => "general-knowledge",
            Category::Other => "other",
        }
    }

    /// 从标签解析分类（精确匹配）
    pub fn from_tag(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == s)
    }

    /// 根据标识（通常是文件名）中的关键词判断分类
    ///
    /// 不区分大小写，按优先级取第一个命中的分类，都不命中时为 `Other`
    pub fn classify(identifier: &str) -> Self {
        let lower = identifier.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

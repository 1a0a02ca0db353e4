use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssessmentType {
    ClassTest,     // CT
    LabQuiz,       // Lab Quiz
    Other(String), // 其他类型，不进入任何成绩表
}

impl AssessmentType {
    pub const CLASS_TEST: &'static str = "CT";
    pub const LAB_QUIZ: &'static str = "Lab Quiz";

    pub fn as_str(&self) -> &str {
        match self {
            AssessmentType::ClassTest => Self::CLASS_TEST,
            AssessmentType::LabQuiz => Self::LAB_QUIZ,
            AssessmentType::Other(s) => s,
        }
    }
}

impl Serialize for AssessmentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssessmentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            AssessmentType::CLASS_TEST => AssessmentType::ClassTest,
            AssessmentType::LAB_QUIZ => AssessmentType::LabQuiz,
            _ => AssessmentType::Other(s),
        })
    }
}

impl std::fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssessmentType {
    type Err = String;

    /// 命令行输入更宽松：ct / lab-quiz / "Lab Quiz" 均可
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "ct" | "class test" => Ok(AssessmentType::ClassTest),
            "lab quiz" | "labquiz" => Ok(AssessmentType::LabQuiz),
            _ => Err(format!("Invalid assessment type: {s}. Supported: CT, Lab Quiz")),
        }
    }
}

// 成绩上传的单行记录
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct MarkRecord {
    pub student_id: String,
    pub student_name: String,
    pub mark: f64,
}

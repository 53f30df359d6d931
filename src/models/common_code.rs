//! Reference lookup codes ("common codes") backing form dropdowns.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonCode {
    pub id: String,
    pub category: CodeCategory,
    pub value: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodeCategory {
    Degree,
    GraduationStatus,
    Position,
}

impl CodeCategory {
    pub const ALL: [Self; 3] = [Self::Degree, Self::GraduationStatus, Self::Position];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Degree => "학위",
            Self::GraduationStatus => "졸업상태",
            Self::Position => "직급",
        }
    }
}

impl std::fmt::Display for CodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            Self::Degree => "degree",
            Self::GraduationStatus => "graduationStatus",
            Self::Position => "position",
        };
        f.write_str(key)
    }
}

impl std::str::FromStr for CodeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree" => Ok(Self::Degree),
            "graduationStatus" => Ok(Self::GraduationStatus),
            "position" => Ok(Self::Position),
            other => Err(format!("Unknown code category: {other}")),
        }
    }
}

impl CommonCode {
    #[must_use]
    pub fn new(category: CodeCategory, value: impl Into<String>, order: i32) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            value: value.into(),
            order,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// The built-in code set seeded when no stored collection exists
/// (or the stored one cannot be parsed).
#[must_use]
pub fn default_codes() -> Vec<CommonCode> {
    let degrees = ["고등학교 졸업", "전문학사", "학사", "석사", "박사"];
    let statuses = ["졸업", "재학", "휴학", "수료", "중퇴"];
    let positions = [
        "사원",
        "주임",
        "대리",
        "과장",
        "차장",
        "부장",
        "이사",
        "상무",
        "전무",
        "부사장",
        "사장",
        "연구원",
        "선임연구원",
        "수석연구원",
        "책임연구원",
    ];

    let mut codes = Vec::new();
    for (i, value) in degrees.iter().enumerate() {
        codes.push(CommonCode::new(CodeCategory::Degree, *value, i as i32 + 1));
    }
    for (i, value) in statuses.iter().enumerate() {
        codes.push(CommonCode::new(
            CodeCategory::GraduationStatus,
            *value,
            i as i32 + 1,
        ));
    }
    for (i, value) in positions.iter().enumerate() {
        codes.push(CommonCode::new(
            CodeCategory::Position,
            *value,
            i as i32 + 1,
        ));
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_covers_all_categories() {
        let codes = default_codes();
        assert_eq!(codes.len(), 25);

        let positions: Vec<_> = codes
            .iter()
            .filter(|c| c.category == CodeCategory::Position)
            .collect();
        assert_eq!(positions.len(), 15);
        assert_eq!(positions[0].value, "사원");
        assert_eq!(positions[0].order, 1);
        assert!(positions.iter().all(|c| c.is_active));
    }

    #[test]
    fn category_serializes_as_camel_case() {
        let json = serde_json::to_string(&CodeCategory::GraduationStatus).unwrap();
        assert_eq!(json, "\"graduationStatus\"");
        let parsed: CodeCategory = "graduationStatus".parse().unwrap();
        assert_eq!(parsed, CodeCategory::GraduationStatus);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Success,
    Warning,
    Info,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Success => "Success",
            RecommendationKind::Warning => "Warning",
            RecommendationKind::Info => "Info",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RecommendationKind::Success => "✓",
            RecommendationKind::Warning => "⚠",
            RecommendationKind::Info => "ℹ",
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
    pub source: String,
}

impl DataPoint {
    pub fn new(label: &str, value: impl std::fmt::Display, source: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            source: source.to_string(),
        }
    }
}

/// A single advisory entry attached to a yield prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_points: Vec<DataPoint>,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        kind: RecommendationKind,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            text: text.into(),
            data_points: Vec::new(),
        }
    }

    pub fn with_data_point(
        mut self,
        label: &str,
        value: impl std::fmt::Display,
        source: &str,
    ) -> Self {
        self.data_points.push(DataPoint::new(label, value, source));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_builder_pattern() {
        let rec = Recommendation::new(
            "irrigation",
            RecommendationKind::Warning,
            "Critical Irrigation Needed",
            "Install drip irrigation.",
        )
        .with_data_point("Rainfall", "450 mm", "Field input");

        assert_eq!(rec.id, "irrigation");
        assert_eq!(rec.kind, RecommendationKind::Warning);
        assert_eq!(rec.data_points.len(), 1);
        assert_eq!(rec.data_points[0].value, "450 mm");
    }

    #[test]
    fn kind_serializes_as_type_tag() {
        let rec = Recommendation::new("crop_care", RecommendationKind::Success, "t", "x");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "success");
        assert!(json.get("data_points").is_none());
    }
}

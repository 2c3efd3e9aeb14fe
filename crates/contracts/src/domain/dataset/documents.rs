//! Shapes of the JSON documents served from `data/{id}/` and the
//! composition of their rendered markdown.

use serde::Deserialize;
use serde_json::Value;

/// `data.json` — headline facts for the main information summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub key_references: Option<Value>,
    #[serde(default)]
    pub n_base: Option<Value>,
    #[serde(default)]
    pub n_patients: Option<Value>,
}

impl MainData {
    /// Markdown summary in the fixed report layout. The dataset id stands
    /// in for a missing title.
    pub fn summary(&self, dataset_id: &str) -> String {
        let title = match &self.title {
            Some(t) if !t.is_empty() => t.clone(),
            _ => dataset_id.to_string(),
        };
        let question = self.question.clone().unwrap_or_default();
        let included = match &self.key_references {
            Some(Value::Array(items)) => items.len().to_string(),
            Some(Value::Object(map)) => map.len().to_string(),
            _ => "N/A".to_string(),
        };
        let screened = scalar_or_na(&self.n_base);
        let sample = scalar_or_na(&self.n_patients);
        format!(
            "# Research Main Information\n\n\
             ## Research Title\n{title}\n\n\
             ## Research Objective\n{question}\n\n\
             ## Research Methodology\n\
             No. of included studies: {included}\n\n\
             No. of screened studies: {screened}\n\n\
             Sample size: {sample}"
        )
    }
}

fn scalar_or_na(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "N/A".to_string(),
    }
}

/// `char.json` and `fr.json` — a single pre-rendered markdown table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableDocument {
    #[serde(default)]
    pub table: Option<String>,
}

/// `qa.json` — framework name, table, and free-form details, each optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualityAssessment {
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl QualityAssessment {
    /// Composed markdown block, or `None` when every section is absent.
    pub fn compose(&self) -> Option<String> {
        let mut out = String::new();
        if let Some(framework) = &self.framework {
            out.push_str(&format!("## {}\n\n", framework));
        }
        if let Some(table) = &self.table {
            out.push_str(table);
        }
        if let Some(details) = &self.details {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(details);
        }
        (!out.is_empty()).then_some(out)
    }
}

/// Extracts the display text from a `report.json` document. Accepted
/// shapes, most specific first: a raw string; an object with a string
/// `report`, `markdown`, or `content` field; an object with exactly one
/// key whose value is a string.
pub fn extract_report_text(doc: &Value) -> Option<String> {
    if let Value::String(s) = doc {
        return Some(s.clone());
    }
    let obj = doc.as_object()?;
    for key in ["report", "markdown", "content"] {
        if let Some(Value::String(s)) = obj.get(key) {
            return Some(s.clone());
        }
    }
    if obj.len() == 1 {
        if let Some(Value::String(s)) = obj.values().next() {
            return Some(s.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_renders_all_fields() {
        let doc: MainData = serde_json::from_value(json!({
            "title": "Aspirin after stroke",
            "question": "Does aspirin reduce recurrence?",
            "key_references": ["a", "b", "c"],
            "n_base": 120,
            "n_patients": 4021
        }))
        .unwrap();
        let summary = doc.summary("stroke01");
        assert!(summary.contains("## Research Title\nAspirin after stroke"));
        assert!(summary.contains("No. of included studies: 3"));
        assert!(summary.contains("No. of screened studies: 120"));
        assert!(summary.contains("Sample size: 4021"));
    }

    #[test]
    fn summary_falls_back_to_dataset_id_and_na() {
        let doc = MainData::default();
        let summary = doc.summary("stroke01");
        assert!(summary.contains("## Research Title\nstroke01"));
        assert!(summary.contains("No. of included studies: N/A"));
        assert!(summary.contains("No. of screened studies: N/A"));
        assert!(summary.contains("Sample size: N/A"));
    }

    #[test]
    fn summary_counts_object_references() {
        let doc: MainData =
            serde_json::from_value(json!({ "key_references": { "r1": 1, "r2": 2 } })).unwrap();
        assert!(doc.summary("x").contains("No. of included studies: 2"));
    }

    #[test]
    fn qa_composes_all_sections() {
        let doc = QualityAssessment {
            framework: Some("GRADE".into()),
            table: Some("| a |\n| - |\n| 1 |".into()),
            details: Some("Overall certainty: moderate.".into()),
        };
        let composed = doc.compose().unwrap();
        assert!(composed.starts_with("## GRADE\n\n"));
        assert!(composed.contains("| a |"));
        assert!(composed.ends_with("Overall certainty: moderate."));
    }

    #[test]
    fn qa_with_only_details_has_no_leading_separator() {
        let doc = QualityAssessment {
            framework: None,
            table: None,
            details: Some("Only details.".into()),
        };
        assert_eq!(doc.compose().as_deref(), Some("Only details."));
    }

    #[test]
    fn qa_empty_composes_to_none() {
        assert_eq!(QualityAssessment::default().compose(), None);
    }

    #[test]
    fn report_text_from_raw_string() {
        assert_eq!(
            extract_report_text(&json!("plain text")).as_deref(),
            Some("plain text")
        );
    }

    #[test]
    fn report_text_from_known_fields() {
        assert_eq!(
            extract_report_text(&json!({ "report": "a" })).as_deref(),
            Some("a")
        );
        assert_eq!(
            extract_report_text(&json!({ "markdown": "b", "extra": 1 })).as_deref(),
            Some("b")
        );
        assert_eq!(
            extract_report_text(&json!({ "content": "c" })).as_deref(),
            Some("c")
        );
    }

    #[test]
    fn report_text_from_single_string_key() {
        assert_eq!(
            extract_report_text(&json!({ "summary": "only one" })).as_deref(),
            Some("only one")
        );
        assert_eq!(extract_report_text(&json!({ "summary": 3 })), None);
        assert_eq!(
            extract_report_text(&json!({ "summary": "x", "other": "y" })),
            None
        );
    }
}

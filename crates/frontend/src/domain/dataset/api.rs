//! Content store client.
//!
//! Fetches the per-dataset JSON documents from `data/{id}/...` relative to
//! the app origin.

use contracts::domain::dataset::documents::{MainData, QualityAssessment, TableDocument};
use gloo_net::http::Request;
use serde_json::Value;

/// Builds the resource URL for one dataset file.
pub fn resource_url(dataset_id: &str, filename: &str) -> String {
    format!("data/{}/{}", urlencoding::encode(dataset_id), filename)
}

async fn fetch_json<T>(dataset_id: &str, filename: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let resp = Request::get(&resource_url(dataset_id, filename))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// `data.json` — headline facts for the summary message.
pub async fn fetch_main_data(dataset_id: &str) -> Result<MainData, String> {
    fetch_json(dataset_id, "data.json").await
}

/// `char.json` — the study characteristics table.
pub async fn fetch_characteristics(dataset_id: &str) -> Result<TableDocument, String> {
    fetch_json(dataset_id, "char.json").await
}

/// `fr.json` — the forest plot table.
pub async fn fetch_forest_plot(dataset_id: &str) -> Result<TableDocument, String> {
    fetch_json(dataset_id, "fr.json").await
}

/// `qa.json` — the quality assessment block.
pub async fn fetch_quality_assessment(dataset_id: &str) -> Result<QualityAssessment, String> {
    fetch_json(dataset_id, "qa.json").await
}

/// `report.json` — optional layman report; shape varies, so this returns
/// the raw document.
pub async fn fetch_layman_report(dataset_id: &str) -> Result<Value, String> {
    fetch_json(dataset_id, "report.json").await
}

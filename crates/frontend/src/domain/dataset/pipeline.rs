//! Upload simulation and the sequential fetch-and-render pipeline.
//!
//! One spawned task drives everything: the cosmetic progress bar, the
//! upload summary message, then five fetch-and-render steps per staged
//! dataset, strictly one after another. Every step traps its own failure;
//! a failed fetch never stops the remaining steps or datasets.

use crate::domain::dataset::api;
use crate::layout::global_context::{SessionContext, UploadPhase};
use contracts::domain::dataset::documents;
use contracts::domain::dataset::staging::REQUIRED_FILENAMES;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Progress bar advance per tick, in percent.
const PROGRESS_STEP: u32 = 5;
/// Tick interval of the simulated upload.
const PROGRESS_TICK_MS: u32 = 100;
/// Pause between the upload summary and the first pipeline step.
const POST_UPLOAD_DELAY_MS: u32 = 1_000;
/// Pause after a step card appears, before its fetch is attempted.
const STEP_LEAD_MS: u32 = 1_000;
/// Pause between a completed step card and its rendered content.
const STEP_SETTLE_MS: u32 = 700;

/// Starts the cosmetic upload, then hands off to the rendering pipeline.
/// No-op unless the session is idle with a complete dataset staged.
pub fn start_upload(session: SessionContext) {
    let ready = session.phase.get_untracked() == UploadPhase::Idle
        && session.staged.with_untracked(|set| set.is_complete());
    if !ready {
        return;
    }
    session.phase.set(UploadPhase::Uploading { percent: 0 });
    spawn_local(async move {
        let mut percent = 0;
        while percent < 100 {
            TimeoutFuture::new(PROGRESS_TICK_MS).await;
            percent += PROGRESS_STEP;
            session.phase.set(UploadPhase::Uploading { percent });
        }
        let names = session.staged.with_untracked(|set| set.display_names());
        session.push_user_text(format!(
            "Uploaded {} files: {}",
            names.len(),
            names.join(", ")
        ));
        TimeoutFuture::new(POST_UPLOAD_DELAY_MS).await;
        session.phase.set(UploadPhase::Processing);
        run_pipeline(session).await;
    });
}

async fn run_pipeline(session: SessionContext) {
    let staged = session.staged.get_untracked();
    if staged.is_empty() {
        session.push_assistant_text(format!(
            "No files uploaded. Please drag the four JSON files ({}) from a dataset folder.",
            REQUIRED_FILENAMES.join(", ")
        ));
        return;
    }
    for dataset_id in staged.dataset_ids() {
        render_dataset(session, &dataset_id).await;
    }
}

/// The five steps for one dataset, in fixed order.
async fn render_dataset(session: SessionContext, id: &str) {
    // 1. Main information
    let step = session.push_step(format!("Collecting main information ({id})"));
    TimeoutFuture::new(STEP_LEAD_MS).await;
    match api::fetch_main_data(id).await {
        Ok(doc) => {
            session.complete_step(step, "Main information collected");
            TimeoutFuture::new(STEP_SETTLE_MS).await;
            session.push_assistant_markdown(doc.summary(id));
        }
        Err(e) => {
            log::warn!("data.json fetch failed for {id}: {e}");
            session.fail_step(step, format!("Main information not available for {id}"));
            session.push_assistant_text(format!("Could not load data.json for {id}: {e}"));
        }
    }

    // 2. Characteristic table
    let step = session.push_step(format!("Generating characteristic table ({id})"));
    TimeoutFuture::new(STEP_LEAD_MS).await;
    match api::fetch_characteristics(id).await {
        Ok(doc) => {
            session.complete_step(step, "Characteristic table generated");
            TimeoutFuture::new(STEP_SETTLE_MS).await;
            match doc.table {
                Some(table) => session.push_assistant_markdown(table),
                None => session.push_assistant_text("No characteristic table available."),
            }
        }
        Err(e) => {
            log::warn!("char.json fetch failed for {id}: {e}");
            session.fail_step(step, format!("Characteristic table not available for {id}"));
            session.push_assistant_text(format!("Could not load char.json for {id}: {e}"));
        }
    }

    // 3. Forest plot
    let step = session.push_step(format!("Generating forest plot ({id})"));
    TimeoutFuture::new(STEP_LEAD_MS).await;
    match api::fetch_forest_plot(id).await {
        Ok(doc) => {
            session.complete_step(step, "Forest plot generated");
            TimeoutFuture::new(STEP_SETTLE_MS).await;
            match doc.table {
                Some(table) => session.push_assistant_markdown(table),
                None => session.push_assistant_text("No forest plot available."),
            }
        }
        Err(e) => {
            log::warn!("fr.json fetch failed for {id}: {e}");
            session.fail_step(step, format!("Forest plot not available for {id}"));
            session.push_assistant_text(format!("Could not load fr.json for {id}: {e}"));
        }
    }

    // 4. Quality assessment
    let step = session.push_step(format!("Generating quality assessment ({id})"));
    TimeoutFuture::new(STEP_LEAD_MS).await;
    match api::fetch_quality_assessment(id).await {
        Ok(doc) => {
            session.complete_step(step, "Quality assessment generated");
            TimeoutFuture::new(STEP_SETTLE_MS).await;
            match doc.compose() {
                Some(block) => session.push_assistant_markdown(block),
                None => session.push_assistant_text("No quality assessment available."),
            }
        }
        Err(e) => {
            log::warn!("qa.json fetch failed for {id}: {e}");
            session.fail_step(step, format!("Quality assessment not available for {id}"));
            session.push_assistant_text(format!("Could not load qa.json for {id}: {e}"));
        }
    }

    // 5. Layman report (optional resource)
    let step = session.push_step(format!("Generating layman report ({id})"));
    TimeoutFuture::new(STEP_LEAD_MS).await;
    match api::fetch_layman_report(id).await {
        Ok(doc) => {
            session.complete_step(step, "Layman report generated");
            TimeoutFuture::new(STEP_SETTLE_MS).await;
            match documents::extract_report_text(&doc) {
                Some(text) => {
                    session.push_assistant_markdown(format!("# Layman Report\n\n{text}"));
                }
                None => session.push_assistant_text("No layman report available."),
            }
        }
        Err(e) => {
            log::warn!("report.json fetch failed for {id}: {e}");
            session.fail_step(step, format!("Layman report not available for {id}"));
            session.push_assistant_text(format!("Could not load report.json for {id}"));
        }
    }
}

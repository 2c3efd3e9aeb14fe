use crate::domain::dataset::pipeline;
use crate::layout::global_context::{SessionContext, UploadPhase};
use crate::shared::icons::icon;
use contracts::domain::dataset::staging::{
    parse_drop_payload, parse_picker_name, REQUIRED_FILENAMES,
};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "dataset-file-input";

#[component]
pub fn IntakePanel() -> impl IntoView {
    let session =
        use_context::<SessionContext>().expect("SessionContext context not found");

    let (dragover, set_dragover) = signal(false);

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_dragover.set(false);
        let Some(data) = ev.data_transfer() else {
            return;
        };
        let Ok(payload) = data.get_data("text/plain") else {
            return;
        };
        if let Some((folder, filename)) = parse_drop_payload(&payload) {
            session.stage_file(folder, &filename);
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(files) = input.files() {
                for i in 0..files.length() {
                    if let Some(file) = files.get(i) {
                        let (folder, filename) = parse_picker_name(&file.name());
                        session.stage_file(folder, &filename);
                    }
                }
            }
            // Allow re-selecting the same files later
            input.set_value("");
        }
    };

    let open_picker = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                        input.click();
                    }
                }
            }
        }
    };

    let is_complete = move || session.staged.with(|set| set.is_complete());
    let phase = session.phase;
    let trigger_enabled =
        move || is_complete() && phase.get() == UploadPhase::Idle;

    view! {
        <div class="intake-panel">
            <div
                class="drop-zone"
                class=("drop-zone--dragover", move || dragover.get())
                class=("drop-zone--ready", is_complete)
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_dragover.set(true);
                }
                on:dragleave=move |_| set_dragover.set(false)
                on:drop=handle_drop
                on:click=open_picker
            >
                {icon("upload")}
                <p class="drop-zone__hint">"Drag dataset files here or click to browse"</p>
                <p class="drop-zone__required">
                    {format!("Required: {}", REQUIRED_FILENAMES.join(", "))}
                </p>
            </div>

            <input
                id=FILE_INPUT_ID
                type="file"
                accept=".json"
                multiple=true
                class="hidden"
                on:change=handle_file_select
            />

            <StagedList />
            <UploadProgress />

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !trigger_enabled())
                    on_click=move |_| pipeline::start_upload(session)
                >
                    {move || match phase.get() {
                        UploadPhase::Idle => "Upload files",
                        UploadPhase::Uploading { .. } => "Uploading...",
                        UploadPhase::Processing => "Processing...",
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| session.clear()
                >
                    {icon("trash")}
                    " Clear"
                </Button>
            </Flex>
        </div>
    }
}

#[component]
fn StagedList() -> impl IntoView {
    let session =
        use_context::<SessionContext>().expect("SessionContext context not found");

    view! {
        <Show when=move || session.staged.with(|set| !set.is_empty())>
            <div class="staged-files">
                <h3 class="staged-files__title">"Staged files"</h3>
                <For
                    each=move || session.staged.with(|set| set.files().to_vec())
                    key=|file| file.display_name()
                    let:file
                >
                    <div class="staged-files__item">
                        {icon("file")}
                        <span class="staged-files__name">{file.display_name()}</span>
                        <span class="staged-files__check">{icon("check")}</span>
                    </div>
                </For>
            </div>
        </Show>
    }
}

#[component]
fn UploadProgress() -> impl IntoView {
    let session =
        use_context::<SessionContext>().expect("SessionContext context not found");

    view! {
        {move || match session.phase.get() {
            UploadPhase::Uploading { percent } => {
                let label = if percent >= 100 {
                    "Upload successful!".to_string()
                } else {
                    format!("Uploading... {percent}%")
                };
                Some(view! {
                    <div class="upload-progress">
                        <div class="upload-progress__track">
                            <div
                                class="upload-progress__bar"
                                style=format!("width: {percent}%")
                            ></div>
                        </div>
                        <span class="upload-progress__label">{label}</span>
                    </div>
                })
            }
            _ => None,
        }}
    }
}

use crate::domain::dataset::ui::intake::IntakePanel;
use crate::domain::dataset::ui::transcript::TranscriptView;
use leptos::prelude::*;

/// Page skeleton.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |        Transcript        |    Intake     |
/// |        (Center)          |    (Right)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-header__title">"Research Dataset Analysis"</h1>
                <span class="app-header__subtitle">"Systematic review intake demo"</span>
            </header>
            <div class="app-body">
                <main class="app-main">
                    <TranscriptView />
                </main>
                <aside class="app-side">
                    <IntakePanel />
                </aside>
            </div>
        </div>
    }
}

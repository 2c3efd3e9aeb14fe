use crate::layout::global_context::SessionContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session store to the whole app via context. The welcome
    // message is appended once per fresh load, never on clear.
    let session = SessionContext::new();
    session.push_welcome();
    provide_context(session);

    view! {
        <Shell />
    }
}

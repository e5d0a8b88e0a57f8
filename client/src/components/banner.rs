//! Error and success banners for a panel's two message slots.

use leptos::prelude::*;

/// Renders the error slot and the success slot independently; either, both,
/// or neither may show.
#[component]
pub fn MessageBanner(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] success: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">{move || error.get().unwrap_or_default()}</div>
        </Show>
        <Show when=move || success.get().is_some()>
            <div class="success-message">{move || success.get().unwrap_or_default()}</div>
        </Show>
    }
}

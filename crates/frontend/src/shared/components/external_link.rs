use leptos::prelude::*;

/// Link to a page outside the application.
///
/// Always opens in a new browsing context, and the opened page gets neither
/// `window.opener` nor the referrer.
#[component]
pub fn ExternalLink(
    /// Absolute target URL
    #[prop(into)]
    href: String,
    /// Visible text
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <a class="external-link" href=href target="_blank" rel="noopener noreferrer">
            {label}
        </a>
    }
}

use super::RouteParams;
use crate::shared::components::ExternalLink;
use leptos::prelude::*;

pub const UPDATES_NOTICE: &str =
    "This alpha version does not support automatic updates yet. Please follow updates on Twitter.";
pub const ANNOUNCEMENTS_URL: &str = "https://twitter.com/luigifcruz";
pub const ANNOUNCEMENTS_LABEL: &str = "@luigifcruz";

/// Placeholder for the Updates tab.
///
/// There is no update check; the panel only points at the account where
/// releases are announced. Output is the same for every `params`.
#[component]
pub fn UpdatesPanel(#[prop(optional)] params: RouteParams) -> impl IntoView {
    // The selected sub-tab does not change this panel.
    let RouteParams { tab: _ } = params;

    view! {
        <div class="tab-view-body">
            {UPDATES_NOTICE}
            <ExternalLink href=ANNOUNCEMENTS_URL label=ANNOUNCEMENTS_LABEL />
        </div>
    }
}

//! Maps a Meta sub-tab to the panel that renders it.

use super::meta_tab::MetaTab;
use crate::meta::about::AboutPanel;
use crate::meta::updates::UpdatesPanel;
use crate::meta::RouteParams;
use leptos::prelude::*;

pub fn render_tab_content(tab: MetaTab, params: RouteParams) -> AnyView {
    match tab {
        MetaTab::About => view! { <AboutPanel /> }.into_any(),
        MetaTab::Updates => view! { <UpdatesPanel params=params /> }.into_any(),
    }
}

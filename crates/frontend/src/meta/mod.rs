//! Meta section: information about the application itself.

pub mod about;
pub mod updates;

use crate::layout::tabs::{render_tab_content, MetaTab, TabBar};
use leptos::prelude::*;
use leptos::Params;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

/// Parameters of the `/meta/:tab` route.
#[derive(Params, Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub tab: Option<String>,
}

/// Tab container for the Meta section, mounted by the router.
#[component]
pub fn MetaView() -> impl IntoView {
    let params = use_params::<RouteParams>();
    // A route that fails to parse is treated like one without a tab.
    let route_params = move || params.get().unwrap_or_default();
    let selected = Memo::new(move |_| MetaTab::from_param(route_params().tab.as_deref()));

    Effect::new(move |_| {
        log::debug!("meta tab selected: '{}'", selected.get().key());
    });

    view! {
        <div class="tab-view">
            <TabBar selected=selected />
            {move || render_tab_content(selected.get(), route_params())}
        </div>
    }
}

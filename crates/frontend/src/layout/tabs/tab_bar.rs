use super::meta_tab::MetaTab;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TabBar(#[prop(into)] selected: Signal<MetaTab>) -> impl IntoView {
    view! {
        <ul class="tab-view-header">
            {MetaTab::ALL
                .into_iter()
                .map(move |tab| {
                    view! {
                        <li class="tab-view-tab" class:active=move || selected.get() == tab>
                            <A href=tab.href()>{tab.label()}</A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

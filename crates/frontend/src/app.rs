use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Panels read the version and other settings from context.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}

use crate::layout::tabs::MetaTab;
use crate::meta::MetaView;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=MetaTab::default().href() /> }>
                    <Route path=path!("/meta/:tab") view=MetaView />
                </Routes>
            </main>
        </Router>
    }
}

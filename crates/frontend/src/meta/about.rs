use crate::shared::config::AppConfig;
use leptos::prelude::*;

pub const APP_NAME: &str = "WeatherDump";
pub const APP_DESCRIPTION: &str =
    "Decoder for weather satellite downlinks: HRD (NOAA-20, Suomi NPP) and LRPT (Meteor-MN2).";

#[component]
pub fn AboutPanel() -> impl IntoView {
    let version = use_context::<AppConfig>().unwrap_or_default().version;

    view! {
        <div class="tab-view-body about">
            <h2 class="about-title">{APP_NAME}</h2>
            <p class="about-version">"Version " {version}</p>
            <p class="about-description">{APP_DESCRIPTION}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_version_from_context() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(AppConfig {
                version: "1.2.3".to_string(),
                log_level: log::Level::Info,
            });
            view! { <AboutPanel /> }.to_html()
        });
        assert!(html.contains(APP_NAME));
        assert!(html.contains("1.2.3"));
    }

    #[test]
    fn test_renders_without_config() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <AboutPanel /> }.to_html());
        assert!(html.contains(APP_NAME));
        assert!(html.contains(&AppConfig::default().version));
    }
}

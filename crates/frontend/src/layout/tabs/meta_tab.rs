/// Sub-tabs of the Meta section, in display order.
///
/// The default tab (About) is used both for an unrecognized `tab` value and
/// as the redirect target for paths outside `/meta/:tab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetaTab {
    #[default]
    About,
    Updates,
}

impl MetaTab {
    pub const ALL: [MetaTab; 2] = [MetaTab::About, MetaTab::Updates];

    /// Route segment, as in `/meta/<key>`.
    pub fn key(self) -> &'static str {
        match self {
            MetaTab::About => "about",
            MetaTab::Updates => "updates",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetaTab::About => "About",
            MetaTab::Updates => "Updates",
        }
    }

    pub fn href(self) -> String {
        format!("/meta/{}", self.key())
    }

    /// Resolves the `tab` route parameter. Anything unrecognized selects the
    /// first tab.
    pub fn from_param(param: Option<&str>) -> Self {
        let Some(raw) = param.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        Self::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

//! Tab handling for the Meta section
//!
//! - `meta_tab` - the set of sub-tabs and route parameter parsing
//! - `registry` - tab -> panel mapping
//! - `tab_bar` - tab strip with one router link per tab

pub mod meta_tab;
pub mod registry;
pub mod tab_bar;

pub use meta_tab::MetaTab;
pub use registry::render_tab_content;
pub use tab_bar::TabBar;

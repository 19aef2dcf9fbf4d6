pub mod external_link;

pub use external_link::ExternalLink;

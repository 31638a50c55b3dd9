use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// site configuration
//
// this struct contains the handful of knobs the webapp reads at startup.  the file is
// baked into the wasm bundle, so every field has a default and a missing table is fine
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // url root the site is served from, e.g. a github pages project path
    pub base_path: String,

    // the case file that timeline events point into
    pub document_path: String,

    // one of trace, debug, info, warn, error
    pub log_level: String,

    pub overlay: OverlayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_path: String::from("/caso-religiao-campeonato/"),
            document_path: String::from("./documents/caso.pdf"),
            log_level: String::from("info"),
            overlay: OverlayConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    // how long to wait after opening before focusing the close button, which gives
    // the entrance animation time to mount the dialog
    pub focus_delay_ms: u64,

    // whether clicking the backdrop dismisses the overlay
    pub close_on_backdrop: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            focus_delay_ms: 100,
            close_on_backdrop: true,
        }
    }
}

impl SiteConfig {
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.overlay.focus_delay_ms)
    }

    // resolves a path from the content data against base_path.  absolute paths and full
    // urls are left alone
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://")
        {
            return path.to_owned();
        }

        let relative = path.trim_start_matches("./");
        let base = self.base_path.trim_end_matches('/');

        format!("{base}/{relative}")
    }

    pub fn document_page_url(&self, page: u32) -> String {
        format!("{}#page={page}", self.asset_url(&self.document_path))
    }
}

// as with the server config, the settings live in a [config] subtable of the document
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.focus_delay(), Duration::from_millis(100));
        assert!(config.overlay.close_on_backdrop);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let doc = r#"
[config]
log_level = "debug"

[config.overlay]
focus_delay_ms = 250
"#;
        let config = parse_config(doc).unwrap();

        assert_eq!(config.log_level(), Level::DEBUG);
        assert_eq!(config.focus_delay(), Duration::from_millis(250));
        assert!(config.overlay.close_on_backdrop);
        assert_eq!(config.document_path, "./documents/caso.pdf");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = SiteConfig {
            log_level: String::from("chatty"),
            ..SiteConfig::default()
        };

        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("[config\nlog_level = ").is_err());
        assert!(parse_config("[config]\nlog_level = 3").is_err());
    }

    #[test]
    fn document_page_url_targets_pdf_fragment() {
        let config = SiteConfig::default();

        assert_eq!(
            config.document_page_url(65),
            "/caso-religiao-campeonato/documents/caso.pdf#page=65"
        );
    }

    #[test]
    fn asset_url_joins_relative_paths_onto_base() {
        let config = SiteConfig {
            base_path: String::from("/site"),
            ..SiteConfig::default()
        };

        assert_eq!(config.asset_url("./audio/clip.mp3"), "/site/audio/clip.mp3");
        assert_eq!(config.asset_url("audio/clip.mp3"), "/site/audio/clip.mp3");
        assert_eq!(config.asset_url("/elsewhere.pdf"), "/elsewhere.pdf");
        assert_eq!(
            config.asset_url("https://example.org/a.pdf"),
            "https://example.org/a.pdf"
        );
    }
}

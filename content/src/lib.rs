pub mod religion;
pub mod timeline;

// the case material is plain toml checked into the crate and compiled into the binary;
// there is no backend to fetch it from, so the loaders below just parse these strings
const RELIGIONS_TOML: &str = include_str!("../data/religions.toml");
const TIMELINE_TOML: &str = include_str!("../data/timeline.toml");

pub const CASE_TITLE: &str = "Caso Religião Campeonato";

pub const CASE_SUMMARY: &str = "Um estudo de caso sobre as religiões minoritárias de Novas Veredas e seus impactos sociais, desenvolvido para uma competição de Visual Law.";

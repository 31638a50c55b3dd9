use serde::{Deserialize, Serialize};

use crate::RELIGIONS_TOML;

// structs and types

// card and header colour for a religion
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Indigo,
    Emerald,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Indigo => "accent-indigo",
            Accent::Emerald => "accent-emerald",
        }
    }
}

// the summary shown on the card, plus everything the detail drawer needs
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Religion {
    pub id: String,
    pub name: String,
    pub followers: String,
    pub dogma: String,
    pub accent: Accent,
    pub detail: ReligionDetail,
}

impl Religion {
    pub fn card_label(&self) -> String {
        format!("Saiba mais sobre {}", self.name)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReligionDetail {
    pub history: String,
    pub figures: Vec<Figure>,
    pub practices: Vec<String>,

    // only the fraternidade has a splinter group worth calling out
    #[serde(default)]
    pub radical_wing: Option<RadicalWing>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Figure {
    pub name: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub audio: Option<AudioClip>,
}

// an interview recording, optionally with the page of the case file that transcribes it
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AudioClip {
    pub title: String,
    pub src: String,
    #[serde(default)]
    pub transcript_page: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RadicalWing {
    pub name: String,
    pub warning: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ReligionsFile {
    religion: Vec<Religion>,
}

pub fn load_religions() -> anyhow::Result<Vec<Religion>> {
    let file: ReligionsFile = toml::from_str(RELIGIONS_TOML)?;

    Ok(file.religion)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn embedded_religions_parse() {
        let religions = load_religions().unwrap();

        let ids: Vec<_> = religions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["fraternidade", "circulo"]);
    }

    #[test]
    fn ids_are_unique_and_fields_filled() {
        let religions = load_religions().unwrap();
        let ids: HashSet<_> = religions.iter().map(|r| r.id.clone()).collect();

        assert_eq!(ids.len(), religions.len());

        for religion in &religions {
            assert!(!religion.name.trim().is_empty());
            assert!(!religion.dogma.trim().is_empty());
            assert!(!religion.detail.history.trim().is_empty());
            assert!(!religion.detail.figures.is_empty());
            assert!(!religion.detail.practices.is_empty());
        }
    }

    #[test]
    fn fraternidade_carries_audio_and_radical_wing() {
        let religions = load_religions().unwrap();
        let fraternidade = religions.iter().find(|r| r.id == "fraternidade").unwrap();

        assert_eq!(fraternidade.accent, Accent::Indigo);

        let clip = fraternidade
            .detail
            .figures
            .iter()
            .find_map(|f| f.audio.as_ref())
            .unwrap();
        assert_eq!(clip.transcript_page, Some(65));

        let wing = fraternidade.detail.radical_wing.as_ref().unwrap();
        assert_eq!(wing.name, "Ordem dos Castos");
        assert_eq!(wing.paragraphs.len(), 2);
    }

    #[test]
    fn circulo_has_no_optional_sections() {
        let religions = load_religions().unwrap();
        let circulo = religions.iter().find(|r| r.id == "circulo").unwrap();

        assert_eq!(circulo.accent.class(), "accent-emerald");
        assert!(circulo.detail.radical_wing.is_none());
        assert!(circulo.detail.figures.iter().all(|f| f.audio.is_none()));
    }

    #[test]
    fn card_label_names_the_religion() {
        let religions = load_religions().unwrap();

        assert_eq!(
            religions[1].card_label(),
            "Saiba mais sobre Círculo das Ervas Eternas"
        );
    }
}

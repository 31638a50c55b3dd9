use serde::{Deserialize, Serialize};

use crate::TIMELINE_TOML;

// structs and types

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Timeline {
    pub blocks: Vec<TimelineBlock>,
}

// a phase of the case, e.g. an operation or a filing, with the dated events inside it
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TimelineBlock {
    pub id: String,
    pub title: String,
    pub events: Vec<TimelineEvent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TimelineEvent {
    // dd/mm/yyyy, kept as text since it is only ever displayed
    pub date: String,

    // newline separated; the first line reads as the headline
    pub description: String,

    // page of the case file that backs this event
    #[serde(default)]
    pub pdf_page: Option<u32>,

    // overrides the configured case file for this one event
    #[serde(default)]
    pub pdf_path: Option<String>,

    #[serde(default)]
    pub external_url: Option<String>,
}

impl TimelineEvent {
    // the description split into display paragraphs, dropping blank lines
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description
            .split('\n')
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct TimelineFile {
    block: Vec<TimelineBlock>,
}

pub fn load_timeline() -> anyhow::Result<Timeline> {
    let file: TimelineFile = toml::from_str(TIMELINE_TOML)?;

    Ok(Timeline { blocks: file.block })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn event(description: &str) -> TimelineEvent {
        TimelineEvent {
            date: String::from("01/01/2025"),
            description: description.to_owned(),
            pdf_page: None,
            pdf_path: None,
            external_url: None,
        }
    }

    #[test]
    fn paragraphs_drop_blank_lines() {
        let event = event("Representação\n- Prisão preventiva\n\n  \nTodos deferidos.");

        assert_eq!(
            event.paragraphs(),
            vec!["Representação", "- Prisão preventiva", "Todos deferidos."]
        );
    }

    #[test]
    fn single_line_description_is_one_paragraph() {
        assert_eq!(event("Homologação").paragraphs(), vec!["Homologação"]);
        assert!(event("\n\n").paragraphs().is_empty());
    }

    #[test]
    fn embedded_timeline_parses_in_order() {
        let timeline = load_timeline().unwrap();

        assert_eq!(timeline.blocks.first().unwrap().id, "eventos-preteritos");
        assert_eq!(timeline.blocks.last().unwrap().id, "embargos");
        assert_eq!(timeline.blocks.len(), 11);
    }

    #[test]
    fn blocks_are_unique_and_non_empty() {
        let timeline = load_timeline().unwrap();
        let ids: HashSet<_> = timeline.blocks.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids.len(), timeline.blocks.len());

        for block in &timeline.blocks {
            assert!(!block.events.is_empty(), "block {} has no events", block.id);

            for event in &block.events {
                assert_eq!(event.date.len(), 10, "bad date {}", event.date);
                assert_eq!(event.date.matches('/').count(), 2);
                assert!(!event.paragraphs().is_empty());
            }
        }
    }

    #[test]
    fn document_references_survive_parsing() {
        let timeline = load_timeline().unwrap();
        let events: Vec<_> = timeline.blocks.iter().flat_map(|b| &b.events).collect();

        let sentence = events.iter().find(|e| e.date == "03/07/2025").unwrap();
        assert_eq!(sentence.pdf_page, Some(107));

        let hearing = events.iter().find(|e| e.date == "24/06/2025").unwrap();
        assert!(hearing.external_url.as_deref().unwrap().starts_with("https://"));
        assert_eq!(hearing.pdf_page, None);
    }
}

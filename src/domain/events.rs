use super::IdleSelection;
use std::fmt;
use tracing::{error, info, warn};

/// Diagnostics produced by one pipeline run, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    FragmentNotFound {
        element_id: String,
    },
    NoPairsMatched,
    RecordConversionFailure {
        app_id: String,
        playtime: String,
        detail: String,
    },
    Summary {
        matched: usize,
        parsed: usize,
        selected: usize,
    },
}

impl PipelineEvent {
    pub fn emit(&self) {
        match self {
            PipelineEvent::FragmentNotFound { element_id } => {
                warn!("Did not find element with id='{}' in the HTML", element_id);
            }
            PipelineEvent::NoPairsMatched => {
                warn!("No appid/playtime pairs found in games list, skipping");
            }
            PipelineEvent::RecordConversionFailure {
                app_id,
                playtime,
                detail,
            } => {
                error!(
                    app_id = %app_id,
                    playtime = %playtime,
                    "Error parsing appid or playtime: {}",
                    detail
                );
            }
            PipelineEvent::Summary {
                matched,
                parsed,
                selected,
            } => {
                info!(
                    "Found {} appid/playtime pairs, parsed {}, selected {}",
                    matched, parsed, selected
                );
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub selection: IdleSelection,
    pub events: Vec<PipelineEvent>,
}

impl PipelineReport {
    pub fn fragment_missing(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, PipelineEvent::FragmentNotFound { .. }))
    }

    pub fn no_pairs(&self) -> bool {
        self.events.contains(&PipelineEvent::NoPairsMatched)
    }

    pub fn conversion_failures(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PipelineEvent::RecordConversionFailure { .. }))
            .count()
    }
}

/// How a single service run ended. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    RetrievalFailed,
    FragmentNotFound,
    NoPairsMatched,
    NothingToIdle,
    DryRun(IdleSelection),
    Assigned(Vec<u32>),
    Unchanged(Vec<u32>),
    WriteFailed,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::RetrievalFailed => write!(f, "games page could not be retrieved"),
            RunOutcome::FragmentNotFound => write!(f, "games list not present on the page"),
            RunOutcome::NoPairsMatched => write!(f, "games list contained no games"),
            RunOutcome::NothingToIdle => write!(f, "no games available for idling"),
            RunOutcome::DryRun(selection) => {
                write!(f, "dry run, {} games selected", selection.len())
            }
            RunOutcome::Assigned(ids) => write!(f, "{} games assigned", ids.len()),
            RunOutcome::Unchanged(ids) => write!(f, "{} games already assigned", ids.len()),
            RunOutcome::WriteFailed => write!(f, "bot configuration could not be written"),
        }
    }
}

mod events;
mod game;
pub(crate) mod provider;
pub(crate) mod storage;

pub use events::{PipelineEvent, PipelineReport, RunOutcome};
pub use game::{GameRecord, HtmlFragment, IdleSelection, RawPair};

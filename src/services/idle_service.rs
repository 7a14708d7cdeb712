use crate::domain::provider::DocumentProvider;
use crate::domain::storage::IdleConfigWriter;
use crate::domain::RunOutcome;
use crate::services::pipeline::IdlePipeline;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Fetches the games page, picks the least played games and hands them to the
/// bot configuration of one account.
pub struct IdleService {
    pipeline: IdlePipeline,
    writer: Arc<dyn IdleConfigWriter>,
    account: String,
    dry_run: bool,
}

impl IdleService {
    pub fn new(
        pipeline: IdlePipeline,
        writer: Arc<dyn IdleConfigWriter + 'static>,
        account: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            pipeline,
            writer,
            account: account.into(),
            dry_run,
        }
    }

    /// Runs once. Every failure is logged here and reflected in the outcome;
    /// nothing is written unless a non-empty selection was produced.
    pub async fn run<P: DocumentProvider>(&self, provider: &P) -> RunOutcome {
        let document = match provider.fetch_document().await {
            Ok(document) => document,
            Err(e) => {
                error!(account = %self.account, "Failed to retrieve games page: {:?}", e);
                return RunOutcome::RetrievalFailed;
            }
        };

        let report = self.pipeline.run(&document);
        if report.fragment_missing() {
            return RunOutcome::FragmentNotFound;
        }
        if report.no_pairs() {
            return RunOutcome::NoPairsMatched;
        }
        if report.selection.is_empty() {
            info!(
                "No games found to idle! ({} records could not be parsed)",
                report.conversion_failures()
            );
            return RunOutcome::NothingToIdle;
        }

        if self.dry_run {
            info!(
                "Dry run, not assigning {} games to idle",
                report.selection.len()
            );
            return RunOutcome::DryRun(report.selection);
        }

        let app_ids = report.selection.app_ids();
        match self.writer.load_idle_games(&self.account) {
            Ok(Some(previous)) if previous == app_ids => {
                info!("Idle games for {} are unchanged", self.account);
                return RunOutcome::Unchanged(app_ids);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    account = %self.account,
                    "Could not read current idle games, overwriting: {:?}", e
                );
            }
        }

        match self.writer.set_idle_games(&self.account, &app_ids) {
            Ok(()) => {
                info!(
                    "Assigned {} least-played games to idle for {}",
                    app_ids.len(),
                    self.account
                );
                RunOutcome::Assigned(app_ids)
            }
            Err(e) => {
                error!(account = %self.account, "Failed to write idle games: {:?}", e);
                RunOutcome::WriteFailed
            }
        }
    }
}

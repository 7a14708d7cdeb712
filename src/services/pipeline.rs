use crate::config::PipelineSettings;
use crate::domain::{IdleSelection, PipelineEvent, PipelineReport};
use crate::error::{IdleError, Result};
use crate::infrastructure::{extract_pairs, FragmentLocator};
use crate::services::parsing::parse_records;
use crate::services::selection::select_least_played;
use scraper::Html;
use tracing::debug;

/// Locate, extract, parse and select over one games page.
///
/// Runs never fail: every expected problem ends up as a [`PipelineEvent`] in
/// the returned report, and is logged as it happens.
pub struct IdlePipeline {
    locator: FragmentLocator,
    element_id: String,
    max_games: usize,
}

impl IdlePipeline {
    pub fn new(settings: &PipelineSettings) -> Result<Self> {
        Ok(Self {
            locator: FragmentLocator::new(&settings.element_id)?,
            element_id: settings.element_id.clone(),
            max_games: settings.max_games,
        })
    }

    pub fn run(&self, document: &str) -> PipelineReport {
        self.run_document(&Html::parse_document(document))
    }

    pub fn run_document(&self, document: &Html) -> PipelineReport {
        let mut events = Vec::new();
        let mut record = |event: PipelineEvent| {
            event.emit();
            events.push(event);
        };

        let Some(fragment) = self.locator.locate(document) else {
            record(PipelineEvent::FragmentNotFound {
                element_id: self.element_id.clone(),
            });
            return PipelineReport {
                selection: IdleSelection::default(),
                events,
            };
        };
        debug!("Retrieved games list snippet, length {}", fragment.len());

        let pairs = extract_pairs(&fragment);
        let matched = pairs.len();
        if matched == 0 {
            record(PipelineEvent::NoPairsMatched);
            return PipelineReport {
                selection: IdleSelection::default(),
                events,
            };
        }

        let parsed = parse_records(pairs);
        for failure in &parsed.failures {
            if let IdleError::RecordConversion {
                app_id,
                playtime,
                source,
            } = failure
            {
                record(PipelineEvent::RecordConversionFailure {
                    app_id: app_id.clone(),
                    playtime: playtime.clone(),
                    detail: source.to_string(),
                });
            }
        }

        let parsed_count = parsed.records.len();
        let selection = select_least_played(parsed.records, self.max_games);
        debug!(
            "Top picks: {}",
            selection
                .games()
                .iter()
                .map(|game| format!("(AppID={},Minutes={})", game.app_id, game.playtime_minutes))
                .collect::<Vec<_>>()
                .join(", ")
        );

        record(PipelineEvent::Summary {
            matched,
            parsed: parsed_count,
            selected: selection.len(),
        });

        PipelineReport { selection, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> IdlePipeline {
        IdlePipeline::new(&PipelineSettings::default()).unwrap()
    }

    fn games_page(entries: &[(String, String)]) -> String {
        let games = entries
            .iter()
            .map(|(app_id, playtime)| {
                format!(
                    "{{&quot;appid&quot;:{},&quot;name&quot;:&quot;Game {}&quot;,&quot;playtime_forever&quot;:{},&quot;img_icon_url&quot;:&quot;abc&quot;}}",
                    app_id, app_id, playtime
                )
            })
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"<!DOCTYPE html><html><head><title>Games</title></head><body>
            <div class="profile_header">Someone</div>
            <template id="gameslist_config" data-profile-gameslist="{{&quot;strProfileName&quot;:&quot;Someone&quot;,&quot;rgGames&quot;:[{}]}}"></template>
            </body></html>"#,
            games
        )
    }

    fn entries(pairs: &[(u64, u64)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(app_id, playtime)| (app_id.to_string(), playtime.to_string()))
            .collect()
    }

    #[test]
    fn two_games_ascending_by_playtime() {
        let report = pipeline().run(&games_page(&entries(&[(20, 500), (10, 0)])));

        assert_eq!(report.selection.app_ids(), vec![10, 20]);
        assert_eq!(
            report.events,
            vec![PipelineEvent::Summary {
                matched: 2,
                parsed: 2,
                selected: 2
            }]
        );
    }

    #[test]
    fn forty_games_keep_the_thirty_two_least_played() {
        // Distinct playtimes in scrambled order
        let pairs: Vec<(u64, u64)> = (0..40u64).map(|i| (100 + i, (i * 17) % 40)).collect();
        let report = pipeline().run(&games_page(&entries(&pairs)));

        let mut expected = pairs.clone();
        expected.sort_by_key(|(_, playtime)| *playtime);
        let expected: Vec<u32> = expected
            .iter()
            .take(32)
            .map(|(app_id, _)| *app_id as u32)
            .collect();

        assert_eq!(report.selection.len(), 32);
        assert_eq!(report.selection.app_ids(), expected);
        assert!(report
            .selection
            .games()
            .windows(2)
            .all(|w| w[0].playtime_minutes < w[1].playtime_minutes));
    }

    #[test]
    fn missing_node_only_reports_fragment_not_found() {
        let report = pipeline().run("<html><body><p>This profile is private.</p></body></html>");

        assert!(report.selection.is_empty());
        assert_eq!(
            report.events,
            vec![PipelineEvent::FragmentNotFound {
                element_id: "gameslist_config".to_string()
            }]
        );
    }

    #[test]
    fn empty_games_list_reports_no_pairs() {
        let report = pipeline().run(&games_page(&[]));

        assert!(report.selection.is_empty());
        assert_eq!(report.events, vec![PipelineEvent::NoPairsMatched]);
    }

    #[test]
    fn unconvertible_record_is_skipped() {
        let page = games_page(&entries(&[(10, 5), (20, 99_999_999_999), (30, 1)]));
        let report = pipeline().run(&page);

        assert_eq!(report.selection.app_ids(), vec![30, 10]);
        assert_eq!(report.conversion_failures(), 1);
        assert!(matches!(
            &report.events[0],
            PipelineEvent::RecordConversionFailure { app_id, playtime, .. }
                if app_id == "20" && playtime == "99999999999"
        ));
        assert_eq!(
            report.events[1],
            PipelineEvent::Summary {
                matched: 3,
                parsed: 2,
                selected: 2
            }
        );
    }

    #[test]
    fn counts_valid_and_overflowing_records() {
        let page = games_page(&entries(&[
            (1, 4_294_967_296),
            (2, 10),
            (5_000_000_000, 3),
            (3, 20),
        ]));
        let report = pipeline().run(&page);

        assert_eq!(report.selection.len(), 2);
        assert_eq!(report.conversion_failures(), 2);
    }

    #[test]
    fn same_document_same_selection() {
        let page = games_page(&entries(&[(7, 3), (8, 3), (9, 1), (10, 0)]));
        let pipeline = pipeline();

        let first = pipeline.run(&page);
        let second = pipeline.run(&page);
        assert_eq!(first, second);
        assert_eq!(first.selection.app_ids(), vec![10, 9, 7, 8]);
    }

    #[test]
    fn selected_ids_come_from_the_document() {
        let pairs: Vec<(u64, u64)> = (0..45u64).map(|i| (1000 + i * 3, i % 7)).collect();
        let report = pipeline().run(&games_page(&entries(&pairs)));

        let present: Vec<u32> = pairs.iter().map(|(app_id, _)| *app_id as u32).collect();
        assert!(report
            .selection
            .app_ids()
            .iter()
            .all(|app_id| present.contains(app_id)));
    }

    #[test]
    fn least_played_game_with_braces_in_its_name_is_kept() {
        let page = r#"<html><body><template id="gameslist_config" data-profile-gameslist="{&quot;rgGames&quot;:[{&quot;appid&quot;:10,&quot;name&quot;:&quot;Foo {Remastered}&quot;,&quot;playtime_forever&quot;:0},{&quot;appid&quot;:20,&quot;name&quot;:&quot;Bar&quot;,&quot;playtime_forever&quot;:500}]}"></template></body></html>"#;
        let report = pipeline().run(page);

        assert_eq!(report.selection.app_ids(), vec![10, 20]);
        assert_eq!(
            report.events,
            vec![PipelineEvent::Summary {
                matched: 2,
                parsed: 2,
                selected: 2
            }]
        );
    }

    #[test]
    fn accepts_already_parsed_document() {
        let document = Html::parse_document(&games_page(&entries(&[(1, 1)])));
        assert_eq!(pipeline().run_document(&document).selection.app_ids(), vec![1]);
    }

    #[test]
    fn respects_configured_limit_and_element_id() {
        let settings = PipelineSettings {
            element_id: "custom_games".to_string(),
            max_games: 2,
            ..PipelineSettings::default()
        };
        let pipeline = IdlePipeline::new(&settings).unwrap();
        let page = r#"<html><body><div id="custom_games">[{"appid":1,"playtime_forever":9},{"appid":2,"playtime_forever":8},{"appid":3,"playtime_forever":7}]</div></body></html>"#;

        assert_eq!(pipeline.run(page).selection.app_ids(), vec![3, 2]);
    }
}

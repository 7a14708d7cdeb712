use crate::domain::{GameRecord, RawPair};
use crate::error::{IdleError, Result};

#[derive(Debug, Default)]
pub struct ParsedRecords {
    pub records: Vec<GameRecord>,
    pub failures: Vec<IdleError>,
}

pub fn parse_pair(pair: &RawPair) -> Result<GameRecord> {
    let convert = |text: &str| {
        text.parse::<u32>()
            .map_err(|source| IdleError::RecordConversion {
                app_id: pair.app_id.clone(),
                playtime: pair.playtime.clone(),
                source,
            })
    };

    Ok(GameRecord::new(convert(&pair.app_id)?, convert(&pair.playtime)?))
}

/// Converts every pair, keeping going past the ones that fail.
pub fn parse_records(pairs: impl IntoIterator<Item = RawPair>) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();

    for pair in pairs {
        match parse_pair(&pair) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.failures.push(e),
        }
    }

    parsed
}

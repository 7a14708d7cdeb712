use crate::domain::{GameRecord, IdleSelection};

/// Least played first. `sort_by_key` is stable, so equal playtimes keep
/// their extraction order.
pub fn select_least_played(mut records: Vec<GameRecord>, limit: usize) -> IdleSelection {
    records.sort_by_key(|record| record.playtime_minutes);
    records.truncate(limit);
    IdleSelection::from_sorted(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_GAMES_PLAYED_CONCURRENTLY;

    #[test]
    fn sorts_ascending_by_playtime() {
        let records = vec![
            GameRecord::new(1, 300),
            GameRecord::new(2, 0),
            GameRecord::new(3, 45),
        ];
        let selection = select_least_played(records, MAX_GAMES_PLAYED_CONCURRENTLY);
        assert_eq!(selection.app_ids(), vec![2, 3, 1]);
    }

    #[test]
    fn ties_keep_extraction_order() {
        let records = vec![
            GameRecord::new(7, 10),
            GameRecord::new(3, 0),
            GameRecord::new(9, 10),
            GameRecord::new(1, 0),
            GameRecord::new(5, 10),
        ];
        let selection = select_least_played(records, MAX_GAMES_PLAYED_CONCURRENTLY);
        assert_eq!(selection.app_ids(), vec![3, 1, 7, 9, 5]);
    }

    #[test]
    fn truncates_to_limit() {
        let records: Vec<GameRecord> = (0..50).map(|i| GameRecord::new(1000 + i, 50 - i)).collect();
        let selection = select_least_played(records, MAX_GAMES_PLAYED_CONCURRENTLY);

        assert_eq!(selection.len(), 32);
        assert!(selection
            .games()
            .windows(2)
            .all(|pair| pair[0].playtime_minutes <= pair[1].playtime_minutes));
        assert_eq!(selection.games()[0], GameRecord::new(1049, 1));
        assert_eq!(selection.games()[31], GameRecord::new(1018, 32));
    }

    #[test]
    fn length_is_min_of_limit_and_input() {
        for (count, limit) in [(0, 32), (5, 32), (5, 3), (32, 32), (33, 32)] {
            let records: Vec<GameRecord> = (0..count).map(|i| GameRecord::new(i, i)).collect();
            assert_eq!(
                select_least_played(records, limit).len(),
                (count as usize).min(limit)
            );
        }
    }

    #[test]
    fn empty_input_is_empty_selection() {
        assert!(select_least_played(Vec::new(), MAX_GAMES_PLAYED_CONCURRENTLY).is_empty());
    }
}

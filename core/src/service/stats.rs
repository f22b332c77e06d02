use crate::model::choice::Choice;
use crate::model::record::Record;
use crate::model::stats::Leaderboard;

/// All-time points and driver count per roster member.
///
/// Every roster member is present even without records. Records for
/// people outside the roster are skipped.
pub fn aggregate(records: &[Record], roster: &[String]) -> Leaderboard {
    let mut board = Leaderboard::new(roster);
    let mut skipped = 0usize;

    for record in records {
        match board.get_mut(&record.person) {
            Some(entry) => {
                entry.points += record.choice.points();
                if record.choice == Choice::Driver {
                    entry.driver_trips += 1;
                }
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "ignored records for people not on the roster");
    }
    board
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonStats {
    pub person: String,
    pub points: i64,
    pub driver_trips: u32,
}

/// Per-person totals, in roster order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    pub entries: Vec<PersonStats>,
}

impl Leaderboard {
    pub fn new(roster: &[String]) -> Self {
        Self {
            entries: roster
                .iter()
                .map(|person| PersonStats {
                    person: person.clone(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn get(&self, person: &str) -> Option<&PersonStats> {
        self.entries.iter().find(|e| e.person == person)
    }

    pub(crate) fn get_mut(&mut self, person: &str) -> Option<&mut PersonStats> {
        self.entries.iter_mut().find(|e| e.person == person)
    }

    /// Pointwise sum. People only present in `other` are appended.
    pub fn merge(&self, other: &Leaderboard) -> Leaderboard {
        let mut merged = self.clone();
        for entry in &other.entries {
            match merged.get_mut(&entry.person) {
                Some(existing) => {
                    existing.points += entry.points;
                    existing.driver_trips += entry.driver_trips;
                }
                None => merged.entries.push(entry.clone()),
            }
        }
        merged
    }

    pub fn ranked_by_points(&self) -> Vec<&PersonStats> {
        let mut ranked: Vec<&PersonStats> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }

    pub fn ranked_by_drives(&self) -> Vec<&PersonStats> {
        let mut ranked: Vec<&PersonStats> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.driver_trips.cmp(&a.driver_trips));
        ranked
    }

    pub fn total_points(&self) -> i64 {
        self.entries.iter().map(|e| e.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: &[(&str, i64, u32)]) -> Leaderboard {
        Leaderboard {
            entries: values
                .iter()
                .map(|(p, pts, d)| PersonStats {
                    person: p.to_string(),
                    points: *pts,
                    driver_trips: *d,
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_is_pointwise() {
        let a = board(&[("Alice", 2, 1), ("Bob", 0, 0)]);
        let b = board(&[("Bob", 3, 1), ("Cleo", 1, 0)]);
        assert_eq!(
            a.merge(&b),
            board(&[("Alice", 2, 1), ("Bob", 3, 1), ("Cleo", 1, 0)])
        );
    }

    #[test]
    fn test_ranking_is_stable() {
        let lb = board(&[("Alice", 1, 0), ("Bob", 4, 2), ("Cleo", 1, 3)]);
        let by_points: Vec<&str> = lb.ranked_by_points().iter().map(|e| e.person.as_str()).collect();
        assert_eq!(by_points, vec!["Bob", "Alice", "Cleo"]);
        let by_drives: Vec<&str> = lb.ranked_by_drives().iter().map(|e| e.person.as_str()).collect();
        assert_eq!(by_drives, vec!["Cleo", "Bob", "Alice"]);
        assert_eq!(lb.total_points(), 6);
    }
}

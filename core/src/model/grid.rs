use crate::model::choice::Choice;
use crate::model::week::DayLabel;

/// Dense day × person matrix of choices for one week.
///
/// Always holds exactly `days.len() * roster.len()` cells, stored
/// row-major (one row per day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    days: Vec<DayLabel>,
    roster: Vec<String>,
    cells: Vec<Choice>,
}

impl Grid {
    /// A grid with every cell set to `Unknown`.
    pub fn blank(days: &[DayLabel], roster: &[String]) -> Self {
        Self {
            days: days.to_vec(),
            roster: roster.to_vec(),
            cells: vec![Choice::Unknown; days.len() * roster.len()],
        }
    }

    pub fn days(&self) -> &[DayLabel] {
        &self.days
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn day_index(&self, label: &str) -> Option<usize> {
        self.days.iter().position(|d| d.label == label)
    }

    pub fn person_index(&self, person: &str) -> Option<usize> {
        self.roster.iter().position(|p| p == person)
    }

    pub fn get(&self, day: usize, person: usize) -> Option<Choice> {
        if person >= self.roster.len() {
            return None;
        }
        self.cells.get(day * self.roster.len() + person).copied()
    }

    /// Sets a cell. Returns `false` when the position is outside the grid.
    pub fn set(&mut self, day: usize, person: usize, choice: Choice) -> bool {
        if day >= self.days.len() || person >= self.roster.len() {
            return false;
        }
        let width = self.roster.len();
        self.cells[day * width + person] = choice;
        true
    }

    pub fn set_by_name(&mut self, day: usize, person: &str, choice: Choice) -> bool {
        match self.person_index(person) {
            Some(col) => self.set(day, col, choice),
            None => false,
        }
    }

    pub fn row(&self, day: usize) -> &[Choice] {
        let width = self.roster.len();
        let start = (day * width).min(self.cells.len());
        let end = (start + width).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Iterates `(day, person, choice)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (&DayLabel, &str, Choice)> + '_ {
        self.days.iter().enumerate().flat_map(move |(d, day)| {
            self.roster
                .iter()
                .zip(self.row(d).iter())
                .map(move |(person, choice)| (day, person.as_str(), *choice))
        })
    }
}

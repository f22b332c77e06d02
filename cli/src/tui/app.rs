use carpool_core::{Choice, PlannerService, RecordStore, Session};
use chrono::Local;

pub enum Status {
    Info(String),
    Error(String),
}

pub struct App<R: RecordStore> {
    pub service: PlannerService<R>,
    pub session: Session,
    pub row: usize,
    pub col: usize,
    pub dirty: bool,
    pub show_charts: bool,
    pub status: Option<Status>,
}

impl<R: RecordStore> App<R> {
    pub fn new(service: PlannerService<R>) -> App<R> {
        let session = service.open_session(Local::now().naive_local());
        let status = session
            .degraded
            .then(|| Status::Error("Store unavailable, starting from an empty sheet".to_string()));
        App {
            service,
            session,
            row: 0,
            col: 0,
            dirty: false,
            show_charts: false,
            status,
        }
    }

    fn rows(&self) -> usize {
        self.session.grid.days().len()
    }

    fn cols(&self) -> usize {
        self.session.grid.roster().len()
    }

    pub fn move_down(&mut self) {
        if self.rows() > 0 {
            self.row = (self.row + 1) % self.rows();
        }
    }

    pub fn move_up(&mut self) {
        if self.rows() > 0 {
            self.row = (self.row + self.rows() - 1) % self.rows();
        }
    }

    pub fn move_right(&mut self) {
        if self.cols() > 0 {
            self.col = (self.col + 1) % self.cols();
        }
    }

    pub fn move_left(&mut self) {
        if self.cols() > 0 {
            self.col = (self.col + self.cols() - 1) % self.cols();
        }
    }

    pub fn selected_choice(&self) -> Choice {
        self.session.grid.get(self.row, self.col).unwrap_or_default()
    }

    pub fn cycle_choice(&mut self) {
        let next = self.selected_choice().next();
        self.set_choice(next);
    }

    pub fn set_choice(&mut self, choice: Choice) {
        if self.session.grid.set(self.row, self.col, choice) {
            self.dirty = true;
            self.status = None;
        }
    }

    pub fn save(&mut self) {
        match self.service.save(&mut self.session) {
            Ok(()) => {
                self.dirty = false;
                self.status = Some(Status::Info(format!("Saved week of {}", self.session.week.key)));
            }
            Err(err) => {
                self.status = Some(Status::Error(format!("Save failed: {}", err)));
            }
        }
    }

    pub fn reload(&mut self) {
        match self.service.reload(&mut self.session) {
            Ok(()) => {
                self.dirty = false;
                self.status = Some(Status::Info("Reloaded".to_string()));
            }
            Err(err) => {
                self.status = Some(Status::Error(format!("Reload failed: {}", err)));
            }
        }
    }

    pub fn toggle_charts(&mut self) {
        self.show_charts = !self.show_charts;
    }
}

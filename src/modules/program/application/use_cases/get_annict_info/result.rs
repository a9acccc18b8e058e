use crate::modules::program::domain::Program;

/// Combined output of one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnictInfoOutput {
    /// Programs airing today (reference timezone), images validated
    pub today_programs: Vec<Program>,
    /// Season-scoped library entries in repository order, images validated
    pub library_entries: Vec<Program>,
}

impl AnnictInfoOutput {
    pub fn new(today_programs: Vec<Program>, library_entries: Vec<Program>) -> Self {
        Self {
            today_programs,
            library_entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.today_programs.is_empty() && self.library_entries.is_empty()
    }
}

//! In-memory model: the live record book, its snapshot history and the list filter

pub mod appointment;
pub mod error;
pub mod fields;
pub mod history;
pub mod person;
pub mod record_book;

use appointment::Appointment;
use error::ModelResult;
use fields::Nric;
use history::SnapshotHistory;
use person::{Person, PersonFilter};
use record_book::RecordBook;

pub use error::ModelError;

/// The state every command executes against
///
/// Mutating operations change only the live book; a command calls `commit` once it
/// has finished mutating so that exactly one snapshot is recorded per command.
#[derive(Debug, Clone)]
pub struct Model {
    book: RecordBook,
    history: SnapshotHistory,
    filter: PersonFilter,
}

impl Model {
    pub fn new(book: RecordBook, history_limit: Option<usize>) -> Self {
        Self {
            history: SnapshotHistory::new(book.clone(), history_limit),
            book,
            filter: PersonFilter::All,
        }
    }

    pub fn record_book(&self) -> &RecordBook {
        &self.book
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.book.has_person(person)
    }

    pub fn find_person(&self, nric: &Nric) -> Option<&Person> {
        self.book.find_person(nric)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.book.add_person(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.book.update_person(target, edited)
    }

    pub fn delete_person(&mut self, target: &Person) -> ModelResult<()> {
        self.book.remove_person(target)
    }

    pub fn add_appointment(&mut self, appointment: Appointment) -> ModelResult<()> {
        self.book.add_appointment(appointment)
    }

    /// Replace the whole live book (used by `clear`)
    pub fn reset(&mut self, book: RecordBook) {
        self.book = book;
    }

    /// Persons currently shown in the list view, in list order
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    /// Record the live book as a new snapshot
    pub fn commit(&mut self) {
        self.history.commit(self.book.clone());
        log::debug!(
            "Committed snapshot {} ({} persons, {} appointments)",
            self.history.current_index(),
            self.book.persons().len(),
            self.book.appointments().len()
        );
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> ModelResult<()> {
        self.book = self.history.undo()?.clone();
        self.filter = PersonFilter::All;
        Ok(())
    }

    pub fn redo(&mut self) -> ModelResult<()> {
        self.book = self.history.redo()?.clone();
        self.filter = PersonFilter::All;
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(RecordBook::new(), None)
    }
}

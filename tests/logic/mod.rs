pub mod appointment;
pub mod checkin;
pub mod startup;
pub mod storage;
pub mod undo_redo;

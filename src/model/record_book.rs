//! The record collections: patients in check-in order plus their appointments

use crate::model::appointment::Appointment;
use crate::model::error::{ModelError, ModelResult};
use crate::model::fields::Nric;
use crate::model::person::Person;

/// Persons and appointments held by the application
///
/// Invariants: no two persons share an NRIC, every appointment references a
/// person in the book, and no appointment appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBook {
    persons: Vec<Person>,
    appointments: Vec<Appointment>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from loaded collections, enforcing every invariant
    pub fn from_parts(persons: Vec<Person>, appointments: Vec<Appointment>) -> ModelResult<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        for appointment in appointments {
            book.add_appointment(appointment)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn find_person(&self, nric: &Nric) -> Option<&Person> {
        self.persons.iter().find(|p| p.nric() == nric)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position in the list
    ///
    /// If the NRIC changes, the patient's appointments follow it.
    pub fn update_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| ModelError::PersonNotFound {
                nric: target.nric().clone(),
            })?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(ModelError::DuplicatePerson);
        }

        if target.nric() != edited.nric() {
            for appointment in self.appointments.iter_mut() {
                if appointment.nric() == target.nric() {
                    *appointment = appointment.with_nric(edited.nric().clone());
                }
            }
        }
        self.persons[index] = edited;
        Ok(())
    }

    /// Remove `target` and every appointment booked under their NRIC
    pub fn remove_person(&mut self, target: &Person) -> ModelResult<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| ModelError::PersonNotFound {
                nric: target.nric().clone(),
            })?;
        let removed = self.persons.remove(index);
        self.appointments.retain(|a| a.nric() != removed.nric());
        Ok(())
    }

    pub fn add_appointment(&mut self, appointment: Appointment) -> ModelResult<()> {
        if self.find_person(appointment.nric()).is_none() {
            return Err(ModelError::PersonNotFound {
                nric: appointment.nric().clone(),
            });
        }
        if self.appointments.contains(&appointment) {
            return Err(ModelError::DuplicateAppointment);
        }
        self.appointments.push(appointment);
        Ok(())
    }

    pub fn appointments_for(&self, nric: &Nric) -> impl Iterator<Item = &Appointment> + '_ {
        let nric = nric.clone();
        self.appointments.iter().filter(move |a| a.nric() == &nric)
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.appointments.is_empty()
    }
}

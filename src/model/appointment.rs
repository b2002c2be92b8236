//! Appointment records and their enumerated/temporal fields

use crate::model::fields::{Doctor, FieldError, FieldKind, Nric, Procedure};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum::IntoEnumIterator;

/// Kind of appointment, selected on the command line by its abbreviation
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum AppointmentType {
    Consultation,
    Diagnostic,
    Surgery,
    Therapy,
}

static ABBREVIATIONS: Lazy<HashMap<&'static str, AppointmentType>> = Lazy::new(|| {
    AppointmentType::iter()
        .map(|t| (t.abbreviation(), t))
        .collect()
});

impl AppointmentType {
    pub fn abbreviation(self) -> &'static str {
        match self {
            AppointmentType::Consultation => "CONS",
            AppointmentType::Diagnostic => "DIAG",
            AppointmentType::Surgery => "SURG",
            AppointmentType::Therapy => "THER",
        }
    }

    /// Look up a type by its abbreviation (case-sensitive)
    pub fn from_abbreviation(abbreviation: &str) -> Result<Self, FieldError> {
        ABBREVIATIONS
            .get(abbreviation)
            .copied()
            .ok_or_else(|| FieldError::new(FieldKind::AppointmentType, Self::message_constraints()))
    }

    pub fn message_constraints() -> String {
        let known: Vec<String> = AppointmentType::iter()
            .map(|t| format!("{} ({})", t.abbreviation(), t))
            .collect();
        format!("Appointment type should be one of: {}", known.join(", "))
    }

    /// Check that no two variants share an abbreviation; run once at startup
    pub fn verify_abbreviations() -> Result<(), String> {
        let mut seen: HashMap<&'static str, AppointmentType> = HashMap::new();
        for t in AppointmentType::iter() {
            if let Some(previous) = seen.insert(t.abbreviation(), t) {
                return Err(format!(
                    "Appointment types {} and {} share the abbreviation '{}'",
                    previous,
                    t,
                    t.abbreviation()
                ));
            }
        }
        Ok(())
    }
}

impl Serialize for AppointmentType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbreviation())
    }
}

impl<'de> Deserialize<'de> for AppointmentType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AppointmentType::from_abbreviation(&raw).map_err(serde::de::Error::custom)
    }
}

/// Appointment date and time, minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppointmentDateTime(NaiveDateTime);

impl AppointmentDateTime {
    pub const FORMAT: &'static str = "%d-%m-%Y %H:%M";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Date and time should be of the format dd-MM-yyyy HH:mm and be a valid date";

    pub fn new(value: &str) -> Result<Self, FieldError> {
        NaiveDateTime::parse_from_str(value, Self::FORMAT)
            .map(Self)
            .map_err(|_| FieldError::new(FieldKind::DateTime, Self::MESSAGE_CONSTRAINTS))
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl TryFrom<String> for AppointmentDateTime {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AppointmentDateTime> for String {
    fn from(value: AppointmentDateTime) -> String {
        value.to_string()
    }
}

impl fmt::Display for AppointmentDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// A scheduled appointment for a checked-in patient
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "type")]
    appointment_type: AppointmentType,
    procedure: Procedure,
    date_time: AppointmentDateTime,
    doctor: Doctor,
    nric: Nric,
}

impl Appointment {
    pub fn new(
        appointment_type: AppointmentType,
        procedure: Procedure,
        date_time: AppointmentDateTime,
        doctor: Doctor,
        nric: Nric,
    ) -> Self {
        Self {
            appointment_type,
            procedure,
            date_time,
            doctor,
            nric,
        }
    }

    pub fn appointment_type(&self) -> AppointmentType {
        self.appointment_type
    }

    pub fn procedure(&self) -> &Procedure {
        &self.procedure
    }

    pub fn date_time(&self) -> AppointmentDateTime {
        self.date_time
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    /// Same appointment moved to another patient key
    pub fn with_nric(&self, nric: Nric) -> Self {
        Self {
            nric,
            ..self.clone()
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) Procedure: {} Date & Time: {} Doctor: {} NRIC: {}",
            self.appointment_type,
            self.appointment_type.abbreviation(),
            self.procedure,
            self.date_time,
            self.doctor,
            self.nric
        )
    }
}

//! Table rendering of the person list and appointments

use crate::core::styles::StyleRole;
use crate::model::appointment::Appointment;
use crate::model::person::Person;
use crate::model::record_book::RecordBook;
use prettytable::{format, Cell, Row, Table};
use std::io::{self, Write};

fn header_row(titles: &[&str]) -> Row {
    let spec = format!(
        "b{}",
        StyleRole::Header.to_prettytable_spec().unwrap_or_default()
    );
    Row::new(
        titles
            .iter()
            .map(|title| Cell::new(title).style_spec(&spec))
            .collect(),
    )
}

fn new_table(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(header_row(titles));
    table
}

/// Persons as shown in the list view, numbered from 1 in list order
pub fn persons_table(persons: &[&Person], book: &RecordBook) -> Table {
    let mut table = new_table(&[
        "#", "Name", "Phone", "Email", "Address", "NRIC", "Tags", "Appts",
    ]);
    for (i, person) in persons.iter().enumerate() {
        let tags: Vec<&str> = person.tags().iter().map(|t| t.as_str()).collect();
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()).style_spec("r"),
            Cell::new(person.name().as_str()),
            Cell::new(person.phone().as_str()),
            Cell::new(person.email().as_str()),
            Cell::new(person.address().as_str()),
            Cell::new(person.nric().as_str()),
            Cell::new(&tags.join(", ")),
            Cell::new(&book.appointments_for(person.nric()).count().to_string()).style_spec("r"),
        ]));
    }
    table
}

/// Appointments of the given persons, earliest first
pub fn appointments_table(persons: &[&Person], book: &RecordBook) -> Table {
    let mut appointments: Vec<&Appointment> = book
        .appointments()
        .iter()
        .filter(|a| persons.iter().any(|p| p.nric() == a.nric()))
        .collect();
    appointments.sort_by_key(|a| a.date_time().value());

    let mut table = new_table(&["Date & Time", "Type", "Procedure", "Doctor", "NRIC"]);
    for appointment in appointments {
        table.add_row(Row::new(vec![
            Cell::new(&appointment.date_time().to_string()),
            Cell::new(&format!(
                "{} ({})",
                appointment.appointment_type(),
                appointment.appointment_type().abbreviation()
            )),
            Cell::new(appointment.procedure().as_str()),
            Cell::new(appointment.doctor().as_str()),
            Cell::new(appointment.nric().as_str()),
        ]));
    }
    table
}

/// Write the list view: the filtered persons followed by their appointments
pub fn write_list<W: Write + ?Sized>(
    out: &mut W,
    persons: &[&Person],
    book: &RecordBook,
    use_color: bool,
) -> io::Result<()> {
    if persons.is_empty() {
        writeln!(out, "{}", StyleRole::Dim.paint("No persons to show.", use_color))?;
        return Ok(());
    }
    print_table(out, &persons_table(persons, book), use_color)?;

    let appointments = appointments_table(persons, book);
    if !appointments.is_empty() {
        writeln!(out)?;
        print_table(out, &appointments, use_color)?;
    }
    Ok(())
}

fn print_table<W: Write + ?Sized>(out: &mut W, table: &Table, use_color: bool) -> io::Result<()> {
    if use_color {
        // Cell styles only reach a terminal
        out.flush()?;
        table.print_tty(true)?;
        Ok(())
    } else {
        table.print(out).map(|_| ())
    }
}

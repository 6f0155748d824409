use chrono::{NaiveDate, TimeZone};

use crate::booking::{compose_instant, parse_time_of_day, Booking};
use crate::error::BookingError;

/// The five inputs of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Car,
    Plate,
    StartTime,
    EndTime,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Car,
        FormField::Plate,
        FormField::StartTime,
        FormField::EndTime,
    ];

    /// Input id/name, matching the API field the value ends up in
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Car => "car",
            FormField::Plate => "placa",
            FormField::StartTime => "inital_date",
            FormField::EndTime => "final_Date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nome:",
            FormField::Car => "Carro:",
            FormField::Plate => "Placa:",
            FormField::StartTime => "Horário de Início:",
            FormField::EndTime => "Horário de Término:",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::StartTime | FormField::EndTime => "time",
            _ => "text",
        }
    }
}

/// Raw form values. Times are `HH:MM` with no date; the date comes from the
/// selected day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub car: String,
    pub plate: String,
    pub start_time: String,
    pub end_time: String,
}

impl BookingForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Car => &self.car,
            FormField::Plate => &self.plate,
            FormField::StartTime => &self.start_time,
            FormField::EndTime => &self.end_time,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Car => &mut self.car,
            FormField::Plate => &mut self.plate,
            FormField::StartTime => &mut self.start_time,
            FormField::EndTime => &mut self.end_time,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Compose the booking for `date`, reading both times as wall-clock time in `tz`.
    pub fn to_booking<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<Booking, BookingError> {
        let start = compose_instant(date, parse_time_of_day(&self.start_time)?, tz)?;
        let end = compose_instant(date, parse_time_of_day(&self.end_time)?, tz)?;

        Ok(Booking {
            name: self.name.clone(),
            vehicle: self.car.clone(),
            plate: self.plate.clone(),
            start,
            end,
        })
    }
}

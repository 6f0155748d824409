//! Calendar month model.
//!
//! The month shown is always passed in explicitly (year, month, today's day
//! number) rather than read from the clock, so grids for any month can be
//! built and checked deterministically.

use chrono::{Datelike, NaiveDate};

use crate::error::BookingError;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    /// Strictly before today's day number; rendered disabled
    pub is_past: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    today: u32,
    days_in_month: u32,
}

impl CalendarMonth {
    /// `today` is the day number past days are compared against.
    pub fn new(year: i32, month: u32, today: u32) -> Result<Self, BookingError> {
        let days_in_month =
            days_in_month(year, month).ok_or(BookingError::InvalidMonth { year, month })?;
        Ok(Self { year, month, today, days_in_month })
    }

    /// The month containing `date`, with `date` as today
    pub fn containing(date: NaiveDate) -> Self {
        let days_in_month = days_in_month(date.year(), date.month()).unwrap_or(31);
        Self {
            year: date.year(),
            month: date.month(),
            today: date.day(),
            days_in_month,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn today(&self) -> u32 {
        self.today
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// e.g. "Hoje: 19 de Outubro de 2026"
    pub fn header(&self) -> String {
        format!("Hoje: {} de {} de {}", self.today, self.month_name(), self.year)
    }

    pub fn days(&self) -> Vec<CalendarDay> {
        (1..=self.days_in_month)
            .map(|day| CalendarDay { day, is_past: day < self.today })
            .collect()
    }

    /// Whether a click on `day` may open the booking form
    pub fn is_selectable(&self, day: u32) -> bool {
        (1..=self.days_in_month).contains(&day) && day >= self.today
    }

    pub fn date(&self, day: u32) -> Result<NaiveDate, BookingError> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(BookingError::DayOutOfRange {
            year: self.year,
            month: self.month,
            day,
        })
    }
}

/// Day count of a month, taken as the day before the first of the next month.
/// `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(year, month, 1)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

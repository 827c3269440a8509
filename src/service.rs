use chrono::NaiveDate;
use parking_lot::Mutex;
use thiserror::Error;

use crate::models::{ClassRecord, CreateBookingRequest, CreateClassRequest};
use crate::store::ClassStore;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    InvalidDate(#[from] chrono::ParseError),
    #[error("class end date can not be before its start date")]
    EndBeforeStart,
    #[error("no class exists under the requested name")]
    ClassNotFound,
    #[error("booking date is outside the class schedule")]
    OutsideWindow,
    #[error("class is fully booked for the requested date")]
    CapacityExceeded,
}

/// Business logic for class creation and booking.
///
/// One mutex guards the whole store: every load-validate-store cycle runs as
/// a single critical section, so class creation and bookings never interleave.
/// No rejection path leaves a partial mutation behind.
pub struct BookingService {
    store: Mutex<ClassStore>,
    date_format: String,
}

impl BookingService {
    pub fn new(store: ClassStore, date_format: impl Into<String>) -> Self {
        Self {
            store: Mutex::new(store),
            date_format: date_format.into(),
        }
    }

    fn parse_date(&self, raw: &str) -> Result<NaiveDate, BookingError> {
        Ok(NaiveDate::parse_from_str(raw, &self.date_format)?)
    }

    /// Registers a class under its name, replacing any prior class with the
    /// same name. The booking window is inclusive on both ends; equal start
    /// and end dates describe a one-day class.
    pub fn create_class(&self, info: &CreateClassRequest) -> Result<(), BookingError> {
        let start_date = self.parse_date(&info.start_date)?;
        let end_date = self.parse_date(&info.end_date)?;

        if end_date < start_date {
            return Err(BookingError::EndBeforeStart);
        }

        let record = ClassRecord::new(info.class_capacity, start_date, end_date);
        self.store.lock().store(&info.class_name, record);

        Ok(())
    }

    /// Books a user into a class on a date, subject to the class window and
    /// the per-day capacity limit.
    pub fn create_booking(&self, info: &CreateBookingRequest) -> Result<(), BookingError> {
        let booking_date = self.parse_date(&info.booking_date)?;

        let mut store = self.store.lock();
        let mut record = store
            .load(&info.class_name)
            .ok_or(BookingError::ClassNotFound)?;

        if booking_date < record.start_date || booking_date > record.end_date {
            return Err(BookingError::OutsideWindow);
        }
        if record.bookings_on(booking_date) >= record.allowed_capacity as usize {
            return Err(BookingError::CapacityExceeded);
        }

        record
            .bookings
            .entry(booking_date)
            .or_default()
            .push(info.user_name.clone());
        store.store(&info.class_name, record);

        Ok(())
    }

    /// Snapshot of the stored record for a class, if it exists.
    pub fn class_record(&self, name: &str) -> Option<ClassRecord> {
        self.store.lock().load(name)
    }
}

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::store::{AttendanceBook, AttendanceStore, StoreError};

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("please fill all fields")]
    MissingFields,
    #[error("already checked in today")]
    AlreadyCheckedIn,
    #[error("already checked out today")]
    AlreadyCheckedOut,
    #[error("no check-in found for today")]
    NotCheckedIn,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub staff_id: String,
    pub staff_name: String,
    pub department: String,
    pub status: AttendanceStatus,
}

/// Attendance record lifecycle on top of an injected store. Every
/// operation is a full load, a linear scan of today's bucket, and a full
/// rewrite; there is no cross-request coordination.
#[derive(Clone)]
pub struct AttendanceService {
    store: Arc<dyn AttendanceStore>,
}

impl AttendanceService {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// Read failures degrade to an empty book: an unreadable store has no
    /// records to show, and the next save rewrites the whole file anyway.
    fn load_or_empty(&self) -> AttendanceBook {
        match self.store.load() {
            Ok(book) => book,
            Err(e) => {
                warn!(error = %e, "attendance store unreadable, treating as empty");
                AttendanceBook::new()
            }
        }
    }

    /// Appends a new record for `today`. `staff_id` must not already have
    /// one; checkout time starts unset.
    pub fn check_in(
        &self,
        req: CheckInRequest,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Result<AttendanceRecord, AttendanceError> {
        if req.staff_id.trim().is_empty()
            || req.staff_name.trim().is_empty()
            || req.department.trim().is_empty()
        {
            return Err(AttendanceError::MissingFields);
        }

        let mut book = self.load_or_empty();
        let bucket = book.entry(today).or_default();
        if bucket.iter().any(|r| r.staff_id == req.staff_id) {
            return Err(AttendanceError::AlreadyCheckedIn);
        }

        let record = AttendanceRecord {
            staff_id: req.staff_id,
            staff_name: req.staff_name,
            department: req.department,
            status: req.status,
            checkin_time: now,
            checkout_time: None,
            date: today,
        };
        bucket.push(record.clone());
        self.store.save(&book)?;

        info!(staff_id = %record.staff_id, date = %today, "checked in");
        Ok(record)
    }

    /// Sets the checkout time on today's record for `staff_id`. A record
    /// is mutated exactly once this way; it is never deleted.
    pub fn check_out(
        &self,
        staff_id: &str,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Result<AttendanceRecord, AttendanceError> {
        let mut book = self.load_or_empty();
        let record = book
            .get_mut(&today)
            .and_then(|bucket| bucket.iter_mut().find(|r| r.staff_id == staff_id))
            .ok_or(AttendanceError::NotCheckedIn)?;

        if record.checkout_time.is_some() {
            return Err(AttendanceError::AlreadyCheckedOut);
        }
        record.checkout_time = Some(now);
        let record = record.clone();
        self.store.save(&book)?;

        info!(staff_id, date = %today, "checked out");
        Ok(record)
    }

    /// Today's bucket, empty when the date has no records yet.
    pub fn today_records(&self, today: NaiveDate) -> Vec<AttendanceRecord> {
        self.load_or_empty().remove(&today).unwrap_or_default()
    }
}

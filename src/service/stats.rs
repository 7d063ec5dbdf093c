use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

/// Daily aggregate over one date bucket. `present` includes Late and
/// Half Day records, so the counts are not mutually exclusive; that
/// overlap is the behavior this service replaces and is kept as-is.
#[derive(Debug, Default, PartialEq)]
pub struct DailyStats {
    pub total_staff: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub present_percentage: f64,
    pub late_percentage: f64,
    pub absent_percentage: f64,
}

/// Single pass over today's records.
pub fn daily_stats(records: &[AttendanceRecord]) -> DailyStats {
    let total_staff = records.len();
    let present = records
        .iter()
        .filter(|r| r.status.counts_as_present())
        .count();
    let late = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Late)
        .count();
    let absent = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Absent)
        .count();

    DailyStats {
        total_staff,
        present,
        late,
        absent,
        present_percentage: percentage(present, total_staff),
        late_percentage: percentage(late, total_staff),
        absent_percentage: percentage(absent, total_staff),
    }
}

/// Share of `total`, rounded to one decimal place. Zero when there are no
/// records at all.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

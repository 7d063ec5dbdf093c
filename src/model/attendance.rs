use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Placeholder stored in the JSON file while a time field is unset.
pub const TIME_NOT_SET: &str = "--:--";

/// Attendance status as submitted by the check-in form. Wire spellings
/// keep the spaces the persisted data files use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Late,
    #[serde(rename = "Half Day")]
    #[strum(serialize = "Half Day")]
    HalfDay,
    #[serde(rename = "On Leave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
    Absent,
}

impl AttendanceStatus {
    /// Late and Half Day staff were still on site, so they count as present.
    /// The buckets overlap: a Late record shows up in both counts.
    pub fn counts_as_present(self) -> bool {
        matches!(self, Self::Present | Self::Late | Self::HalfDay)
    }
}

/// One staff member's attendance entry for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "staff_id": "EMP-042",
        "staff_name": "John Doe",
        "department": "IT",
        "status": "Present",
        "checkin_time": "09:05",
        "checkout_time": "--:--",
        "date": "2026-08-23"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "EMP-042")]
    pub staff_id: String,

    #[schema(example = "John Doe")]
    pub staff_name: String,

    /// Free-form on the server side; the form offers a fixed list.
    #[schema(example = "IT")]
    pub department: String,

    pub status: AttendanceStatus,

    #[serde(with = "hhmm")]
    #[schema(example = "09:05", value_type = String)]
    pub checkin_time: NaiveTime,

    /// `--:--` on the wire until the staff member checks out.
    #[serde(with = "hhmm_opt")]
    #[schema(example = "17:30", value_type = String)]
    pub checkout_time: Option<NaiveTime>,

    /// Redundant with the date key the record is bucketed under.
    #[schema(example = "2026-08-23", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// `HH:MM` time-of-day serialization.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// `HH:MM` or the `--:--` sentinel for an unset time.
pub(crate) mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIME_NOT_SET;

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_str(TIME_NOT_SET),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == TIME_NOT_SET {
            return Ok(None);
        }
        NaiveTime::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> AttendanceRecord {
        AttendanceRecord {
            staff_id: "EMP-001".into(),
            staff_name: "Jane Roe".into(),
            department: "HR".into(),
            status: AttendanceStatus::HalfDay,
            checkin_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            checkout_time: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        }
    }

    #[test]
    fn serializes_with_wire_spellings_and_sentinel() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["status"], "Half Day");
        assert_eq!(json["checkin_time"], "09:05");
        assert_eq!(json["checkout_time"], "--:--");
        assert_eq!(json["date"], "2026-08-23");
    }

    #[test]
    fn round_trips_through_json() {
        let mut original = record();
        original.checkout_time = NaiveTime::from_hms_opt(17, 30, 0);

        let json = serde_json::to_string(&original).unwrap();
        let parsed: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn status_parses_form_values() {
        assert_eq!(
            "Half Day".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::HalfDay
        );
        assert_eq!(
            "On Leave".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::OnLeave
        );
        assert!("Sick".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn on_leave_does_not_count_as_present() {
        assert!(AttendanceStatus::Late.counts_as_present());
        assert!(AttendanceStatus::HalfDay.counts_as_present());
        assert!(!AttendanceStatus::OnLeave.counts_as_present());
        assert!(!AttendanceStatus::Absent.counts_as_present());
    }
}

use crate::api::attendance::{MarkAction, MarkAttendanceForm};
use crate::api::stats::StatsResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staff Attendance System API",
        version = "1.0.0",
        description = r#"
## Staff Attendance System

Single-organization attendance tracking over a flat JSON store.

### 🔹 Key Features
- **Check-in / Check-out**
  - One record per staff member per calendar day
  - Checkout time set exactly once
- **Daily Statistics**
  - Present / Late / Absent counts with percentages for today

### 📦 Response Format
- `/mark_attendance` answers with a redirect carrying `message` and `type`
  query parameters
- `/get_stats` answers with JSON

Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::mark_attendance,
        crate::api::stats::get_stats,
    ),
    components(
        schemas(
            MarkAttendanceForm,
            MarkAction,
            StatsResponse,
            AttendanceRecord,
            AttendanceStatus
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance marking and statistics APIs"),
    )
)]
pub struct ApiDoc;

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::model::attendance::AttendanceStatus;
use crate::service::attendance::{AttendanceError, AttendanceService, CheckInRequest};

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendanceForm {
    #[schema(example = "EMP-042")]
    pub staff_id: String,
    #[schema(example = "John Doe")]
    pub staff_name: String,
    #[schema(example = "IT")]
    pub department: String,
    #[schema(example = "Present")]
    pub status: String,
    #[serde(default)]
    pub action: MarkAction,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkAction {
    #[default]
    Checkin,
    Checkout,
}

#[derive(Serialize)]
struct RedirectQuery<'a> {
    message: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Redirect back to the index page carrying the outcome as query
/// parameters; the page surfaces them as a banner.
fn redirect_with(message: &str, kind: &str) -> HttpResponse {
    let query = serde_urlencoded::to_string(RedirectQuery { message, kind }).unwrap_or_default();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/?{query}")))
        .finish()
}

/// Mark attendance endpoint (check-in or check-out)
#[utoipa::path(
    post,
    path = "/mark_attendance",
    request_body(
        content = MarkAttendanceForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Redirects to / with `message` and `type` (success/error) query parameters")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    service: web::Data<AttendanceService>,
    form: web::Form<MarkAttendanceForm>,
) -> actix_web::Result<impl Responder> {
    let form = form.into_inner();
    let staff_id = form.staff_id.trim().to_owned();
    let staff_name = form.staff_name.trim().to_owned();
    let department = form.department.trim().to_owned();
    let status_raw = form.status.trim().to_owned();

    if staff_id.is_empty()
        || staff_name.is_empty()
        || department.is_empty()
        || status_raw.is_empty()
    {
        return Ok(redirect_with("❌ Please fill all fields!", "error"));
    }

    let status = match status_raw.parse::<AttendanceStatus>() {
        Ok(status) => status,
        Err(_) => {
            return Ok(redirect_with(
                &format!("❌ Unknown status: {status_raw}!"),
                "error",
            ));
        }
    };

    let now = Local::now();
    let today = now.date_naive();
    let time = now.time();

    // File IO happens off the async runtime.
    let service = service.into_inner();
    let action = form.action;
    let id = staff_id.clone();
    let name = staff_name.clone();
    let result = web::block(move || match action {
        MarkAction::Checkin => service.check_in(
            CheckInRequest {
                staff_id: id,
                staff_name: name,
                department,
                status,
            },
            today,
            time,
        ),
        MarkAction::Checkout => service.check_out(&id, today, time),
    })
    .await?;

    let time_str = time.format("%H:%M").to_string();
    let (message, kind) = match (action, result) {
        (MarkAction::Checkin, Ok(_)) => (
            format!("✅ {staff_name} checked in successfully at {time_str}!"),
            "success",
        ),
        (MarkAction::Checkout, Ok(_)) => (
            format!("✅ {staff_name} checked out successfully at {time_str}!"),
            "success",
        ),
        (_, Err(AttendanceError::MissingFields)) => {
            ("❌ Please fill all fields!".to_owned(), "error")
        }
        (_, Err(AttendanceError::AlreadyCheckedIn)) => {
            (format!("❌ {staff_name} already checked in today!"), "error")
        }
        (_, Err(AttendanceError::NotCheckedIn)) => {
            (format!("❌ {staff_name} hasn't checked in today!"), "error")
        }
        (_, Err(AttendanceError::AlreadyCheckedOut)) => (
            format!("❌ {staff_name} already checked out today!"),
            "error",
        ),
        (_, Err(AttendanceError::Store(e))) => {
            error!(error = %e, staff_id = %staff_id, "failed to persist attendance");
            (format!("❌ Error: {e}"), "error")
        }
    };

    Ok(redirect_with(&message, kind))
}

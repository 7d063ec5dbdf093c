use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::service::attendance::AttendanceService;
use crate::service::stats::{DailyStats, daily_stats};

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 3)]
    pub total_staff: usize,
    #[schema(example = 2)]
    pub present: usize,
    #[schema(example = 1)]
    pub late: usize,
    #[schema(example = 1)]
    pub absent: usize,
    #[schema(example = 66.7)]
    pub present_percentage: f64,
    #[schema(example = 33.3)]
    pub late_percentage: f64,
    #[schema(example = 33.3)]
    pub absent_percentage: f64,
}

impl From<DailyStats> for StatsResponse {
    fn from(stats: DailyStats) -> Self {
        Self {
            success: true,
            total_staff: stats.total_staff,
            present: stats.present,
            late: stats.late,
            absent: stats.absent,
            present_percentage: stats.present_percentage,
            late_percentage: stats.late_percentage,
            absent_percentage: stats.absent_percentage,
        }
    }
}

/// Today's attendance statistics
#[utoipa::path(
    get,
    path = "/get_stats",
    responses(
        (status = 200, description = "Counts and percentages over today's records", body = StatsResponse),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "success": false,
            "error": "Internal Server Error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_stats(service: web::Data<AttendanceService>) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();

    let service = service.into_inner();
    match web::block(move || service.today_records(today)).await {
        Ok(records) => Ok(HttpResponse::Ok().json(StatsResponse::from(daily_stats(&records)))),
        Err(e) => {
            error!(error = %e, "failed to compute attendance stats");
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Internal Server Error"
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::web::Data;
    use actix_web::{App, test};
    use chrono::NaiveTime;
    use serde_json::Value;

    use super::*;
    use crate::model::attendance::AttendanceStatus;
    use crate::service::attendance::CheckInRequest;
    use crate::store::testing::MemoryStore;

    fn test_service() -> AttendanceService {
        AttendanceService::new(Arc::new(MemoryStore::default()))
    }

    async fn fetch_stats(service: &AttendanceService) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(service.clone()))
                .route("/get_stats", web::get().to(get_stats)),
        )
        .await;

        let req = test::TestRequest::get().uri("/get_stats").to_request();
        test::call_and_read_body_json(&app, req).await
    }

    fn check_in(service: &AttendanceService, staff_id: &str, status: AttendanceStatus) {
        let req = CheckInRequest {
            staff_id: staff_id.into(),
            staff_name: format!("Staff {staff_id}"),
            department: "IT".into(),
            status,
        };
        service
            .check_in(
                req,
                Local::now().date_naive(),
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            )
            .unwrap();
    }

    #[actix_web::test]
    async fn empty_day_returns_all_zeros() {
        let body = fetch_stats(&test_service()).await;

        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["total_staff"], 0);
        assert_eq!(body["present"], 0);
        assert_eq!(body["late"], 0);
        assert_eq!(body["absent"], 0);
        assert_eq!(body["present_percentage"], 0.0);
        assert_eq!(body["late_percentage"], 0.0);
        assert_eq!(body["absent_percentage"], 0.0);
    }

    #[actix_web::test]
    async fn aggregates_today_with_overlapping_present_count() {
        let service = test_service();
        check_in(&service, "1", AttendanceStatus::Present);
        check_in(&service, "2", AttendanceStatus::Late);
        check_in(&service, "3", AttendanceStatus::Absent);

        let body = fetch_stats(&service).await;
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["total_staff"], 3);
        assert_eq!(body["present"], 2);
        assert_eq!(body["late"], 1);
        assert_eq!(body["absent"], 1);
        assert_eq!(body["present_percentage"], 66.7);
        assert_eq!(body["late_percentage"], 33.3);
        assert_eq!(body["absent_percentage"], 33.3);
    }
}

use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub store_path: String,

    // Rate limiting
    pub rate_mark_per_min: u32,
    pub rate_stats_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            store_path: env::var("ATTENDANCE_FILE")
                .unwrap_or_else(|_| "attendance.json".to_string()),

            rate_mark_per_min: env::var("RATE_MARK_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
            rate_stats_per_min: env::var("RATE_STATS_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap(),
        }
    }
}

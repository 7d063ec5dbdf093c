use crate::{
    api::{attendance, stats},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    cfg.service(
        web::resource("/mark_attendance")
            .wrap(build_limiter(config.rate_mark_per_min))
            .route(web::post().to(attendance::mark_attendance)),
    )
    .service(
        web::resource("/get_stats")
            .wrap(build_limiter(config.rate_stats_per_min))
            .route(web::get().to(stats::get_stats)),
    );
}

use crate::api::{calendar, employee, leave, report};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::Context;
use std::sync::Arc;

pub type ApiLimiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` requests with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<ApiLimiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = 60_000 / u64::from(requests_per_min);

    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limit configuration")?;

    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: Arc<ApiLimiter>) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(limiter) // rate limiting
            .configure(api_routes),
    );
}

pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}").route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/leaves")
            // /leaves
            .service(
                web::resource("")
                    .route(web::get().to(leave::leave_list))
                    .route(web::post().to(leave::create_leave)),
            )
            // /leaves/{id}
            .service(web::resource("/{id}").route(web::delete().to(leave::delete_leave))),
    )
    .service(web::resource("/leave-types").route(web::get().to(leave::leave_types)))
    .service(web::resource("/calendar").route(web::get().to(calendar::get_calendar)))
    .service(
        web::scope("/report")
            .service(web::resource("").route(web::get().to(report::leave_report)))
            .service(web::resource("/csv").route(web::get().to(report::leave_report_csv))),
    );
}

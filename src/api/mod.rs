/// Builds an initialized test service with the API mounted under `/api`.
#[cfg(test)]
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($store))
                .service(actix_web::web::scope("/api").configure(crate::routes::api_routes)),
        )
        .await
    };
}

pub mod calendar;
pub mod employee;
pub mod leave;
pub mod report;

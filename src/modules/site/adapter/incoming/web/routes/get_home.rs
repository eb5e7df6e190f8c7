use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/public/home",
    tag = "public",
    responses(
        (status = 200, description = "Everything the landing page renders"),
    )
)]
#[get("/api/public/home")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    // Infallible by contract: missing sections render empty.
    let view = data.fetch_home_use_case.execute().await;
    ApiResponse::success(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::site::application::use_cases::fetch_home::{HomeView, IFetchHomeUseCase};
    use crate::portfolio::domain::entities::{About, Contact, Footer, Profile};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct StubHome;

    #[async_trait]
    impl IFetchHomeUseCase for StubHome {
        async fn execute(&self) -> HomeView {
            HomeView {
                profile: Profile {
                    name: "Jane Doe".into(),
                    ..Default::default()
                },
                about: About::default(),
                skills: Vec::new(),
                educations: Vec::new(),
                experiences: Vec::new(),
                social_works: Vec::new(),
                recent_projects: Vec::new(),
                contact: Contact::default(),
                footer: Footer::default(),
            }
        }
    }

    #[actix_web::test]
    async fn home_is_public_and_always_succeeds() {
        let state = TestAppStateBuilder::default().with_fetch_home(StubHome).build();
        let app = test::init_service(App::new().app_data(state).service(get_home_handler)).await;

        // No Authorization header at all.
        let req = test::TestRequest::get().uri("/api/public/home").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["profile"]["name"], "Jane Doe");
        assert!(json["data"]["recentProjects"].as_array().unwrap().is_empty());
    }
}

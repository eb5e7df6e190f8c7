use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

// Auth
use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequestDto, ForgotPasswordRequestDto, LoginRequestDto, LoginResponse,
    LoginUserInfo, LogoutResponseBody, ResetPasswordRequestDto,
};

// Portfolio admin + public
use crate::portfolio::adapter::incoming::web::routes::{
    ImagePayload, SaveRecordRequest, SaveSingleRequest,
};
use crate::portfolio::domain::entities::{
    About, Achievement, Certificate, Contact, Education, EducationLevel, Experience, Footer,
    ImagePosition, Profile, Project, Settings, Skill, SkillCategory, SkillLevel, SocialWork,
};
use crate::site::application::use_cases::fetch_home::{EducationGroup, HomeView};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Headless CMS for a personal portfolio site: public read \
                       endpoints plus an owner-only admin surface."
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::change_password::change_password_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password::reset_password_handler,

        // Admin content endpoints
        crate::portfolio::adapter::incoming::web::routes::get_records::get_records_handler,
        crate::portfolio::adapter::incoming::web::routes::save_record::save_record_handler,
        crate::portfolio::adapter::incoming::web::routes::delete_record::delete_record_handler,
        crate::portfolio::adapter::incoming::web::routes::get_single::get_single_handler,
        crate::portfolio::adapter::incoming::web::routes::save_single::save_single_handler,

        // Public endpoints
        crate::site::adapter::incoming::web::routes::get_home::get_home_handler,
        crate::site::adapter::incoming::web::routes::get_public_projects::get_public_projects_handler,
        crate::site::adapter::incoming::web::routes::get_public_certificates::get_public_certificates_handler,
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        LoginRequestDto,
        LoginResponse,
        LoginUserInfo,
        LogoutResponseBody,
        ChangePasswordRequestDto,
        ForgotPasswordRequestDto,
        ResetPasswordRequestDto,
        ImagePayload,
        SaveRecordRequest,
        SaveSingleRequest,
        Project,
        Certificate,
        Achievement,
        Skill,
        Education,
        Experience,
        SocialWork,
        Profile,
        About,
        Contact,
        Footer,
        Settings,
        SkillCategory,
        SkillLevel,
        EducationLevel,
        ImagePosition,
        HomeView,
        EducationGroup,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "public", description = "Read-only endpoints the site renders from"),
        (name = "admin", description = "Owner-only content editing"),
        (name = "auth", description = "Owner session management"),
    )
)]
pub struct ApiDoc;

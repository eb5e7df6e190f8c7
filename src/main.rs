pub mod modules;
pub use modules::auth;
pub use modules::media;
pub use modules::portfolio;
pub use modules::site;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::reset_token_redis::RedisResetTokenRepository;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::smtp_reset_mailer::SmtpResetMailer;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, ResetMailer, ResetTokenRepository, TokenBlacklist, TokenProvider,
    UserRepository,
};
use crate::auth::application::use_cases::{
    bootstrap_admin::AdminBootstrap,
    change_password::{ChangePasswordUseCase, IChangePasswordUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    request_password_reset::{IRequestPasswordResetUseCase, RequestPasswordResetUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
};

use crate::media::adapter::outgoing::cloud_storage::blob_store_gcs::GcsBlobStore;
use crate::media::application::ports::outgoing::blob_store::BlobStore;

use crate::portfolio::adapter::outgoing::document_store_postgres::DocumentStorePostgres;
use crate::portfolio::application::ports::outgoing::document_store::DocumentStore;
use crate::portfolio::application::use_cases::{
    delete_record::{DeleteRecordUseCase, IDeleteRecordUseCase},
    fetch_records::{FetchRecordsUseCase, IFetchRecordsUseCase},
    fetch_single::{FetchSingleUseCase, IFetchSingleUseCase},
    save_record::{ISaveRecordUseCase, SaveRecordUseCase},
    save_single::{ISaveSingleUseCase, SaveSingleUseCase},
};

use crate::site::application::use_cases::{
    fetch_home::{FetchHomeUseCase, IFetchHomeUseCase},
    search_certificates::{ISearchCertificatesUseCase, SearchCertificatesUseCase},
    search_projects::{ISearchProjectsUseCase, SearchProjectsUseCase},
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub fetch_records_use_case: Arc<dyn IFetchRecordsUseCase + Send + Sync>,
    pub save_record_use_case: Arc<dyn ISaveRecordUseCase + Send + Sync>,
    pub delete_record_use_case: Arc<dyn IDeleteRecordUseCase + Send + Sync>,
    pub fetch_single_use_case: Arc<dyn IFetchSingleUseCase + Send + Sync>,
    pub save_single_use_case: Arc<dyn ISaveSingleUseCase + Send + Sync>,
    pub fetch_home_use_case: Arc<dyn IFetchHomeUseCase + Send + Sync>,
    pub search_projects_use_case: Arc<dyn ISearchProjectsUseCase + Send + Sync>,
    pub search_certificates_use_case: Arc<dyn ISearchCertificatesUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub request_password_reset_use_case: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let public_base_url =
        env::var("PUBLIC_BASE_URL").expect("PUBLIC_BASE_URL is not set in .env file");

    // SMTP setup
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let reset_mailer = if env_name == "test" {
        // Local Mailpit
        let smtp_host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpResetMailer::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpResetMailer::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Outgoing adapters
    let document_store: Arc<dyn DocumentStore> =
        Arc::new(DocumentStorePostgres::new(Arc::clone(&db_arc)));
    let blob_store: Arc<dyn BlobStore> = Arc::new(GcsBlobStore::from_env());
    let user_repo: Arc<dyn UserRepository> =
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_blacklist: Arc<dyn TokenBlacklist> =
        Arc::new(RedisTokenBlacklist::new(Arc::clone(&redis_arc)));
    let reset_tokens: Arc<dyn ResetTokenRepository> =
        Arc::new(RedisResetTokenRepository::new(Arc::clone(&redis_arc)));
    let reset_mailer_arc: Arc<dyn ResetMailer> = Arc::new(reset_mailer);

    // First-boot admin account
    match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(admin_email), Ok(admin_password)) => {
            let bootstrap =
                AdminBootstrap::new(Arc::clone(&user_repo), Arc::clone(&password_hasher));
            bootstrap
                .ensure(&admin_email, &admin_password)
                .await
                .expect("Failed to bootstrap admin account");
        }
        _ => {
            tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; skipping admin bootstrap");
        }
    }

    // Use cases
    let state = AppState {
        fetch_records_use_case: Arc::new(FetchRecordsUseCase::new(Arc::clone(&document_store))),
        save_record_use_case: Arc::new(SaveRecordUseCase::new(
            Arc::clone(&document_store),
            Arc::clone(&blob_store),
        )),
        delete_record_use_case: Arc::new(DeleteRecordUseCase::new(Arc::clone(&document_store))),
        fetch_single_use_case: Arc::new(FetchSingleUseCase::new(Arc::clone(&document_store))),
        save_single_use_case: Arc::new(SaveSingleUseCase::new(
            Arc::clone(&document_store),
            Arc::clone(&blob_store),
        )),
        fetch_home_use_case: Arc::new(FetchHomeUseCase::new(Arc::clone(&document_store))),
        search_projects_use_case: Arc::new(SearchProjectsUseCase::new(Arc::clone(
            &document_store,
        ))),
        search_certificates_use_case: Arc::new(SearchCertificatesUseCase::new(Arc::clone(
            &document_store,
        ))),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::new(jwt_service.clone()),
        )),
        logout_use_case: Arc::new(LogoutUseCase::new(
            Arc::new(jwt_service.clone()),
            Arc::clone(&token_blacklist),
        )),
        change_password_use_case: Arc::new(ChangePasswordUseCase::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        )),
        request_password_reset_use_case: Arc::new(RequestPasswordResetUseCase::new(
            Arc::clone(&user_repo),
            Arc::clone(&reset_tokens),
            Arc::clone(&reset_mailer_arc),
            public_base_url,
        )),
        reset_password_use_case: Arc::new(ResetPasswordUseCase::new(
            Arc::clone(&user_repo),
            Arc::clone(&reset_tokens),
            Arc::clone(&password_hasher),
        )),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let blacklist_for_guard: Arc<dyn TokenBlacklist + Send + Sync> =
        Arc::new(RedisTokenBlacklist::new(Arc::clone(&redis_arc)));
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&blacklist_for_guard)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(crate::site::adapter::incoming::web::routes::get_home_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_public_projects_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_public_certificates_handler);
    // Admin content
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_records_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::save_record_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_record_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_single_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::save_single_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

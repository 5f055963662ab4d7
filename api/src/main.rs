use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use av_api::middleware::{cors, SessionVerifier};
use av_api::routes::{self, auth::AppState};
use av_core::services::auth::AuthService;
use av_core::services::token::{TokenConfig, TokenService};
use av_infra::database::connection::DatabasePool;
use av_infra::database::mysql::MySqlAccountRepository;
use av_infra::password::BcryptPasswordVerifier;
use av_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AccountVault API server");

    // Missing configuration is fatal at startup, never a request-time error.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match DatabasePool::new(config.database.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("database connection failed: {}", e);
            std::process::exit(1);
        }
    };
    match pool.health_check().await {
        Ok(true) => info!("Connected to database"),
        Ok(false) => {
            error!("database health check returned an unexpected result");
            std::process::exit(1);
        }
        Err(e) => {
            error!("database health check failed: {}", e);
            std::process::exit(1);
        }
    }

    let token_service = match TokenService::new(TokenConfig::new(config.token_keys.clone())) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("token service initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    let account_repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let password_verifier = Arc::new(BcryptPasswordVerifier::new());
    let auth_service = Arc::new(AuthService::new(
        account_repository,
        password_verifier,
        token_service,
    ));
    let session_verifier: Arc<dyn SessionVerifier> = auth_service.clone();

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors::create_cors())
            .app_data(web::Data::new(AppState {
                auth_service: auth_service.clone(),
            }))
            .app_data(web::Data::new(session_verifier.clone()))
            .route("/health", web::get().to(routes::health_check))
            .service(
                web::scope("/api/v1/auth").configure(
                    routes::auth::configure::<MySqlAccountRepository, BcryptPasswordVerifier>,
                ),
            )
    })
    .bind(&bind_address)?
    .run()
    .await;

    pool.close().await;
    result
}

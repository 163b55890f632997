//! 소셜 네트워크 백엔드 실행 파일
//!
//! 설정 파일을 읽고 로거를 켠 뒤, 저장소와 서비스를 조립해 HTTP 서버를 띄웁니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use social_network_backend::config::ServerConfig;
use social_network_backend::core::ServiceContainer;
use social_network_backend::routes::configure_all_routes;

/// 요청 속도 제한 값
#[derive(Debug)]
struct RateLimit {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let profile = load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
    info!("🚀 소셜 네트워크 백엔드 시작 (profile={})", profile);

    let container = ServiceContainer::from_config()
        .await
        .expect("서비스 초기화 실패");
    info!("✅ 서비스 구성 완료");

    run_server(container).await
}

/// `PROFILE`(dev | prod)에 맞는 `.env.*` 파일을 읽고, 없으면 `.env`를 읽습니다.
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로만 남깁니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv::dotenv(),
    };
    if let Err(e) = loaded {
        eprintln!("환경 파일을 읽지 못했습니다 (profile={}): {}", profile, e);
    }

    profile
}

/// 미들웨어 순서: 속도 제한 → CORS → 접근 로그 → 경로 정규화
async fn run_server(container: ServiceContainer) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let rate_limit = rate_limit_from_env();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 오류");

    info!("🛡️ 요청 제한: {:?}", rate_limit);
    info!("🌐 http://{} (health: /health, API: /api)", bind_address);

    HttpServer::new(move || {
        let container = container.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| container.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// 로컬 프론트엔드(React 개발 서버)와 자체 포트만 허용
fn cors() -> Cors {
    let origins = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:5000",
        "http://127.0.0.1:5000",
    ];

    origins
        .into_iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}

/// `RATE_LIMIT_PER_SECOND`(기본 100), `RATE_LIMIT_BURST_SIZE`(기본 200)
fn rate_limit_from_env() -> RateLimit {
    RateLimit {
        per_second: env_number("RATE_LIMIT_PER_SECOND", 100),
        burst_size: env_number("RATE_LIMIT_BURST_SIZE", 200),
    }
}

fn env_number<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            error!("{} 파싱 실패 ({}): 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => {
            warn!("{} 미설정: 기본값 {} 사용", key, default);
            default
        }
    }
}

//! API 라우트 설정 모듈
//!
//! 기능별 스코프와 인증 레벨을 한곳에서 정의합니다.
//!
//! | 스코프 | 미들웨어 | 비고 |
//! |--------|----------|------|
//! | `/api/users` | 없음 | 회원가입 |
//! | `/api/auth` | `AuthMiddleware::optional()` | 로그인은 공개, 조회는 추출자가 인증 요구 |
//! | `/api/profile` | `AuthMiddleware::optional()` | 공개 조회와 본인 전용 변경이 섞여 있음 |
//! | `/api/post` | `AuthMiddleware::required()` | 전체 인증 필요 |
//! | `/health` | 없음 | 헬스체크 |
//!
//! 서비스는 [`ServiceContainer::configure`](crate::core::ServiceContainer::configure)로
//! 먼저 등록되어 있어야 합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .configure(|cfg| container.configure(cfg))
//!     .configure(configure_all_routes)
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
    configure_post_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/users").service(handlers::users::register_user));
}

/// 로그인과 현재 사용자 조회
///
/// ```bash
/// curl -X POST http://localhost:5000/api/auth \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"secret1"}'
///
/// curl http://localhost:5000/api/auth -H "Authorization: Bearer eyJhbGciOi..."
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::current_user)
            .service(handlers::auth::login),
    );
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile")
            .wrap(AuthMiddleware::optional())
            .service(handlers::profiles::get_my_profile)
            .service(handlers::profiles::get_profile_by_user)
            .service(handlers::profiles::add_experience)
            .service(handlers::profiles::remove_experience)
            .service(handlers::profiles::github_repos)
            .service(handlers::profiles::upsert_profile)
            .service(handlers::profiles::list_profiles)
            .service(handlers::profiles::delete_account),
    );
}

/// 게시글 라우트
///
/// `/like/{id}`, `/comment/{id}`가 `/{post_id}`보다 먼저 등록되어야
/// `like`, `comment`가 게시글 id로 해석되지 않습니다.
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/post")
            .wrap(AuthMiddleware::required())
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::remove_comment)
            .service(handlers::posts::create_post)
            .service(handlers::posts::list_posts)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_network_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_network_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "authentication": "JWT (HS256)"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ServiceContainer;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    macro_rules! test_app {
        ($container:expr) => {{
            let container = $container.clone();
            test::init_service(
                App::new()
                    .configure(move |cfg| container.configure(cfg))
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    /// 가입 후 발급된 토큰을 반환
    macro_rules! register {
        ($app:expr, $name:expr, $email:expr) => {{
            let request = test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "name": $name, "email": $email, "password": "secret1" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&$app, request).await;
            body["token"].as_str().unwrap().to_string()
        }};
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);

        let response = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_login_and_current_user() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);

        let token = register!(app, "Kim", "Kim@Example.com");

        let request = test::TestRequest::get()
            .uri("/api/auth")
            .insert_header(bearer(&token))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(me["email"], "kim@example.com");
        assert!(me.get("password").is_none());

        let request = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "email": "kim@example.com", "password": "secret1" }))
            .to_request();
        let login: Value = test::call_and_read_body_json(&app, request).await;
        assert!(login["token"].as_str().is_some());

        let request = test::TestRequest::post()
            .uri("/api/auth")
            .set_json(json!({ "email": "kim@example.com", "password": "wrong-password" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["errors"][0]["message"], "Invalid credentials");
    }

    #[actix_web::test]
    async fn test_register_rejects_taken_email_and_invalid_input() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);
        register!(app, "Kim", "kim@example.com");

        let request = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Other", "email": "kim@example.com", "password": "secret1" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "email");
        assert_eq!(body["errors"][0]["message"], "User already exists");

        let request = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "", "email": "not-an-email", "password": "123" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_malformed_json_body_is_reported_as_validation_error() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);

        let request = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[actix_web::test]
    async fn test_protected_routes_require_token() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);

        for request in [
            test::TestRequest::get().uri("/api/post").to_request(),
            test::TestRequest::get().uri("/api/auth").to_request(),
            test::TestRequest::get().uri("/api/profile/me").to_request(),
            test::TestRequest::delete().uri("/api/profile").to_request(),
        ] {
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["msg"], "No token, authorization denied");
        }

        let request = test::TestRequest::get()
            .uri("/api/post")
            .insert_header(bearer("garbage"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[actix_web::test]
    async fn test_profile_lifecycle() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);
        let token = register!(app, "Park", "park@example.com");

        let request = test::TestRequest::get()
            .uri("/api/profile/me")
            .insert_header(bearer(&token))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request = test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(bearer(&token))
            .set_json(json!({ "age": 30, "gender": "male", "skills": "rust, sql", "github": "park" }))
            .to_request();
        let profile: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(profile["skills"], json!(["rust", "sql"]));
        assert_eq!(profile["age"], "30");

        // 두 번째 upsert는 같은 프로필을 갱신
        let request = test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(bearer(&token))
            .set_json(json!({ "age": "31", "gender": "male", "skills": "rust", "bio": "hi" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(updated["_id"], profile["_id"]);
        assert_eq!(updated["social"]["github"], "park");

        let request = test::TestRequest::get().uri("/api/profile").to_request();
        let all: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
        assert_eq!(all[0]["user"]["name"], "Park");

        let request = test::TestRequest::put()
            .uri("/api/profile/experience")
            .insert_header(bearer(&token))
            .set_json(json!({ "title": "Engineer", "company": "Acme", "from": "2020-01-01" }))
            .to_request();
        let with_experience: Value = test::call_and_read_body_json(&app, request).await;
        let exp_id = with_experience["experience"][0]["_id"].as_str().unwrap().to_string();

        let request = test::TestRequest::delete()
            .uri(&format!("/api/profile/experience/{}", exp_id))
            .insert_header(bearer(&token))
            .to_request();
        let without: Value = test::call_and_read_body_json(&app, request).await;
        assert!(without["experience"].as_array().unwrap().is_empty());

        let request = test::TestRequest::get()
            .uri("/api/auth")
            .insert_header(bearer(&token))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, request).await;
        let user_id = me["_id"].as_str().unwrap().to_string();
        let request = test::TestRequest::get()
            .uri(&format!("/api/profile/user/{}", user_id))
            .to_request();
        let public: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(public["bio"], "hi");

        let request = test::TestRequest::delete()
            .uri("/api/profile")
            .insert_header(bearer(&token))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(test::read_body(response).await, "User deleted");

        let request = test::TestRequest::get()
            .uri(&format!("/api/profile/user/{}", user_id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["msg"], "There is no profile for this user");
    }

    #[actix_web::test]
    async fn test_profile_requires_fields() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);
        let token = register!(app, "Park", "park@example.com");

        let request = test::TestRequest::post()
            .uri("/api/profile")
            .insert_header(bearer(&token))
            .set_json(json!({ "company": "Acme" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_post_like_and_comment_flow() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);
        let author = register!(app, "Author", "author@example.com");
        let reader = register!(app, "Reader", "reader@example.com");

        let request = test::TestRequest::post()
            .uri("/api/post")
            .insert_header(bearer(&author))
            .set_json(json!({ "text": "hello" }))
            .to_request();
        let post: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(post["text"], "hello");
        assert_eq!(post["likes"], json!([]));
        assert_eq!(post["comments"], json!([]));
        let post_id = post["_id"].as_str().unwrap().to_string();

        let request = test::TestRequest::put()
            .uri(&format!("/api/post/like/{}", post_id))
            .insert_header(bearer(&reader))
            .to_request();
        let likes: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(likes.as_array().unwrap().len(), 1);
        assert_eq!(likes[0]["name"], "Reader");

        let request = test::TestRequest::put()
            .uri(&format!("/api/post/like/{}", post_id))
            .insert_header(bearer(&reader))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["msg"], "Already liked");

        let request = test::TestRequest::delete()
            .uri(&format!("/api/post/like/{}", post_id))
            .insert_header(bearer(&reader))
            .to_request();
        let likes: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(likes, json!([]));

        let request = test::TestRequest::put()
            .uri(&format!("/api/post/comment/{}", post_id))
            .insert_header(bearer(&reader))
            .set_json(json!({ "text": "nice" }))
            .to_request();
        let commented: Value = test::call_and_read_body_json(&app, request).await;
        let comment_id = commented["comments"][0]["_id"].as_str().unwrap().to_string();

        // 작성자가 아닌 사용자는 댓글과 게시글을 지울 수 없음
        let request = test::TestRequest::delete()
            .uri(&format!("/api/post/comment/{}/{}", post_id, comment_id))
            .insert_header(bearer(&author))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request = test::TestRequest::delete()
            .uri(&format!("/api/post/{}", post_id))
            .insert_header(bearer(&reader))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request = test::TestRequest::delete()
            .uri(&format!("/api/post/comment/{}/{}", post_id, comment_id))
            .insert_header(bearer(&reader))
            .to_request();
        let uncommented: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(uncommented["comments"], json!([]));

        let request = test::TestRequest::delete()
            .uri(&format!("/api/post/{}", post_id))
            .insert_header(bearer(&author))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(test::read_body(response).await, "Post deleted");

        let request = test::TestRequest::get()
            .uri(&format!("/api/post/{}", post_id))
            .insert_header(bearer(&author))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["msg"], "Post not found");
    }

    #[actix_web::test]
    async fn test_posts_listed_newest_first() {
        let container = ServiceContainer::in_memory();
        let app = test_app!(container);
        let token = register!(app, "Author", "author@example.com");

        for text in ["first", "second"] {
            let request = test::TestRequest::post()
                .uri("/api/post")
                .insert_header(bearer(&token))
                .set_json(json!({ "text": text }))
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
            tokio_sleep().await;
        }

        let request = test::TestRequest::get()
            .uri("/api/post")
            .insert_header(bearer(&token))
            .to_request();
        let posts: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(posts[0]["text"], "second");
        assert_eq!(posts[1]["text"], "first");
    }

    async fn tokio_sleep() {
        actix_web::rt::time::sleep(std::time::Duration::from_millis(5)).await;
    }
}

//! JWT 인증 미들웨어 팩토리
//!
//! 스코프 단위로 `.wrap()`하여 사용합니다. 검증에는 앱 데이터로 등록된
//! `web::Data<TokenService>`를 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 미들웨어
///
/// | 모드 | 토큰 없음 | 잘못된 토큰 | 유효한 토큰 |
/// |------|-----------|-------------|-------------|
/// | `Required` | 401 | 401 | 통과 + 사용자 주입 |
/// | `Optional` | 통과 | 통과 (실패 사유 기록) | 통과 + 사용자 주입 |
pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 모든 요청에 유효한 토큰이 필요
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 토큰이 있으면 검증하고, 인증 여부는 핸들러의 추출자가 결정
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    use crate::domain::entities::users::User;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn open() -> HttpResponse {
        HttpResponse::Ok().body("open")
    }

    fn token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new("middleware-secret", 1))
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_and_invalid_tokens() {
        let app = test::init_service(
            App::new().app_data(token_service()).service(
                web::scope("/secure")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/secure").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["msg"], "No token, authorization denied");

        let req = test::TestRequest::get()
            .uri("/secure")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[actix_web::test]
    async fn test_required_mode_injects_user() {
        let tokens = token_service();
        let user = User::new("Kim".into(), "kim@example.com".into(), "hash".into(), "avatar".into());
        let token = tokens.generate_token(&user).unwrap();

        let app = test::init_service(
            App::new().app_data(tokens.clone()).service(
                web::scope("/secure")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/secure")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user.id_string().as_bytes());
    }

    #[actix_web::test]
    async fn test_optional_mode_lets_anonymous_requests_through() {
        let app = test::init_service(
            App::new().app_data(token_service()).service(
                web::scope("/maybe")
                    .wrap(AuthMiddleware::optional())
                    .route("/open", web::get().to(open))
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/maybe/open").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get()
            .uri("/maybe/open")
            .insert_header(("Authorization", "Bearer broken"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get()
            .uri("/maybe/me")
            .insert_header(("Authorization", "Bearer broken"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["msg"], "Token is not valid");
    }
}

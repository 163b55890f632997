use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::{AuthMode, AuthRejection, AuthenticatedUser};
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 실제 요청을 처리하는 인증 미들웨어 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            let auth_result = authenticate(&req);

            match (&mode, auth_result) {
                (_, Ok(Some(user))) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Required, Ok(None)) => {
                    let err = AppError::AuthenticationError("No token, authorization denied".to_string());
                    return Ok(reject(req, err));
                }
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
                (AuthMode::Optional, Ok(None)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증 실패, 요청 진행: {}", err);
                    req.extensions_mut().insert(AuthRejection(err.public_message()));
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// 요청 헤더에서 사용자를 인증합니다.
///
/// * `Ok(None)` - `Authorization` 헤더 없음
/// * `Err(AuthenticationError)` - 형식 오류, 서명/만료 검증 실패
fn authenticate(req: &ServiceRequest) -> Result<Option<AuthenticatedUser>, AppError> {
    let Some(header) = req.headers().get("Authorization") else {
        return Ok(None);
    };

    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let header = header
        .to_str()
        .map_err(|_| AppError::AuthenticationError("Token is not valid".to_string()))?;
    let token = token_service.extract_bearer_token(header)?;
    let claims = token_service.verify_token(token)?;

    let user = AuthenticatedUser::new(claims.sub);
    // 주체가 ObjectId가 아니면 유효하지 않은 토큰
    user.object_id()?;

    Ok(Some(user))
}

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 검증에 성공하면 request extensions에 넣어 둡니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (16진수 문자열)
    pub user_id: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// 토큰 주체를 `ObjectId`로 변환합니다.
    ///
    /// 서명은 유효하지만 주체가 ObjectId가 아닌 토큰은 유효하지 않은 토큰으로 봅니다.
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::AuthenticationError("Token is not valid".to_string()))
    }
}

/// 선택적 인증 스코프에서 토큰이 있었지만 검증에 실패한 경우 남기는 표식
///
/// 추출자가 "토큰 없음" 대신 실제 실패 사유로 응답하게 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRejection(pub String);

/// ActixWeb FromRequest trait 구현
///
/// 선택적 인증 스코프에서도 이 추출자를 쓰는 핸들러는 인증이 필수가 됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let extensions = req.extensions();
        if let Some(user) = extensions.get::<AuthenticatedUser>() {
            return ready(Ok(user.clone()));
        }

        let message = extensions
            .get::<AuthRejection>()
            .map(|rejection| rejection.0.clone())
            .unwrap_or_else(|| "No token, authorization denied".to_string());
        ready(Err(AppError::AuthenticationError(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser::new("64b7f0c2a1b2c3d4e5f60718"));

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.object_id().unwrap().to_hex(), "64b7f0c2a1b2c3d4e5f60718");
    }

    #[actix_web::test]
    async fn test_missing_user_is_authentication_error() {
        let req = TestRequest::default().to_http_request();

        match AuthenticatedUser::extract(&req).await {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "No token, authorization denied")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_rejection_reason_is_reported() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthRejection("Token is not valid".to_string()));

        match AuthenticatedUser::extract(&req).await {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, "Token is not valid"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

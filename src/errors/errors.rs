//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 에러를
//! 일관된 JSON 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! | 변형 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | `ValidationError` | 400 | `{"errors": [{"field": ..., "message": ...}]}` |
//! | `NotFound`, `ConflictError`, `AuthorizationError` | 400 | `{"msg": ...}` |
//! | `AuthenticationError` | 401 | `{"msg": ...}` |
//! | `ExternalServiceError` | 404 | `{"msg": ...}` |
//! | `DatabaseError`, `InternalError` | 500 | `{"msg": "Server error"}` |
//!
//! 500 계열 에러의 상세 내용은 로그에만 남기고 클라이언트에는 노출하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_post(&self, id: &str) -> Result<PostResponse, AppError> {
//!     let post = self.posts.find_by_id(&oid).await?
//!         .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
//!     Ok(PostResponse::from(post))
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse};
use actix_web::error::JsonPayloadError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// 필드 단위 검증 에러
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// 문제가 된 요청 필드 이름
    pub field: String,
    /// 사람이 읽을 수 있는 메시지
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {}", describe_fields(.0))]
    ValidationError(Vec<FieldError>),

    /// 참조한 리소스가 없음 (400 Bad Request)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (400 Bad Request)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 소유권 불일치 (400 Bad Request)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (404 Not Found)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn describe_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// 단일 필드 검증 에러를 생성합니다.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, message)])
    }

    /// 클라이언트에게 보여줄 메시지
    ///
    /// 500 계열은 내부 정보를 숨기고 고정 문구를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ExternalServiceError(msg) => msg.clone(),
            AppError::ValidationError(errors) => describe_fields(errors),
            AppError::DatabaseError(_) | AppError::InternalError(_) => "Server error".to_string(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();

        // HashMap 순서에 의존하지 않도록 정렬
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(fields)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::NotFound(_)
            | AppError::ConflictError(_)
            | AppError::AuthorizationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::ValidationError(errors) => {
                HttpResponse::build(status).json(serde_json::json!({ "errors": errors }))
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                HttpResponse::build(status).json(serde_json::json!({ "msg": self.public_message() }))
            }
            _ => HttpResponse::build(status).json(serde_json::json!({ "msg": self.public_message() })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

/// JSON 본문 파싱 실패를 검증 에러 형식으로 변환합니다.
///
/// `web::JsonConfig::error_handler`에 등록하여 사용합니다.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::validation("body", format!("Invalid request body: {}", err)).into()
}

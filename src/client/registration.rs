//! 회원가입 클라이언트
//!
//! 가입 폼을 `POST {base}/api/users`로 보내고, 결과를 토큰 또는
//! 화면에 띄울 경고 목록으로 돌려줍니다.
//!
//! ```rust,ignore
//! let client = RegistrationClient::new("http://localhost:5000");
//! match client.register(&form).await {
//!     RegistrationOutcome::Registered { token } => store_token(token),
//!     RegistrationOutcome::Rejected(alerts) => show(alerts),
//! }
//! ```

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::dto::users::{RegisterRequest, TokenResponse};

/// 경고 수준. 가입 흐름은 실패 경고만 만듭니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
}

/// 사용자에게 보여줄 경고 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Danger,
        }
    }
}

/// 회원가입 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered { token: String },
    Rejected(Vec<Alert>),
}

pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn register_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    /// 가입 요청
    ///
    /// 네트워크 오류도 실패 경고 한 건으로 변환되므로 이 함수는 실패하지 않습니다.
    pub async fn register(&self, form: &RegisterRequest) -> RegistrationOutcome {
        let response = match self
            .http
            .post(self.register_url())
            .header(CONTENT_TYPE, "application/json")
            .json(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("회원가입 요청 실패: {}", e);
                return RegistrationOutcome::Rejected(vec![Alert::danger(
                    "Unable to reach the server",
                )]);
            }
        };

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            if let Ok(TokenResponse { token }) = serde_json::from_value(body) {
                return RegistrationOutcome::Registered { token };
            }
            return RegistrationOutcome::Rejected(vec![Alert::danger("Unexpected server response")]);
        }

        log::debug!("회원가입 거절: {}", status);
        RegistrationOutcome::Rejected(alerts_from_body(&body, status.as_u16()))
    }
}

/// 에러 응답 본문을 경고 목록으로 변환합니다.
///
/// `errors[].message`를 우선 사용하고, 없으면 `msg`, 그것도 없으면 상태 코드를 씁니다.
pub fn alerts_from_body(body: &Value, status: u16) -> Vec<Alert> {
    let field_alerts: Vec<Alert> = body
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error.get("message").and_then(Value::as_str))
                .map(Alert::danger)
                .collect()
        })
        .unwrap_or_default();

    if !field_alerts.is_empty() {
        return field_alerts;
    }

    match body.get("msg").and_then(Value::as_str) {
        Some(msg) => vec![Alert::danger(msg)],
        None => vec![Alert::danger(format!("Registration failed ({})", status))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ServiceContainer;
    use crate::routes::configure_all_routes;
    use actix_web::{App, HttpServer};
    use serde_json::json;

    fn form(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Kim".into(),
            email: email.into(),
            password: "secret1".into(),
        }
    }

    /// 임의 포트에 실제 서버를 띄우고 기본 URL을 반환
    fn spawn_server() -> String {
        let container = ServiceContainer::in_memory();
        let server = HttpServer::new(move || {
            let container = container.clone();
            App::new()
                .configure(move |cfg| container.configure(cfg))
                .configure(configure_all_routes)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}", address)
    }

    #[test]
    fn test_alerts_prefer_field_errors() {
        let body = json!({
            "errors": [
                { "field": "email", "message": "Please include a valid email" },
                { "field": "password", "message": "Please enter a password with 6 or more characters" }
            ]
        });
        let alerts = alerts_from_body(&body, 400);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].message, "Please include a valid email");
        assert!(alerts.iter().all(|alert| alert.kind == AlertKind::Danger));
    }

    #[test]
    fn test_alerts_fall_back_to_msg_and_status() {
        assert_eq!(
            alerts_from_body(&json!({ "msg": "Server error" }), 500),
            vec![Alert::danger("Server error")]
        );
        assert_eq!(
            alerts_from_body(&Value::Null, 502),
            vec![Alert::danger("Registration failed (502)")]
        );
    }

    #[test]
    fn test_alert_serializes_as_danger() {
        let alert = serde_json::to_value(Alert::danger("User already exists")).unwrap();
        assert_eq!(alert, json!({ "message": "User already exists", "kind": "danger" }));
    }

    #[test]
    fn test_register_url_trims_trailing_slash() {
        let client = RegistrationClient::new("http://localhost:5000/");
        assert_eq!(client.register_url(), "http://localhost:5000/api/users");
    }

    #[actix_web::test]
    async fn test_register_against_running_server() {
        let client = RegistrationClient::new(spawn_server());

        match client.register(&form("client@example.com")).await {
            RegistrationOutcome::Registered { token } => assert!(!token.is_empty()),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let outcome = client.register(&form("client@example.com")).await;
        assert_eq!(
            outcome,
            RegistrationOutcome::Rejected(vec![Alert::danger("User already exists")])
        );
    }

    #[actix_web::test]
    async fn test_unreachable_server_yields_single_alert() {
        let client = RegistrationClient::new("http://127.0.0.1:9");

        match client.register(&form("nobody@example.com")).await {
            RegistrationOutcome::Rejected(alerts) => assert_eq!(alerts.len(), 1),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}

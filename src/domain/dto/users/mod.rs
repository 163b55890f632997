//! # User Data Transfer Objects Module
//!
//! 회원가입, 로그인, 현재 사용자 조회 API의 요청/응답 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs    # POST /api/users
//! │   └── auth_request.rs        # POST /api/auth
//! └── response/
//!     └── user_response.rs       # UserResponse, TokenResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

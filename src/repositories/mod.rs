//! # Repository Layer
//!
//! 엔티티별 데이터 액세스 trait과 두 가지 구현을 제공합니다.
//!
//! | trait | MongoDB 구현 | 메모리 구현 |
//! |-------|--------------|-------------|
//! | [`UserRepository`](users::UserRepository) | [`MongoUserRepository`](users::MongoUserRepository) | [`MemoryStore`](memory::MemoryStore) |
//! | [`ProfileRepository`](profiles::ProfileRepository) | [`MongoProfileRepository`](profiles::MongoProfileRepository) | [`MemoryStore`](memory::MemoryStore) |
//! | [`PostRepository`](posts::PostRepository) | [`MongoPostRepository`](posts::MongoPostRepository) | [`MemoryStore`](memory::MemoryStore) |
//!
//! 서비스는 `Arc<dyn ...Repository>`만 알고 있으며, 어떤 구현을 쓸지는
//! [`ServiceContainer`](crate::core::ServiceContainer)가 시작 시점에 결정합니다.
//!
//! 하위 문서 배열(좋아요, 댓글, 경력) 변경은 단일 문서 원자 연산으로 처리하고,
//! 조건에 맞는 문서가 없으면 `Ok(None)`을 돌려줍니다. 없음과 충돌의 구분은
//! 서비스 계층의 몫입니다.

pub mod memory;
pub mod posts;
pub mod profiles;
pub mod users;

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

use crate::errors::AppError;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반 여부
///
/// `insert_one`은 쓰기 에러로, `find_one_and_update`(upsert)는 명령 에러로 보고합니다.
pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

pub(crate) fn db_error(error: MongoError) -> AppError {
    AppError::DatabaseError(error.to_string())
}

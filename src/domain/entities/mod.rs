//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 문서 구조체들입니다.
//!
//! | 엔티티 | 컬렉션 | 하위 문서 |
//! |--------|--------|-----------|
//! | [`users::User`] | `users` | - |
//! | [`profiles::Profile`] | `profiles` | `experience[]`, `social` |
//! | [`posts::Post`] | `posts` | `likes[]`, `comments[]` |
//!
//! 모든 엔티티는 `#[serde(rename = "_id")]`로 MongoDB `_id`와 매핑되며,
//! 하위 문서도 각자의 `ObjectId`를 가집니다(좋아요 제외, 좋아요는 `user`로 식별).

pub mod posts;
pub mod profiles;
pub mod users;

//! Profiles Entity Module

pub mod profile;

pub use profile::{Experience, Profile, ProfileFields, ProfileWithOwner, SocialLinks, experience_document};

pub mod experience_request;
pub mod profile_request;

pub use experience_request::ExperienceRequest;
pub use profile_request::UpsertProfileRequest;

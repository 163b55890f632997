pub mod profile_response;

pub use profile_response::{ExperienceResponse, OwnerResponse, ProfileOwner, ProfileResponse};

pub mod certificate;
pub mod experience;
pub mod recommendation;
pub mod upload;
pub mod user;

pub use certificate::CertificateDetail;
pub use experience::ExperienceDetail;
pub use recommendation::{Recommendation, RecommendationStatus};
pub use upload::FileUpload;
pub use user::{ExperienceBucket, SkkLevel, UserProfile, skk_level_options};

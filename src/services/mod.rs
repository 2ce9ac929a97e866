pub mod api;
pub mod auth_services;
pub mod talent_services;
pub mod traits;
pub mod user_services;

pub use api::{ApiClient, ApiError};
pub use auth_services::AuthService;
pub use talent_services::{CertificateService, ExperienceService, RecommendationService};
pub use traits::{AuthApi, CertificateApi, ExperienceApi, RecommendationApi, UserApi};
pub use user_services::UserService;

pub mod auth_dtos;
pub mod response_dtos;
pub mod talent_dtos;
// alias supaya dapat dipanggil sebagai `crate::dtos::auth` dan `crate::dtos::talent`
pub use self::auth_dtos as auth;
pub use self::talent_dtos as talent;

pub use response_dtos::ApiEnvelope;

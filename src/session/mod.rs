pub mod storage;
pub mod store;
pub mod token;

pub use storage::{FileStorage, MemoryStorage, PersistedSession, SessionStorage};
pub use store::{AuthSession, SessionError, SessionStore, SessionUser};
pub use token::{decode_claims, TokenClaims, TokenError};

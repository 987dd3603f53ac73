pub mod group;
pub mod refresh_token;
pub mod user;

pub use group::PostgresGroupRepository;
pub use refresh_token::PostgresRefreshTokenRepository;
pub use user::PostgresUserRepository;

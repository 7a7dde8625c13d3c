mod draft;
mod health;
mod ids;
mod user;

pub use draft::Draft;
pub use health::HealthReport;
pub use ids::UserId;
pub use user::User;

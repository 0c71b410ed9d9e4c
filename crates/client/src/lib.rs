pub mod api;
pub mod error;
pub mod session;

pub use api::{ApiClient, MessageResponse};
pub use error::{ClientError, ClientResult};
pub use session::PlannerSession;

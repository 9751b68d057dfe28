pub mod platforms;
pub mod registry;
pub(crate) mod utils;
#[allow(clippy::module_inception)]
pub mod validator;
mod default;

pub use default::{default_registry, default_resolver};
pub use registry::ValidatorRegistry;
pub use validator::UrlValidator;

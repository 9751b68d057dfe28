use std::sync::Arc;

use super::registry::ValidatorRegistry;
use crate::Result;
use crate::resolver::{HttpRedirectResolver, RedirectResolver, ResolverConfig};

/// An HTTP resolver built from `config`.
pub fn default_resolver(config: &ResolverConfig) -> Result<Arc<dyn RedirectResolver>> {
    Ok(Arc::new(HttpRedirectResolver::new(config)?))
}

/// Returns a new `ValidatorRegistry` with all supported platforms, resolving
/// short links over HTTP with the default resolver settings.
pub fn default_registry() -> Result<ValidatorRegistry> {
    let resolver = default_resolver(&ResolverConfig::default())?;
    Ok(ValidatorRegistry::with_defaults(resolver))
}

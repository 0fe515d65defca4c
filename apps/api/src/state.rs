use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::catalog::Catalog;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Career catalog, fixed for the life of the process.
    pub catalog: Arc<Catalog>,
    /// Redis-backed in production, in-memory when `REDIS_URL` is unset.
    pub profiles: Arc<dyn ProfileStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

#[cfg(test)]
impl AppState {
    /// Built-in catalog, empty memory store, caller-supplied identity provider.
    pub fn for_tests(identity: Arc<dyn IdentityProvider>) -> Self {
        use crate::profile::store::MemoryProfileStore;

        Self {
            catalog: Arc::new(Catalog::builtin().expect("builtin catalog is valid")),
            profiles: Arc::new(MemoryProfileStore::default()),
            identity,
        }
    }
}

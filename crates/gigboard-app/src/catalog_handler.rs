//! Request-scoped access to the loaded seed catalog.

use std::sync::Arc;

use salvo::async_trait;

use gigboard_core::{catalog::Catalog, error::CoreError};

use crate::error::AppResult;

/// Hoop that makes the catalog loaded at startup available to handlers.
pub struct CatalogHandler {
    pub catalog: Arc<Catalog>,
}

#[async_trait]
impl salvo::Handler for CatalogHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.catalog));
    }
}

/// ## Summary
/// Retrieves the seed catalog from the depot.
///
/// ## Errors
/// Returns an error if the catalog was not injected for this request.
pub fn get_catalog_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Catalog>> {
    depot
        .obtain::<Arc<Catalog>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Catalog not found in depot").into())
}

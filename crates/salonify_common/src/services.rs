// --- File: crates/salonify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for external services used by the application.
//! These traits allow for dependency injection and easier testing by decoupling the
//! plan-generation logic from specific implementations of its collaborators (the POS
//! catalog sync, notification delivery).

use crate::models::Service;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the catalog source.
///
/// The plan generator trusts whatever service list this returns; it performs no
/// validation beyond the `Service` shape. Implementations sync from the POS
/// platform, tests substitute a mock.
pub trait CatalogProvider: Send + Sync {
    /// Error type returned by catalog operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List the full service catalog.
    fn list_services(&self) -> BoxFuture<'_, Vec<Service>, Self::Error>;

    /// Look up a single service by its catalog id.
    fn get_service(&self, service_id: &str) -> BoxFuture<'_, Option<Service>, Self::Error>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for creating instances of the external services
/// the application talks to. It's used by the backend to get access to the
/// services it needs without hard-wiring concrete implementations.
pub trait ServiceFactory: Send + Sync {
    /// Get a catalog provider instance.
    fn catalog_provider(&self) -> Option<Arc<dyn CatalogProvider<Error = BoxedError>>>;
}

/// An adapter that wraps a CatalogProvider and converts its error type to BoxedError.
///
/// Lets the factory expose a uniform error type while implementations keep
/// their own concrete errors.
pub struct BoxedCatalogProvider<P>(pub Arc<P>);

impl<P> CatalogProvider for BoxedCatalogProvider<P>
where
    P: CatalogProvider + 'static,
{
    type Error = BoxedError;

    fn list_services(&self) -> BoxFuture<'_, Vec<Service>, Self::Error> {
        let inner = self.0.clone();
        Box::pin(async move {
            inner
                .list_services()
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn get_service(&self, service_id: &str) -> BoxFuture<'_, Option<Service>, Self::Error> {
        let inner = self.0.clone();
        let service_id = service_id.to_string();
        Box::pin(async move {
            inner
                .get_service(&service_id)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

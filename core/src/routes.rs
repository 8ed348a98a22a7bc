//! Navigation shell route table

use serde::Serialize;

use crate::roles::Role;

/// Every page the application can render
///
/// `resolve` is total: anything that is not one of the six declared paths
/// becomes `NotFound` carrying the attempted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    Home,
    Farmer,
    Distributor,
    Retailer,
    Service,
    Customer,
    NotFound(String),
}

impl Route {
    /// Declared routes, in navigation order
    pub const DECLARED: [Route; 6] = [
        Route::Home,
        Route::Farmer,
        Route::Distributor,
        Route::Retailer,
        Route::Service,
        Route::Customer,
    ];

    /// Select the page for a request path
    ///
    /// Exact match only: no trailing-slash normalization, no nested routes.
    /// A query string, if present, is ignored.
    pub fn resolve(path: &str) -> Route {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        match path {
            "/" => Route::Home,
            "/farmer" => Route::Farmer,
            "/distributor" => Route::Distributor,
            "/retailer" => Route::Retailer,
            "/service" => Route::Service,
            "/customer" => Route::Customer,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Farmer => "/farmer",
            Route::Distributor => "/distributor",
            Route::Retailer => "/retailer",
            Route::Service => "/service",
            Route::Customer => "/customer",
            Route::NotFound(path) => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl From<Role> for Route {
    fn from(role: Role) -> Self {
        match role {
            Role::Farmer => Route::Farmer,
            Role::Distributor => Route::Distributor,
            Role::Retailer => Route::Retailer,
            Role::Service => Route::Service,
            Role::Customer => Route::Customer,
        }
    }
}

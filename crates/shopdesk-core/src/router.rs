// ── Routes and navigation guard ──
//
// The route table mirrors the console's screens; the guard defers each
// navigation until the current-user fetch has settled, then either
// proceeds or hands back the login route as the new target. A redirect
// is a returned destination, never an abort of the navigation in
// progress.

use std::sync::Arc;

use crate::store::user::UserStore;

// ── Route names ──────────────────────────────────────────────────────

pub mod route_name {
    pub const HOME: &str = "home";
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";
    pub const CONFIG_MOCK_TIME: &str = "configMockTime";
    pub const CONFIG_BLOCK_IP: &str = "configBlockIP";
    pub const CONFIG_SIGNED_KEY: &str = "configSignedKey";
    pub const CONFIG_ROUTER: &str = "configRouter";
    pub const CONFIG_ROUTER_CONCURRENCY: &str = "configRouterConcurrency";
    pub const CONFIG_ORDER_COMMISSION: &str = "configOrderCommission";
    pub const CONFIG_MARKETING_GROUP: &str = "configMarketingGroup";
    pub const USERS: &str = "users";
    pub const LOGINS: &str = "logins";
    pub const PROFILE: &str = "profile";
    pub const BRANDS: &str = "brands";
    pub const PRODUCTS: &str = "products";
    pub const PRODUCT_CATEGORIES: &str = "productCategories";
    pub const SUPPLIERS: &str = "suppliers";
    pub const REGIONS: &str = "regions";
    pub const ADVERTISEMENTS: &str = "advertisements";
    pub const ORDERS: &str = "orders";
    pub const ABOUT: &str = "about";
}

// ── Route table ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub requires_auth: bool,
    /// Loaded on first visit instead of at startup.
    pub lazy: bool,
}

const fn public(name: &'static str, path: &'static str) -> Route {
    Route {
        name,
        path,
        requires_auth: false,
        lazy: false,
    }
}

const fn auth(name: &'static str, path: &'static str) -> Route {
    Route {
        name,
        path,
        requires_auth: true,
        lazy: false,
    }
}

const ROUTES: &[Route] = &[
    public(route_name::HOME, "/"),
    public(route_name::LOGIN, "/login"),
    public(route_name::REGISTER, "/register"),
    auth(route_name::CONFIG_MOCK_TIME, "/configs/mockTime"),
    auth(route_name::CONFIG_BLOCK_IP, "/configs/blockIP"),
    auth(route_name::CONFIG_SIGNED_KEY, "/configs/signedKey"),
    auth(route_name::CONFIG_ROUTER, "/configs/router"),
    auth(
        route_name::CONFIG_ROUTER_CONCURRENCY,
        "/configs/router-concurrency",
    ),
    auth(
        route_name::CONFIG_ORDER_COMMISSION,
        "/configs/order-commission",
    ),
    auth(
        route_name::CONFIG_MARKETING_GROUP,
        "/configs/marketing-group",
    ),
    auth(route_name::USERS, "/users"),
    auth(route_name::LOGINS, "/logins"),
    Route {
        name: route_name::PROFILE,
        path: "/profile",
        requires_auth: true,
        lazy: true,
    },
    auth(route_name::BRANDS, "/brands"),
    auth(route_name::PRODUCTS, "/products"),
    auth(route_name::PRODUCT_CATEGORIES, "/product/categories"),
    auth(route_name::SUPPLIERS, "/suppliers"),
    auth(route_name::REGIONS, "/regions"),
    auth(route_name::ADVERTISEMENTS, "/advertisements"),
    auth(route_name::ORDERS, "/orders"),
    Route {
        name: route_name::ABOUT,
        path: "/about",
        requires_auth: false,
        lazy: true,
    },
];

/// The console's named routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    pub fn routes(&self) -> &'static [Route] {
        ROUTES
    }

    pub fn find(&self, name: &str) -> Option<&'static Route> {
        ROUTES.iter().find(|route| route.name == name)
    }

    pub fn find_by_path(&self, path: &str) -> Option<&'static Route> {
        ROUTES.iter().find(|route| route.path == path)
    }
}

// ── Navigation guard ─────────────────────────────────────────────────

/// Outcome of a guarded navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Continue to the requested route.
    Proceed,
    /// Navigate to this route instead (the original attempt completes;
    /// the redirect is a new target).
    Redirect(&'static str),
}

/// Defers navigations until the user fetch has settled, then checks the
/// auth requirement of the target route.
pub struct NavigationGuard {
    user: Arc<UserStore>,
}

impl NavigationGuard {
    pub fn new(user: Arc<UserStore>) -> Self {
        Self { user }
    }

    /// Resolve a navigation attempt.
    ///
    /// Waits for any in-flight user fetch first — an idle user store
    /// resolves immediately, so unauthenticated sessions are not stuck.
    pub async fn resolve(&self, to: &Route) -> Navigation {
        self.user.settled().await;

        if !to.requires_auth {
            return Navigation::Proceed;
        }
        if self.user.account().is_none() {
            return Navigation::Redirect(route_name::LOGIN);
        }
        Navigation::Proceed
    }
}

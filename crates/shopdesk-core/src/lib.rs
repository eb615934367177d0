//! Client-side domain-state layer for the shopdesk back office.
//!
//! Sits between `shopdesk-api` and UI consumers (the CLI today):
//!
//! - **[`DomainStore<T>`]** — one generic cache + action unit instantiated
//!   per entity type (brand, product, supplier, …). Owns the list cache,
//!   the processing flag, and the uniform add / list / get-by-id /
//!   update-by-id contract. Replaces the per-entity module copies the
//!   back office grew historically.
//!
//! - **[`ReferenceCache<T>`]** — request-coalescing fetch-once cache for
//!   reference datasets (statuses, categories). The first caller installs
//!   the shared pending fetch; concurrent callers await the same handle,
//!   so a dataset is fetched at most once per session.
//!
//! - **[`UserStore`]** — current-user session state with `watch`-based
//!   settlement instead of interval polling.
//!
//! - **[`NavigationGuard`]** — defers each navigation until the user
//!   fetch has settled, then proceeds or redirects to the login route.
//!
//! - **Domain model** ([`model`]) — server-shaped records plus the
//!   client-derived display fields attached by enrichment.

pub mod enrich;
pub mod error;
pub mod model;
pub mod router;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use router::{Navigation, NavigationGuard, Route, RouteTable, route_name};
pub use store::advertisement::AdvertisementStore;
pub use store::domain::{DomainStore, Entity, UploadTarget};
pub use store::order::OrderStore;
pub use store::reference::{ReferenceCache, StatusDirectory};
pub use store::region::RegionStore;
pub use store::user::UserStore;
pub use store::{ListCache, ListParams, ProcessingFlag};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Advertisement, Brand, CategoryOption, Order, Product, ProductCategory, Region, Status,
    SubOrder, Supplier, UploadFile,
};

/// Convenience aliases for the plain id-keyed stores.
pub type BrandStore = DomainStore<Brand>;
pub type ProductStore = DomainStore<Product>;
pub type ProductCategoryStore = DomainStore<ProductCategory>;
pub type SupplierStore = DomainStore<Supplier>;

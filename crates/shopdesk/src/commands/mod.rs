//! Command dispatch and shared store construction.

pub mod account;
pub mod advertisements;
pub mod brands;
pub mod orders;
pub mod product_categories;
pub mod products;
pub mod regions;
pub mod suppliers;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};

use shopdesk_api::AdminClient;
use shopdesk_config::{ConfigError, ResolvedProfile};
use shopdesk_core::{
    AdvertisementStore, BrandStore, CoreError, ListParams, OrderStore, ProductCategoryStore,
    ProductStore, RegionStore, StatusDirectory, SupplierStore, UserStore,
};

use crate::cli::{Command, GlobalOpts, ListArgs};
use crate::error::CliError;

// ── Stores ───────────────────────────────────────────────────────────

/// One store per domain, all sharing the same client (and therefore the
/// same session cookie) and the same status directory.
pub struct Stores {
    pub account: Option<String>,
    pub user: Arc<UserStore>,
    pub brands: BrandStore,
    pub products: ProductStore,
    pub product_categories: ProductCategoryStore,
    pub suppliers: SupplierStore,
    pub regions: RegionStore,
    pub advertisements: AdvertisementStore,
    pub orders: OrderStore,
}

impl Stores {
    /// Build the store set from the resolved profile and CLI overrides.
    pub fn connect(global: &GlobalOpts) -> Result<Self, CliError> {
        let resolved = resolve_profile(global)?;
        let client = AdminClient::new(resolved.base_url.as_str(), &resolved.transport)
            .map_err(|e| CliError::from(CoreError::from(e)))?;
        let client = Arc::new(client);
        let statuses = Arc::new(StatusDirectory::shared(Arc::clone(&client)));

        Ok(Self {
            account: resolved.account,
            user: Arc::new(UserStore::new(Arc::clone(&client))),
            brands: BrandStore::new(Arc::clone(&client), Arc::clone(&statuses)),
            products: ProductStore::new(Arc::clone(&client), Arc::clone(&statuses)),
            product_categories: ProductCategoryStore::new(
                Arc::clone(&client),
                Arc::clone(&statuses),
            ),
            suppliers: SupplierStore::new(Arc::clone(&client), Arc::clone(&statuses)),
            regions: RegionStore::new(Arc::clone(&client), Arc::clone(&statuses)),
            advertisements: AdvertisementStore::new(Arc::clone(&client), Arc::clone(&statuses)),
            orders: OrderStore::new(client),
        })
    }
}

/// Resolve the active profile: an explicit `--api` builds an ad-hoc
/// profile, otherwise the config file is consulted. CLI flags override
/// the profile's transport settings either way.
fn resolve_profile(global: &GlobalOpts) -> Result<ResolvedProfile, CliError> {
    let mut resolved = if let Some(api) = &global.api {
        ResolvedProfile {
            base_url: api.parse().map_err(|e| CliError::Validation {
                field: "api".into(),
                reason: format!("{e}: {api}"),
            })?,
            account: None,
            transport: shopdesk_api::TransportConfig::default(),
        }
    } else {
        let config = shopdesk_config::load()?;
        let name = config.active_profile_name(global.profile.as_deref());
        match config.resolve(&name) {
            Ok(resolved) => resolved,
            Err(ConfigError::ProfileNotFound { .. }) if global.profile.is_none() => {
                return Err(CliError::NoConfig {
                    path: shopdesk_config::config_path().display().to_string(),
                });
            }
            Err(ConfigError::ProfileNotFound { profile }) => {
                let mut available: Vec<String> = config.profiles.keys().cloned().collect();
                available.sort();
                return Err(CliError::ProfileNotFound {
                    name: profile,
                    available: available.join(", "),
                });
            }
            Err(other) => return Err(other.into()),
        }
    };

    if let Some(timeout) = global.timeout {
        resolved.transport.timeout = Duration::from_secs(timeout);
    }
    if global.insecure {
        resolved.transport.accept_invalid_certs = true;
    }
    Ok(resolved)
}

// ── Dispatch ─────────────────────────────────────────────────────────

pub async fn dispatch(command: Command, global: &GlobalOpts) -> Result<(), CliError> {
    let stores = Stores::connect(global)?;

    match command {
        Command::Brands(args) => brands::handle(&stores, args, global).await,
        Command::Products(args) => products::handle(&stores, args, global).await,
        Command::ProductCategories(args) => {
            product_categories::handle(&stores, args, global).await
        }
        Command::Suppliers(args) => suppliers::handle(&stores, args, global).await,
        Command::Regions(args) => regions::handle(&stores, args, global).await,
        Command::Advertisements(args) => advertisements::handle(&stores, args, global).await,
        Command::Orders(args) => orders::handle(&stores, args, global).await,
        Command::Login(args) => account::login(&stores, args, global).await,
        Command::Register(args) => account::register(&stores, args, global).await,
        Command::Whoami => account::whoami(&stores, global).await,
    }
}

// ── Shared helpers ───────────────────────────────────────────────────

/// Parse a payload argument into a JSON object.
pub(crate) fn parse_doc(json: &str) -> Result<Map<String, Value>, CliError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::Validation {
            field: "json".into(),
            reason: "expected a JSON object".into(),
        }),
    }
}

/// Translate the CLI list flags into store query parameters.
pub(crate) fn list_params(args: &ListArgs) -> ListParams {
    ListParams {
        limit: Some(args.limit),
        offset: args.offset,
        keyword: args.keyword.clone(),
        status: args.status.clone(),
        order: args.order.clone(),
        ..ListParams::default()
    }
}

/// Footer line for table output: `shown of total record(s)`.
pub(crate) fn print_total(shown: usize, total: i64, global: &GlobalOpts) {
    if global.quiet || !matches!(global.output, crate::cli::OutputFormat::Table) {
        return;
    }
    if total >= 0 {
        eprintln!("{shown} of {total} record(s)");
    }
}

//! Clap derive structures for the `shopdesk` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shopdesk -- command-line console for the e-commerce back office
#[derive(Debug, Parser)]
#[command(
    name = "shopdesk",
    version,
    about = "Manage the shop back office from the command line",
    long_about = "Browse and maintain brands, products, suppliers, regions,\n\
        advertisements, and orders against a shopdesk back-office API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Back-office profile to use
    #[arg(long, short = 'p', env = "SHOPDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API root URL (overrides profile)
    #[arg(long, env = "SHOPDESK_API", global = true)]
    pub api: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SHOPDESK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "SHOPDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SHOPDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage brands
    #[command(alias = "b")]
    Brands(CrudArgs),

    /// Manage products
    #[command(alias = "prod")]
    Products(CrudArgs),

    /// Manage product categories
    #[command(name = "product-categories", alias = "pc")]
    ProductCategories(CrudArgs),

    /// Manage suppliers
    #[command(alias = "sup")]
    Suppliers(CrudArgs),

    /// Browse and maintain regions
    Regions(RegionsArgs),

    /// Manage advertisements
    #[command(alias = "ads")]
    Advertisements(AdvertisementsArgs),

    /// Browse orders
    Orders(OrdersArgs),

    /// Sign in and verify the session
    Login(LoginArgs),

    /// Register a new back-office account
    Register(RegisterArgs),

    /// Show the current session
    Whoami,
}

// ── Shared CRUD verbs ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CrudArgs {
    #[command(subcommand)]
    pub command: CrudCommand,
}

#[derive(Debug, Subcommand)]
pub enum CrudCommand {
    /// List records
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one record by id
    Get {
        /// Record id
        id: u64,
    },

    /// Create a record from a JSON document
    Add {
        /// Record fields as a JSON object
        json: String,
    },

    /// Patch a record with a JSON document
    Update {
        /// Record id
        id: u64,
        /// Changed fields as a JSON object
        json: String,
    },
}

#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Maximum number of records
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: u32,

    /// Records to skip (paging)
    #[arg(long)]
    pub offset: Option<u32>,

    /// Keyword filter
    #[arg(long)]
    pub keyword: Option<String>,

    /// Status code filter
    #[arg(long)]
    pub status: Option<String>,

    /// Sort expression, e.g. `-updatedAt`
    #[arg(long)]
    pub order: Option<String>,
}

// ── Regions ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RegionsArgs {
    #[command(subcommand)]
    pub command: RegionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RegionsCommand {
    /// List regions of a hierarchy level
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Hierarchy level (country, province, city, area, street)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one region by id
    Get {
        /// Region id
        id: u64,
    },

    /// Patch a region with a JSON document
    Update {
        /// Region id
        id: u64,
        /// Changed fields as a JSON object
        json: String,
    },

    /// List the hierarchy levels
    Categories,
}

// ── Advertisements ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AdvertisementsArgs {
    #[command(subcommand)]
    pub command: AdvertisementsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdvertisementsCommand {
    /// List advertisements
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one advertisement by id
    Get {
        /// Advertisement id
        id: u64,
    },

    /// Create an advertisement from a JSON document
    Add {
        /// Record fields as a JSON object
        json: String,
    },

    /// Patch an advertisement with a JSON document
    Update {
        /// Advertisement id
        id: u64,
        /// Changed fields as a JSON object
        json: String,
    },

    /// List the placement categories
    Categories,
}

// ── Orders ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List orders
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one order by serial number
    Get {
        /// Order serial number
        sn: String,
    },

    /// List the order status enumeration
    Statuses,
}

// ── Account ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account name (defaults to the profile's account)
    #[arg(long)]
    pub account: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account name
    pub account: String,
}

//! Herd Market CLI - Browse listings and manage the local cart, wishlist,
//! and notifications.
//!
//! # Usage
//!
//! ```bash
//! # Browse goats in Kajiado under 50,000
//! hm-cli catalog --category goat --location kajiado --max-price 50000
//!
//! # Put a listing in the cart, then buy three
//! hm-cli cart add 64f1c2
//! hm-cli cart set 64f1c2 3
//!
//! # Save a listing for later
//! hm-cli wishlist toggle 64f1c2
//!
//! # Read notifications
//! hm-cli notifications list
//! hm-cli notifications read-all
//! ```
//!
//! # Commands
//!
//! - `catalog` - Fetch listings and print those matching the filters
//! - `cart` - Show or change the cart
//! - `wishlist` - Show or change the wishlist
//! - `notifications` - List, ingest, or mark notifications read
//!
//! Configuration comes from the environment; see
//! [`herd_market_storefront::config`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use herd_market_core::NotificationCategory;
use herd_market_storefront::config::StorefrontConfig;
use herd_market_storefront::{CategoryFilter, Storefront};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "hm-cli")]
#[command(author, version, about = "Herd Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch listings and print those matching the filters
    Catalog(CatalogArgs),
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show or change the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// List, ingest, or mark notifications read
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },
}

#[derive(clap::Args)]
struct CatalogArgs {
    /// Text matched against name, breed, and description
    #[arg(short, long)]
    query: Option<String>,

    /// Animal category (`all`, `cow`, `goat`, `sheep`, `camel`, `horse`, `other`)
    #[arg(short, long, default_value = "all")]
    category: CategoryFilter,

    /// Location substring
    #[arg(short, long)]
    location: Option<String>,

    /// Minimum price (inclusive)
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Maximum price (inclusive)
    #[arg(long)]
    max_price: Option<Decimal>,

    /// Only listings eligible for the seasonal occasion
    #[arg(long)]
    occasion: bool,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines, count, and total
    Show,
    /// Add one unit of a listing
    Add {
        /// Listing ID
        id: String,
    },
    /// Remove a listing from the cart
    Remove {
        /// Listing ID
        id: String,
    },
    /// Set the quantity of a listing (zero or less removes it)
    Set {
        /// Listing ID
        id: String,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show saved listings
    Show,
    /// Save a listing
    Add {
        /// Listing ID
        id: String,
    },
    /// Remove a saved listing
    Remove {
        /// Listing ID
        id: String,
    },
    /// Save a listing if absent, remove it otherwise
    Toggle {
        /// Listing ID
        id: String,
    },
    /// Remove every saved listing
    Clear,
}

#[derive(Subcommand)]
enum NotificationAction {
    /// List notifications, newest first
    List {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Record a notification from an external source
    Push {
        /// Category (`listing`, `order`, `user`, `system`, `other`)
        #[arg(short, long, default_value = "other")]
        category: NotificationCategory,
        /// Headline
        #[arg(short, long)]
        title: String,
        /// Secondary line
        #[arg(short, long, default_value = "")]
        subtitle: String,
    },
    /// Mark one notification as read
    Read {
        /// Notification ID
        id: String,
    },
    /// Mark every notification as read
    ReadAll,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configuration is needed before tracing so Sentry can be wired in
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hm_cli=info,herd_market_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let mut storefront = Storefront::from_config(&config);

    if let Err(e) = run(cli, &mut storefront).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(
    cli: Cli,
    storefront: &mut Storefront<impl herd_market_storefront::backend::ListingSource>,
) -> herd_market_storefront::Result<()> {
    match cli.command {
        Commands::Catalog(args) => commands::catalog::browse(storefront, args.into()).await,
        Commands::Cart { action } => match action {
            CartAction::Show => {
                commands::cart::show(&storefront.cart);
                Ok(())
            }
            CartAction::Add { id } => commands::cart::add(storefront, &id.into()).await,
            CartAction::Remove { id } => {
                commands::cart::remove(&mut storefront.cart, &id.into());
                Ok(())
            }
            CartAction::Set { id, quantity } => {
                commands::cart::set_quantity(&mut storefront.cart, &id.into(), quantity);
                Ok(())
            }
            CartAction::Clear => {
                commands::report(&storefront.cart.clear_cart());
                Ok(())
            }
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => {
                commands::wishlist::show(&storefront.wishlist);
                Ok(())
            }
            WishlistAction::Add { id } => {
                commands::wishlist::add(storefront, &id.into(), false).await
            }
            WishlistAction::Toggle { id } => {
                commands::wishlist::add(storefront, &id.into(), true).await
            }
            WishlistAction::Remove { id } => {
                commands::report(&storefront.wishlist.remove_from_wishlist(&id.into()));
                Ok(())
            }
            WishlistAction::Clear => {
                commands::report(&storefront.wishlist.clear_wishlist());
                Ok(())
            }
        },
        Commands::Notifications { action } => {
            let store = &mut storefront.notifications;
            match action {
                NotificationAction::List { unread } => {
                    commands::notifications::list(store, unread, chrono::Utc::now());
                }
                NotificationAction::Push {
                    category,
                    title,
                    subtitle,
                } => commands::notifications::push(store, category, title, subtitle),
                NotificationAction::Read { id } => {
                    commands::notifications::mark_read(store, &id.into());
                }
                NotificationAction::ReadAll => {
                    store.mark_all_as_read();
                    tracing::info!(unread = store.unread_count(), "All notifications read");
                }
            }
            Ok(())
        }
    }
}

impl From<CatalogArgs> for herd_market_storefront::FilterUpdate {
    fn from(args: CatalogArgs) -> Self {
        let mut update = Self::new()
            .category(args.category)
            .occasion_only(args.occasion);
        if let Some(query) = args.query {
            update = update.query(query);
        }
        if let Some(location) = args.location {
            update = update.location(location);
        }
        if let Some(min_price) = args.min_price {
            update = update.min_price(min_price);
        }
        if let Some(max_price) = args.max_price {
            update = update.max_price(max_price);
        }
        update
    }
}

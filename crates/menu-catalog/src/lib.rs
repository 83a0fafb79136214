//! Menu Catalog
//!
//! Framework-agnostic state for the Street Eats site:
//! - store: menu filtering with observer notifications
//! - catalog: embedded menu data and validation
//! - purchase / contact / nav / counter / preloader: page chrome state
//!
//! Nothing in here touches the DOM, so everything tests natively.

mod item;
mod catalog;
mod config;
mod store;
mod purchase;
mod contact;
mod counter;
mod nav;
mod preloader;

pub use item::{MenuItem, StatEntry};
pub use catalog::{Catalog, CatalogError};
pub use config::SiteConfig;
pub use store::{
    is_mobile_width, CatalogEvent, MenuCatalogStore, SubscriptionId, ALL_CATEGORY,
    MOBILE_CATEGORIES,
};
pub use purchase::{PurchaseFlow, PurchaseOutcome};
pub use contact::{
    simulate_outcome, ContactForm, ContactSubmission, MessageKind, ResponseMessage, SubmitError,
};
pub use counter::{CounterAnimation, StatsTrigger, TriggerAction};
pub use nav::NavState;
pub use preloader::{Preloader, PreloaderPhase};

//! UI Components
//!
//! Page sections and the widgets inside them.

mod preloader;
mod nav_bar;
mod hero;
mod category_bar;
mod menu_grid;
mod item_modal;
mod about_section;
mod contact_form;
mod footer;

pub use preloader::PreloaderOverlay;
pub use nav_bar::NavBar;
pub use hero::Hero;
pub use category_bar::CategoryBar;
pub use menu_grid::MenuGrid;
pub use item_modal::ItemModal;
pub use about_section::AboutSection;
pub use contact_form::ContactSection;
pub use footer::Footer;

//! Pages
//!
//! One component per route.

mod home;
mod interactive;
mod advanced;
mod network;

pub use home::HomePage;
pub use interactive::InteractivePageView;
pub use advanced::AdvancedPage;
pub use network::NetworkPage;

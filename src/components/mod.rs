//! UI Components
//!
//! Reusable Leptos components for the three pages.

mod nav_links;
mod result_panel;
mod endpoint_card;
mod custom_url_probe;
mod network_info;
mod recent_log;
mod counter_card;
mod contact_form;
mod tab_bar;
mod todo_tab;
mod settings_tab;
mod about_tab;
mod modal_dialog;

pub use nav_links::NavLinks;
pub use result_panel::ResultPanel;
pub use endpoint_card::EndpointCard;
pub use custom_url_probe::CustomUrlProbe;
pub use network_info::NetworkInfoPanel;
pub use recent_log::RecentLogPanel;
pub use counter_card::CounterCard;
pub use contact_form::ContactForm;
pub use tab_bar::TabBar;
pub use todo_tab::TodoTab;
pub use settings_tab::SettingsTab;
pub use about_tab::AboutTab;
pub use modal_dialog::ModalDialog;

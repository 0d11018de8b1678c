mod dashboard;
mod layout;
mod placeholder;

pub use dashboard::Dashboard;
pub use layout::AppLayout;
pub use placeholder::{Calendar, Customers, Help, Leads, Settings};

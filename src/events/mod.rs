pub mod header;
pub mod menu;

pub use header::wire_header_scroll;
pub use menu::wire_mobile_menu;

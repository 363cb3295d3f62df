pub mod expansion_view;
pub mod footer;
pub mod header;
pub mod modals;
pub mod search_bar;

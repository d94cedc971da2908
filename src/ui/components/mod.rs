pub mod atoms;
pub mod command_panel;
pub mod config_field;
pub mod database_id;
pub mod dropdown;
pub mod field_list;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod layout;
pub mod molecules;
pub mod overlay;
pub mod tabs;
pub mod text_utils;

//! UIコンポーネント

pub mod header;
pub mod history_list;
pub mod preset_select;
pub mod report;
pub mod rubric_editor;
pub mod settings_panel;
pub mod upload_area;

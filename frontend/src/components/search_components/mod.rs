pub mod checkbox_group;
pub mod duration_range_input;
pub mod ingredient_groups_editor;
pub mod ingredient_picker;
pub mod search_sidebar;
pub mod share_link_button;

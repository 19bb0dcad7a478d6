pub mod app_data;
pub mod url_query;

pub mod file_name_policy;
pub mod upload_policy;

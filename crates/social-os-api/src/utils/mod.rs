pub mod request_origin;
pub mod upload;

pub mod error;
pub mod forward_service;
pub mod request;
pub mod reqwest_forward_service;
pub mod response;

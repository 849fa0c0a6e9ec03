pub mod get_request;

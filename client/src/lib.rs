pub mod config;
pub mod error;
pub mod models;
pub mod question_parser;
pub mod hackrx_service;
pub mod form_controller;

pub use config::FrontendConfig;
pub use error::{FormError, InputField};
pub use models::*;
pub use question_parser::parse_questions;
pub use hackrx_service::HackRxService;
pub use form_controller::{pair_answers, FormController};

pub mod shell;
pub mod wasm_api;

pub use shell::*;
pub use wasm_api::*;

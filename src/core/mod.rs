pub mod assembler;
pub mod config;
pub mod content;
pub mod export;
pub mod html;
pub mod pipeline;
pub mod session;
pub mod template;

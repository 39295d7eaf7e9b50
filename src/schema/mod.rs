pub mod content;
pub mod length;
pub mod request;
pub mod tone;

pub mod fields;
pub mod honeypot;
pub mod metadata;
pub mod parser;
pub mod pipeline;

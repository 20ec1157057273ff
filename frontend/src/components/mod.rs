pub mod chat;
pub mod sections;
pub mod stats;
pub mod toast;

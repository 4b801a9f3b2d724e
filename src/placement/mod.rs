pub mod bank;
pub mod question;

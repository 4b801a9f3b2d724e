pub mod grade;
pub mod language;

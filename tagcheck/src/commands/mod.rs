/// Tag lookup command
pub mod check;

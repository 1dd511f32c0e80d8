pub mod contact;
pub mod sanitize;
pub mod validation;

pub mod session;
pub mod tap_dismiss;

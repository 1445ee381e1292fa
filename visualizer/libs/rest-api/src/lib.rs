pub mod endpoints;
pub mod form;

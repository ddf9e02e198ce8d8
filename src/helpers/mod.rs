//! Helper functions shared by the generator and templates

pub mod url;

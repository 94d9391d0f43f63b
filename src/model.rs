pub mod dns;
pub mod record;
pub mod source;

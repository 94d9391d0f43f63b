pub mod dns_zone;

use crate::error::ZoneError;
use crate::model::dns::with_trailing_dot;
use crate::model::record::Prefix;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IPV4_REVERSE_SUFFIX: &str = "in-addr.arpa.";
const IPV6_REVERSE_SUFFIX: &str = "ip6.arpa.";

const IPV4_SUPPORTED_PREFIX_LENS: &[u8] = &[24];
const IPV6_SUPPORTED_PREFIX_LENS: &[u8] = &[32, 40, 48];

// One label per octet
const IPV4_BITS_PER_LABEL: u8 = 8;
// One label per nibble
const IPV6_BITS_PER_LABEL: u8 = 4;

/// 192.0.2.10 -> 10.2.0.192.in-addr.arpa.
pub fn reverse_name4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();

    format!("{}.{}.{}.{}.{}", d, c, b, a, IPV4_REVERSE_SUFFIX)
}

/// Expands every nibble of `addr`, least significant first.
///
/// 2001:db8::1 -> 1.0.0.0.(...).8.b.d.0.1.0.0.2.ip6.arpa.
pub fn reverse_name6(addr: Ipv6Addr) -> String {
    let mut name = String::with_capacity(32 * 2 + IPV6_REVERSE_SUFFIX.len());

    for byte in addr.octets().iter().rev() {
        name.push_str(format!("{:x}.{:x}.", byte & 0x0f, byte >> 4).as_str());
    }

    name.push_str(IPV6_REVERSE_SUFFIX);
    name
}

/// Checks that `prefix` has a length the reverse zone computer can handle.
pub fn check_supported(prefix: &Prefix) -> Result<(), ZoneError> {
    let (supported, message) = match prefix.network() {
        IpAddr::V4(_) => (IPV4_SUPPORTED_PREFIX_LENS, "IPv4 prefix only /24 are supported"),
        IpAddr::V6(_) => (IPV6_SUPPORTED_PREFIX_LENS, "IPv6 prefix only /32, /40 and /48 are supported"),
    };

    if supported.contains(&prefix.prefix_len()) {
        Ok(())
    } else {
        Err(ZoneError::UnsupportedPrefixLength {
            network: prefix.network(),
            prefix_len: prefix.prefix_len(),
            supported: message,
        })
    }
}

/// Keeps the last `keep` address labels of a fully expanded reverse name, plus its suffix.
fn truncate_reverse_name(full_name: &str, total_labels: usize, keep: usize) -> String {
    let zone = full_name
        .split('.')
        .skip(total_labels - keep)
        .collect::<Vec<&str>>()
        .join(".");

    with_trailing_dot(&zone)
}

/// 192.0.2.0/24 -> 2.0.192.in-addr.arpa.
pub fn reverse_zone4(network: Ipv4Addr, prefix_len: u8) -> Result<String, ZoneError> {
    check_supported(&Prefix::new(IpAddr::V4(network), prefix_len)?)?;

    let keep = (prefix_len / IPV4_BITS_PER_LABEL) as usize;

    Ok(truncate_reverse_name(&reverse_name4(network), 4, keep))
}

/// 2001:db8::/32 -> 8.b.d.0.1.0.0.2.ip6.arpa.
pub fn reverse_zone6(network: Ipv6Addr, prefix_len: u8) -> Result<String, ZoneError> {
    check_supported(&Prefix::new(IpAddr::V6(network), prefix_len)?)?;

    let keep = (prefix_len / IPV6_BITS_PER_LABEL) as usize;

    Ok(truncate_reverse_name(&reverse_name6(network), 32, keep))
}

pub fn reverse_zone(prefix: &Prefix) -> Result<String, ZoneError> {
    match prefix.network() {
        IpAddr::V4(ipv4) => reverse_zone4(ipv4, prefix.prefix_len()),
        IpAddr::V6(ipv6) => reverse_zone6(ipv6, prefix.prefix_len()),
    }
}

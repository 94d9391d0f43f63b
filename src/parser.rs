pub mod reverse;

use crate::error::{SourceError, ZoneError};
use crate::model::dns::{Host, Zone};
use crate::model::record::Prefix;
use crate::model::source::{HostJson, SourceJson};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use tracing::{debug, info};

fn parse_optional_addr<T: FromStr>(host: &HostJson, field: &'static str, value: &str) -> Result<Option<T>, SourceError>
where
    T::Err: std::fmt::Display,
{
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    value.parse::<T>().map(Some).map_err(|e| SourceError::InvalidAddress {
        host: host.name.clone(),
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl TryFrom<&HostJson> for Host {
    type Error = SourceError;

    fn try_from(host: &HostJson) -> Result<Self, Self::Error> {
        let ipv4 = parse_optional_addr::<Ipv4Addr>(host, "ipv4_addr", &host.ipv4_addr)?;
        let ipv6 = parse_optional_addr::<Ipv6Addr>(host, "ipv6_addr", &host.ipv6_addr)?;

        Ok(Host {
            name: host.name.clone(),
            ipv4,
            ipv6,
        })
    }
}

/// Converts every source record into a [`Host`], stopping at the first bad address.
pub fn get_parsed_hosts(source: &SourceJson) -> Result<Vec<Host>, SourceError> {
    let hosts = source
        .hosts
        .iter()
        .map(Host::try_from)
        .collect::<Result<Vec<Host>, SourceError>>()?;

    info!(
        "Parsed {} hosts ({} with IPv4, {} with IPv6).",
        hosts.len(),
        hosts.iter().filter(|h| h.ipv4.is_some()).count(),
        hosts.iter().filter(|h| h.ipv6.is_some()).count()
    );

    Ok(hosts)
}

/// Validates the requested zones before anything is generated.
///
/// Forward zones come first, then reverse zones, each in the order given.
pub fn get_parsed_zones(forward_zones: &[String], reverse_zones: &[String]) -> Result<Vec<Zone>, ZoneError> {
    if forward_zones.is_empty() && reverse_zones.is_empty() {
        return Err(ZoneError::NoZones);
    }

    let mut zones = Vec::with_capacity(forward_zones.len() + reverse_zones.len());

    for zone_name in forward_zones {
        zones.push(Zone::Forward(zone_name.clone()));
    }

    for zone_prefix in reverse_zones {
        let prefix = Prefix::from_str(zone_prefix)?;

        reverse::check_supported(&prefix)?;

        debug!("Accepted reverse zone prefix {}", prefix);

        zones.push(Zone::Reverse(prefix));
    }

    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_json(name: &str, ipv4_addr: &str, ipv6_addr: &str) -> HostJson {
        HostJson {
            name: name.to_string(),
            ipv4_addr: ipv4_addr.to_string(),
            ipv6_addr: ipv6_addr.to_string(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_host_with_both_families() {
        let host = Host::try_from(&host_json("host1.zone1.example", "192.0.2.10", "2001:db8::10")).unwrap();

        assert_eq!(host.name, "host1.zone1.example");
        assert_eq!(host.ipv4, Some(Ipv4Addr::new(192, 0, 2, 10)));
        assert_eq!(host.ipv6, Some(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x10)));
    }

    #[test]
    fn test_empty_addresses_are_absent() {
        let host = Host::try_from(&host_json("host2.zone2.example.", "", "")).unwrap();

        assert_eq!(host.ipv4, None);
        assert_eq!(host.ipv6, None);
    }

    #[test]
    fn test_invalid_ipv4_names_field_and_host() {
        let err = Host::try_from(&host_json("bad.zone1.example", "192.0.2.300", "")).unwrap_err();

        match err {
            SourceError::InvalidAddress { host, field, value, .. } => {
                assert_eq!(host, "bad.zone1.example");
                assert_eq!(field, "ipv4_addr");
                assert_eq!(value, "192.0.2.300");
            }
        }
    }

    #[test]
    fn test_family_mismatch_is_rejected() {
        assert!(Host::try_from(&host_json("h", "2001:db8::1", "")).is_err());
        assert!(Host::try_from(&host_json("h", "", "192.0.2.1")).is_err());
    }

    #[test]
    fn test_get_parsed_hosts_keeps_order() {
        let source = SourceJson {
            hosts: vec![
                host_json("b.zone1.example", "192.0.2.2", ""),
                host_json("a.zone1.example", "192.0.2.1", ""),
            ],
        };

        let hosts = get_parsed_hosts(&source).unwrap();

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].name, "b.zone1.example");
        assert_eq!(hosts[1].name, "a.zone1.example");
    }

    #[test]
    fn test_get_parsed_hosts_fails_on_any_bad_record() {
        let source = SourceJson {
            hosts: vec![
                host_json("ok.zone1.example", "192.0.2.1", ""),
                host_json("bad.zone1.example", "", "2001:db8::zz"),
            ],
        };

        assert!(get_parsed_hosts(&source).is_err());
    }

    #[test]
    fn test_zones_requires_at_least_one() {
        assert_eq!(get_parsed_zones(&[], &[]), Err(ZoneError::NoZones));
    }

    #[test]
    fn test_zones_order_forward_then_reverse() {
        let zones = get_parsed_zones(
            &strings(&["zone1.example.", "zone2.example"]),
            &strings(&["192.0.2.0/24", "2001:db8::/32", "2001:db8:1200::/40", "2001:db8:1234::/48"]),
        )
        .unwrap();

        assert_eq!(zones.len(), 6);
        assert_eq!(zones[0], Zone::Forward("zone1.example.".to_string()));
        assert_eq!(zones[1], Zone::Forward("zone2.example".to_string()));
        assert_eq!(zones[2], Zone::Reverse(Prefix::from_str("192.0.2.0/24").unwrap()));
        assert_eq!(zones[5], Zone::Reverse(Prefix::from_str("2001:db8:1234::/48").unwrap()));
    }

    #[test]
    fn test_zones_reverse_only() {
        let zones = get_parsed_zones(&[], &strings(&["192.0.2.0/24"])).unwrap();

        assert_eq!(zones.len(), 1);
    }

    #[test]
    fn test_zones_rejects_unsupported_prefix_sizes() {
        for prefix in ["192.0.2.0/25", "10.0.0.0/8", "2001:db8::/64", "2001:db8::/36"] {
            let err = get_parsed_zones(&[], &strings(&[prefix])).unwrap_err();

            assert!(
                matches!(err, ZoneError::UnsupportedPrefixLength { .. }),
                "{} should be rejected, got {:?}",
                prefix,
                err
            );
        }
    }

    #[test]
    fn test_zones_rejects_malformed_prefix() {
        let err = get_parsed_zones(&strings(&["zone1.example"]), &strings(&["192.0.2.0"])).unwrap_err();

        assert!(matches!(err, ZoneError::InvalidPrefix { .. }));
    }
}

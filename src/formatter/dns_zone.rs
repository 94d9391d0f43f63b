use crate::error::ZoneError;
use crate::model::dns::{without_trailing_dot, DNSRecord, Host, Zone};
use crate::model::record::Prefix;
use crate::parser::reverse::{reverse_name4, reverse_name6, reverse_zone};
use std::net::IpAddr;
use tracing::debug;

const ZONE_FILE_EXTENSION: &str = "zone";

/// Generated text for one zone and the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOutput {
    pub zone_text: String,
    pub zone_file_name: String,
    pub record_count: usize,
}

/// zone1.example. -> zone1.example.zone
pub fn forward_zone_file_name(zone_name: &str) -> String {
    format!("{}.{}", without_trailing_dot(zone_name), ZONE_FILE_EXTENSION)
}

/// 192.0.2.0/24 -> 2.0.192.in-addr.arpa.zone
pub fn reverse_zone_file_name(prefix: &Prefix) -> Result<String, ZoneError> {
    let zone_name = reverse_zone(prefix)?;

    Ok(format!("{}.{}", without_trailing_dot(&zone_name), ZONE_FILE_EXTENSION))
}

pub fn zone_file_name(zone: &Zone) -> Result<String, ZoneError> {
    match zone {
        Zone::Forward(zone_name) => Ok(forward_zone_file_name(zone_name)),
        Zone::Reverse(prefix) => reverse_zone_file_name(prefix),
    }
}

/// A records for every host whose name ends with `zone_name` and that has an IPv4 address.
///
/// The match is a plain string suffix test against the name as stored, so `zone1.example` also
/// matches `otherzone1.example`.
pub fn generate_forward_records(zone_name: &str, hosts: &[Host]) -> Vec<DNSRecord> {
    let mut records = Vec::new();

    for host in hosts {
        if !host.name.ends_with(zone_name) {
            continue;
        }

        match host.ipv4 {
            Some(ipv4) => records.push(DNSRecord::a(&host.name, ipv4)),
            None => debug!("Host {} has no IPv4 address, skipped in forward zone {}", host.name, zone_name),
        }
    }

    records
}

/// PTR records for every host with an address inside `prefix`. IPv4 is checked before IPv6.
pub fn generate_reverse_records(prefix: &Prefix, hosts: &[Host]) -> Vec<DNSRecord> {
    let mut records = Vec::new();

    for host in hosts {
        let reverse_name = match (host.ipv4, host.ipv6) {
            (Some(ipv4), _) if prefix.contains(IpAddr::V4(ipv4)) => reverse_name4(ipv4),
            (_, Some(ipv6)) if prefix.contains(IpAddr::V6(ipv6)) => reverse_name6(ipv6),
            _ => {
                // Belongs to some other reverse zone
                continue;
            }
        };

        records.push(DNSRecord::ptr(reverse_name, &host.name));
    }

    records
}

fn generate_record_lines(buffer: &mut String, records: &[DNSRecord]) {
    for record in records {
        buffer.push_str(record.to_string().as_str());
        buffer.push('\n');
    }
}

pub fn generate_forward_zone_text(zone_name: &str, hosts: &[Host]) -> String {
    let mut buffer = String::new();

    generate_record_lines(&mut buffer, &generate_forward_records(zone_name, hosts));

    buffer
}

pub fn generate_reverse_zone_text(prefix: &Prefix, hosts: &[Host]) -> String {
    let mut buffer = String::new();

    generate_record_lines(&mut buffer, &generate_reverse_records(prefix, hosts));

    buffer
}

/// Builds the text and file name of `zone`. Unsupported reverse prefixes fail before any text is built.
pub fn format_zone(zone: &Zone, hosts: &[Host]) -> Result<ZoneOutput, ZoneError> {
    let zone_file_name = zone_file_name(zone)?;

    let records = match zone {
        Zone::Forward(zone_name) => generate_forward_records(zone_name, hosts),
        Zone::Reverse(prefix) => generate_reverse_records(prefix, hosts),
    };

    let mut zone_text = String::new();
    generate_record_lines(&mut zone_text, &records);

    Ok(ZoneOutput {
        zone_text,
        zone_file_name,
        record_count: records.len(),
    })
}

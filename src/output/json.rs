//! JSON output for a subnet report.

use crate::models::SubnetReport;
use std::error::Error;

/// Pretty-printed JSON; addresses as dotted-quad strings.
pub fn format_json(report: &SubnetReport) -> Result<String, Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;
    use crate::processing::EdgePolicy;
    use serde_json::Value;

    #[test]
    fn test_format_json() {
        let report = calculate("192.168.1.10/24", EdgePolicy::Classic).unwrap();
        let value: Value = serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert_eq!(value["input"], "192.168.1.10/24");
        assert_eq!(value["subnet_mask"], "255.255.255.0");
        assert_eq!(value["wildcard_mask"], "0.0.0.255");
        assert_eq!(value["network_address"], "192.168.1.0");
        assert_eq!(value["first_usable"], "192.168.1.1");
        assert_eq!(value["last_usable"], "192.168.1.254");
        assert_eq!(value["broadcast_address"], "192.168.1.255");
        assert_eq!(value["usable_host_count"], 254);
    }

    #[test]
    fn test_format_json_absent_hosts() {
        let report = calculate("10.0.0.5/32", EdgePolicy::Classic).unwrap();
        let value: Value = serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert!(value["first_usable"].is_null());
        assert!(value["last_usable"].is_null());
        assert_eq!(value["usable_host_count"], 0);
    }
}

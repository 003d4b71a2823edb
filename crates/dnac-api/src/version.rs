// Controller version dispatch
//
// DNA Center moved its resources between software releases, so the
// session's version decides which inventory path (if any) this crate can
// talk to. Versions with no known path are rejected when the client is
// constructed, never at request time.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Parsed DNA Center software version (`major.minor.patch`).
///
/// Ordering is numeric per component, so `1.10.0 > 1.2.8` -- unlike the
/// plain string comparison some integrations use, which orders those two
/// the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControllerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ControllerVersion {
    /// Latest release that still serves the v1 network-device resource.
    pub const MAX_SUPPORTED: Self = Self::new(1, 2, 8);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// The intent API resource path for the device inventory.
    ///
    /// Returns `None` when this version is newer than anything this crate
    /// knows a path for; [`crate::NetworkDeviceClient`] turns that into
    /// [`Error::UnsupportedVersion`] at construction.
    pub fn network_device_path(self) -> Option<&'static str> {
        if self <= Self::MAX_SUPPORTED {
            Some("/dna/intent/api/v1/network-device")
        } else {
            None
        }
    }
}

impl fmt::Display for ControllerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ControllerVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || Error::UnsupportedVersion { version: s.to_owned() };

        let parts: Vec<&str> = s.split('.').collect();
        let &[major, minor, patch] = parts.as_slice() else {
            return Err(unsupported());
        };

        Ok(Self {
            major: major.parse().map_err(|_| unsupported())?,
            minor: minor.parse().map_err(|_| unsupported())?,
            patch: patch.parse().map_err(|_| unsupported())?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_triple() {
        let v: ControllerVersion = "1.2.8".parse().unwrap();
        assert_eq!(v, ControllerVersion::new(1, 2, 8));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "1.2", "1.2.3.4", "banana", "1.2.x", "1..8"] {
            assert!(bad.parse::<ControllerVersion>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_error_carries_the_offending_string() {
        let err = "2.x".parse::<ControllerVersion>().unwrap_err();
        match err {
            Error::UnsupportedVersion { version } => assert_eq!(version, "2.x"),
            other => panic!("expected UnsupportedVersion, got: {other:?}"),
        }
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        let v1_10_0: ControllerVersion = "1.10.0".parse().unwrap();
        let v1_2_8: ControllerVersion = "1.2.8".parse().unwrap();
        assert!(v1_10_0 > v1_2_8);
        assert!("1.10.0" < "1.2.8"); // the string comparison disagrees
    }

    #[test]
    fn network_device_path_up_to_1_2_8() {
        for v in ["1.0.0", "1.2.0", "1.2.8"] {
            let version: ControllerVersion = v.parse().unwrap();
            assert_eq!(
                version.network_device_path(),
                Some("/dna/intent/api/v1/network-device"),
                "no path for {v}"
            );
        }
    }

    #[test]
    fn no_network_device_path_past_1_2_8() {
        for v in ["1.2.9", "1.3.0", "1.10.0", "2.1.2"] {
            let version: ControllerVersion = v.parse().unwrap();
            assert_eq!(version.network_device_path(), None, "unexpected path for {v}");
        }
    }

    #[test]
    fn display_round_trips() {
        let v = ControllerVersion::new(1, 2, 8);
        assert_eq!(v.to_string().parse::<ControllerVersion>().unwrap(), v);
    }
}

// Device-inventory query endpoints
//
// Read-only queries against the network-device resource: list all, by
// UUID, by hostname, by management IP. Results come back in controller
// order with cardinality unchecked -- callers get exactly what the
// controller returned.

use tracing::debug;

use crate::client::NetworkDeviceClient;
use crate::error::Error;
use crate::filter::RequestFilter;
use crate::models::NetworkDevice;

impl NetworkDeviceClient {
    /// List every device the controller manages.
    ///
    /// `GET {respath}` with the filter expression, if any, appended
    /// verbatim.
    pub async fn list_devices(
        &self,
        filter: Option<&RequestFilter>,
    ) -> Result<Vec<NetworkDevice>, Error> {
        let suffix = filter.map_or("", RequestFilter::as_str);
        let url = self.resource_url(suffix)?;
        debug!("listing devices");
        self.get(url, "list_devices").await
    }

    /// Find a device by its UUID.
    ///
    /// `GET {respath}/{id}`; a non-empty filter is appended as a trailing
    /// `/{filter}` segment, matching the controller's routing for filtered
    /// by-id lookups. By convention the controller answers with a
    /// single-element list, but whatever it returns is passed through.
    pub async fn get_device_by_id(
        &self,
        id: &str,
        filter: Option<&RequestFilter>,
    ) -> Result<Vec<NetworkDevice>, Error> {
        if id.is_empty() {
            return Err(Error::MissingArgument("id"));
        }
        let suffix = match filter {
            Some(f) if !f.is_empty() => format!("/{id}/{f}"),
            _ => format!("/{id}"),
        };
        let url = self.resource_url(&suffix)?;
        debug!(id, "fetching device by id");
        self.get(url, &format!("get_device_by_id({id})")).await
    }

    /// Find a device by hostname.
    ///
    /// `GET {respath}?hostname={hostname}`
    pub async fn get_device_by_hostname(
        &self,
        hostname: &str,
    ) -> Result<Vec<NetworkDevice>, Error> {
        if hostname.is_empty() {
            return Err(Error::MissingArgument("hostname"));
        }
        let filter = RequestFilter::new("hostname", hostname);
        let url = self.resource_url(filter.as_str())?;
        debug!(hostname, "fetching device by hostname");
        self.get(url, &format!("get_device_by_hostname({hostname})"))
            .await
    }

    /// Find a device by its management IP address.
    ///
    /// `GET {respath}?managementIpAddress={ip}`. The address is passed
    /// through unvalidated; the controller is the authority on format.
    pub async fn get_device_by_ip(&self, ip: &str) -> Result<Vec<NetworkDevice>, Error> {
        if ip.is_empty() {
            return Err(Error::MissingArgument("ip"));
        }
        let filter = RequestFilter::new("managementIpAddress", ip);
        let url = self.resource_url(filter.as_str())?;
        debug!(ip, "fetching device by ip");
        self.get(url, &format!("get_device_by_ip({ip})")).await
    }
}

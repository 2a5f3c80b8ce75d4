use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct InterfacesInfo {
    #[serde(default)]
    pub rows: Vec<InterfaceRow>,
}

#[derive(Deserialize, Debug)]
pub struct InterfaceRow {
    pub identifier: Option<String>,
    #[serde(default)]
    pub ipv4: Vec<InterfaceAddress>,
}

#[derive(Deserialize, Debug)]
pub struct InterfaceAddress {
    pub ipaddr: Option<String>,
}

impl InterfaceAddress {
    /// Address with any CIDR suffix stripped, e.g. "203.0.113.5/24"
    /// becomes "203.0.113.5".
    pub fn address(&self) -> Option<&str> {
        self.ipaddr.as_deref().and_then(|ip| ip.split('/').next())
    }
}

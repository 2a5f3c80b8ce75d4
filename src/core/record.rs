#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl DnsRecord {
    /// Configured names may omit the zone suffix, so "home" must match
    /// "home.example.com".
    pub fn matches_name(&self, configured: &str) -> bool {
        self.name.contains(configured)
    }
}

//! User agent (scenario participant) as seen by the plugins

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// A SIPp user agent taking part in a scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAgent {
    pub name: String,
    /// Signaling source address
    pub srcaddr: Option<SocketAddr>,
    /// RTP media address
    pub mediaaddr: Option<SocketAddr>,
    /// Logical log name -> file path, in registration order
    pub logfiles: IndexMap<String, PathBuf>,
}

impl UserAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the signaling source address (fluent API)
    pub fn with_srcaddr(mut self, addr: SocketAddr) -> Self {
        self.srcaddr = Some(addr);
        self
    }

    /// Set the media address (fluent API)
    pub fn with_mediaaddr(mut self, addr: SocketAddr) -> Self {
        self.mediaaddr = Some(addr);
        self
    }

    /// Register a log file under a logical name (fluent API)
    pub fn with_logfile(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.logfiles.insert(name.into(), path.into());
        self
    }

    pub fn iter_logfile_items(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.logfiles.iter().map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// Signaling socket rendered for display, `None` when unassigned
    pub fn sockaddr(&self) -> String {
        match self.srcaddr {
            Some(addr) => addr.to_string(),
            None => "None".to_string(),
        }
    }
}

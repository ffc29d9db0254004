use std::fmt;

use crate::error::LookupError;
use crate::network::address::AddressRecord;

/// Name prefix shared by loopback interfaces (`lo`, `lo0`).
pub const LOOPBACK_PREFIX: &str = "lo";

/// A named network adapter known to the operating system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interface {
    pub name: String,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Loopback detection is by name only, mirroring how status bars treat `lo*`.
    pub fn is_loopback(&self) -> bool {
        self.name.starts_with(LOOPBACK_PREFIX)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Read-only access to the host's interface table.
///
/// Implementations must answer from current state on every call. The
/// address lookup is separate from enumeration so an interface removed in
/// between surfaces as a [`LookupError`] instead of a stale answer.
pub trait InterfaceProvider {
    /// Lists every interface in the order the platform reports them.
    fn interfaces(&self) -> Vec<Interface>;

    /// Returns the addresses currently bound to `interface`.
    fn addresses(&self, interface: &Interface) -> Result<Vec<AddressRecord>, LookupError>;
}

impl<P: InterfaceProvider + ?Sized> InterfaceProvider for &P {
    fn interfaces(&self) -> Vec<Interface> {
        (**self).interfaces()
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<AddressRecord>, LookupError> {
        (**self).addresses(interface)
    }
}

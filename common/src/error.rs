use thiserror::Error;

/// Failure to read the addresses bound to one interface.
///
/// Providers return it per interface; the prober treats it as
/// "no addresses" and moves on to the next interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The interface was enumerated but is gone by the time its addresses are read.
    #[error("interface '{name}' disappeared before its addresses could be read")]
    Vanished { name: String },

    /// The interface exists but its address table could not be read.
    #[error("addresses of '{name}' could not be resolved: {reason}")]
    Unresolvable { name: String, reason: String },
}

impl LookupError {
    /// Name of the interface the lookup was issued for.
    pub fn interface_name(&self) -> &str {
        match self {
            LookupError::Vanished { name } | LookupError::Unresolvable { name, .. } => name,
        }
    }
}

use netprobe_common::error::LookupError;
use netprobe_common::network::address::AddressRecord;
use netprobe_common::network::interface::{Interface, InterfaceProvider};

/// Outcome of one address lookup.
pub type Lookup = Result<Vec<AddressRecord>, LookupError>;

/// A frozen interface table.
///
/// Each entry keeps the outcome of its address lookup, failures included,
/// so a snapshot replays exactly what its source answered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(Interface, Lookup)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every interface and its addresses from `provider` once.
    pub fn capture<P: InterfaceProvider + ?Sized>(provider: &P) -> Self {
        let entries = provider
            .interfaces()
            .into_iter()
            .map(|interface| {
                let lookup = provider.addresses(&interface);
                (interface, lookup)
            })
            .collect();
        Self { entries }
    }

    /// Appends an interface with the given bound addresses.
    pub fn with<I, R>(mut self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<AddressRecord>,
    {
        let records = records.into_iter().map(Into::into).collect();
        self.entries.push((Interface::new(name), Ok(records)));
        self
    }

    /// Appends an interface that disappears before its addresses are read.
    pub fn with_vanished(mut self, name: &str) -> Self {
        let error = LookupError::Vanished {
            name: name.to_string(),
        };
        self.entries.push((Interface::new(name), Err(error)));
        self
    }

    /// Appends an interface whose address table cannot be read.
    pub fn with_unresolvable(mut self, name: &str, reason: &str) -> Self {
        let error = LookupError::Unresolvable {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        self.entries.push((Interface::new(name), Err(error)));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Interface, &Lookup)> {
        self.entries.iter().map(|(interface, lookup)| (interface, lookup))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InterfaceProvider for Snapshot {
    fn interfaces(&self) -> Vec<Interface> {
        self.entries
            .iter()
            .map(|(interface, _)| interface.clone())
            .collect()
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<AddressRecord>, LookupError> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == interface)
            .map(|(_, lookup)| lookup.clone())
            .unwrap_or_else(|| {
                Err(LookupError::Vanished {
                    name: interface.name.clone(),
                })
            })
    }
}

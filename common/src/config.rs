/// Options shared by every netprobe command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Rule deciding whether an interface counts as connected.
    pub criterion: Criterion,
}

/// The rule an interface must satisfy for the host to be reported `Up`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// A non-loopback interface carries an IPv4 address, or an IPv6 address
    /// outside `fe80:`.
    #[default]
    Address,
    /// Any interface, loopback included, carries a hardware address.
    ///
    /// A MAC address says nothing about reachability, so this reports `Up`
    /// for unplugged adapters too. Only used when explicitly requested.
    LinkLayer,
}

//! Scenario tests for the prober against synthetic interface tables.

#[cfg(test)]
mod probe;
#[cfg(test)]
mod util;

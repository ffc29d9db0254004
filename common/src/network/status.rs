use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Overall connectivity of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Up,
    Down,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Up => "Up",
            Status::Down => "Down",
        }
    }

    pub fn is_up(self) -> bool {
        self == Status::Up
    }
}

impl From<bool> for Status {
    fn from(connected: bool) -> Self {
        if connected { Status::Up } else { Status::Down }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a network status, expected 'Up' or 'Down'")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Status::Up),
            "down" => Ok(Status::Down),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

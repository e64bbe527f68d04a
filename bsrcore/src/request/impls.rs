use std::{
    fmt,
    ops::Deref,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    Approver,
    Request,
    Requests,
};

impl Request {
    /// The user currently occupying the given approver slot.
    pub fn approver(&self, slot: Approver) -> Option<&str> {
        match slot {
            Approver::Librarian => self.librarian.as_deref(),
            Approver::Hod => self.hod.as_deref(),
            Approver::LibraryConvener => self.library_convener.as_deref(),
        }
    }
}

impl fmt::Display for Approver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Approver> for &'static str {
    fn from(slot: Approver) -> &'static str {
        match slot {
            Approver::Librarian => "librarian",
            Approver::Hod => "hod",
            Approver::LibraryConvener => "library_convener",
        }
    }
}

impl FromStr for Approver {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "librarian" => Ok(Approver::Librarian),
            "hod" => Ok(Approver::Hod),
            "library_convener" => Ok(Approver::LibraryConvener),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl From<Vec<Request>> for Requests {
    fn from(requests: Vec<Request>) -> Self {
        Self(requests)
    }
}

impl Deref for Requests {
    type Target = [Request];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Requests {
    pub fn into_inner(self) -> Vec<Request> {
        self.0
    }
}

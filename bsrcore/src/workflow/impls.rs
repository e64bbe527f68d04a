use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::State;

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<State> for String {
    fn from(state: State) -> String {
        format!("{state}")
    }
}

impl From<State> for &'static str {
    fn from(state: State) -> &'static str {
        match state {
            State::DuplicationCheck => "Pending for Duplication Check",
            State::HodApproval => "Pending for HOD Approval",
            State::ConvenerApproval => "Pending for Library Convener Approval",
            State::Approved => "Approved",
            State::Rejected => "Rejected",
            State::Unknown => "unknown",
        }
    }
}

impl FromStr for State {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending for Duplication Check" => Ok(State::DuplicationCheck),
            "Pending for HOD Approval" => Ok(State::HodApproval),
            "Pending for Library Convener Approval" => Ok(State::ConvenerApproval),
            "Approved" => Ok(State::Approved),
            "Rejected" => Ok(State::Rejected),
            // Unknown,
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for State {
        fn value_variants<'a>() -> &'a [Self] {
            &[
                State::DuplicationCheck,
                State::HodApproval,
                State::ConvenerApproval,
                State::Approved,
                State::Rejected,
            ]
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            match self {
                State::DuplicationCheck => Some(PossibleValue::new("duplication-check")),
                State::HodApproval => Some(PossibleValue::new("hod-approval")),
                State::ConvenerApproval => Some(PossibleValue::new("convener-approval")),
                State::Approved => Some(PossibleValue::new("approved")),
                State::Rejected => Some(PossibleValue::new("rejected")),
                State::Unknown => None,
            }
        }
    }
}

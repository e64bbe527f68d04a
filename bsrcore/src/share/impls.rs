use enumset::EnumSet;
use std::ops::Deref;
use super::{
    Permit,
    Share,
    Shares,
};

impl Share {
    /// The permit set encoded by the flag columns.
    pub fn permits(&self) -> EnumSet<Permit> {
        let mut result = EnumSet::empty();
        if self.read > 0 {
            result |= Permit::Read;
        }
        if self.write > 0 {
            result |= Permit::Write;
        }
        if self.submit > 0 {
            result |= Permit::Submit;
        }
        if self.share > 0 {
            result |= Permit::Share;
        }
        result
    }
}

impl From<Vec<Share>> for Shares {
    fn from(shares: Vec<Share>) -> Self {
        Self(shares)
    }
}

impl Deref for Shares {
    type Target = [Share];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Shares {
    pub fn into_inner(self) -> Vec<Share> {
        self.0
    }

    /// The share held by the given user, if any.
    pub fn for_user(&self, user: &str) -> Option<&Share> {
        self.0.iter().find(|share| share.user == user)
    }
}

#[cfg(test)]
mod test {
    use enumset::EnumSet;
    use crate::share::{
        Permit,
        Share,
    };

    #[test]
    fn flag_decoding() {
        let share = Share {
            read: 1,
            submit: 1,
            share: 1,
            ..Default::default()
        };
        assert_eq!(
            share.permits(),
            Permit::Read | Permit::Submit | Permit::Share,
        );

        let none = Share::default();
        assert_eq!(none.permits(), EnumSet::empty());
    }
}

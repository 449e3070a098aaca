//! Identity data shared by every kind of person.

use serde::{Deserialize, Serialize};

use registrar_core::Entity;

/// Name + identifier pair composed into each person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity<Id> {
    name: String,
    id_number: Id,
}

impl<Id> Identity<Id> {
    pub fn new(name: impl Into<String>, id_number: Id) -> Self {
        Self {
            name: name.into(),
            id_number,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id_number(&self) -> &Id {
        &self.id_number
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl<Id: core::fmt::Display> core::fmt::Display for Identity<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ID: {} Name: {}", self.id_number, self.name)
    }
}

/// Common read interface over students and instructors.
pub trait Person: Entity {
    fn identity(&self) -> &Identity<Self::Id>;

    fn name(&self) -> &str {
        self.identity().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_core::StudentId;

    #[test]
    fn identity_summary_lists_id_then_name() {
        let identity = Identity::new("Ada", StudentId::from("S1"));
        assert_eq!(identity.to_string(), "ID: S1 Name: Ada");
    }

    #[test]
    fn set_name_keeps_identifier() {
        let mut identity = Identity::new("Ada", StudentId::from("S1"));
        identity.set_name("Ada Lovelace");
        assert_eq!(identity.name(), "Ada Lovelace");
        assert_eq!(identity.id_number(), &StudentId::from("S1"));
    }
}

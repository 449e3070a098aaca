use serde::{Deserialize, Serialize};

use registrar_core::{Entity, InstructorId};

use crate::person::{Identity, Person};

/// A member of teaching staff. Not linked to courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    identity: Identity<InstructorId>,
    department: String,
}

impl Instructor {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<InstructorId>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(name, id_number.into()),
            department: department.into(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.identity.set_name(name);
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }
}

impl Entity for Instructor {
    type Id = InstructorId;

    fn id(&self) -> &Self::Id {
        self.identity.id_number()
    }
}

impl Person for Instructor {
    fn identity(&self) -> &Identity<InstructorId> {
        &self.identity
    }
}

impl core::fmt::Display for Instructor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:>12} {}", "ID:", self.id())?;
        writeln!(f, "{:>12} {}", "Name:", self.name())?;
        write!(f, "{:>12} {}", "Department:", self.department)
    }
}

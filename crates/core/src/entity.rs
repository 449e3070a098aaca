//! Entity trait: records that keep their identity while their fields change.

/// A registered record addressed by its identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this record carries the given plain-string identifier.
    fn has_id(&self, id: &str) -> bool
    where
        Self::Id: AsRef<str>,
    {
        self.id().as_ref() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::CourseId;

    struct Room(CourseId);

    impl Entity for Room {
        type Id = CourseId;

        fn id(&self) -> &CourseId {
            &self.0
        }
    }

    #[test]
    fn has_id_compares_string_form() {
        let room = Room(CourseId::from("C1"));
        assert!(room.has_id("C1"));
        assert!(!room.has_id("c1"));
    }
}

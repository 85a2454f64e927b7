use std::rc::Rc;

use famfin_core::{Entity, FamilyId};
use famfin_employment::Job;

use crate::person::PersonRef;

/// Minimum age a member must have before the family can take in a child.
pub const MIN_PARENT_AGE: u32 = 21;

/// A household: two spouses plus any children.
///
/// Members are shared handles; the same person may be referenced from other
/// places as well.
#[derive(Debug)]
pub struct Family {
    id: FamilyId,
    members: Vec<PersonRef>,
}

impl Family {
    /// Form a family, marrying `spouse1` and `spouse2` to each other.
    ///
    /// Marriage goes through the age-gated setter, so an underage spouse stays
    /// unmarried; both people become members either way.
    pub fn new(spouse1: PersonRef, spouse2: PersonRef) -> Self {
        spouse1.borrow_mut().set_spouse(Some(&spouse2));
        spouse2.borrow_mut().set_spouse(Some(&spouse1));

        let id = FamilyId::new();
        tracing::debug!(
            family = %id,
            spouse1 = %spouse1.borrow().id(),
            spouse2 = %spouse2.borrow().id(),
            "family formed"
        );

        Self {
            id,
            members: vec![spouse1, spouse2],
        }
    }

    pub fn members(&self) -> &[PersonRef] {
        &self.members
    }

    pub fn contains(&self, person: &PersonRef) -> bool {
        self.members.iter().any(|m| Rc::ptr_eq(m, person))
    }

    /// Add `child` if at least one current member is [`MIN_PARENT_AGE`] or
    /// older. Returns whether the child was added. The child's own age is not
    /// checked.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        let has_parent = self
            .members
            .iter()
            .any(|m| m.borrow().age() >= MIN_PARENT_AGE);

        if !has_parent {
            tracing::debug!(family = %self.id, "child rejected: no member old enough");
            return false;
        }

        self.members.push(child);
        true
    }

    /// Sum of the annual income of every employed member.
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .filter_map(|m| m.borrow().job().map(Job::annual_income))
            .fold(0, i64::saturating_add)
    }
}

impl Entity for Family {
    type Id = FamilyId;

    fn id(&self) -> FamilyId {
        self.id
    }
}

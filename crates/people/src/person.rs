use std::cell::RefCell;
use std::rc::{Rc, Weak};

use famfin_core::{Entity, PersonId};
use famfin_employment::Job;

/// Minimum age for holding a job.
pub const MIN_WORKING_AGE: u32 = 16;

/// Minimum age for having a spouse.
pub const MIN_MARRIAGE_AGE: u32 = 18;

const NIL: &str = "nil";

/// Shared handle to a [`Person`].
pub type PersonRef = Rc<RefCell<Person>>;

/// A person. Job and spouse only change through the age-gated setters.
#[derive(Debug)]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u32,
    job: Option<Job>,
    spouse: Option<Weak<RefCell<Person>>>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Move this person behind a shared handle.
    pub fn into_shared(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    /// Mutable access to the current job, e.g. for a raise.
    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Assign or clear the job.
    ///
    /// Below [`MIN_WORKING_AGE`] the job is always cleared, whatever was passed.
    pub fn set_job(&mut self, job: Option<Job>) {
        if self.age >= MIN_WORKING_AGE {
            self.job = job;
            return;
        }
        if let Some(job) = job {
            tracing::debug!(
                person = %self.id,
                age = self.age,
                title = job.title(),
                "job assignment ignored: below minimum working age"
            );
        }
        self.job = None;
    }

    /// The spouse, if one is set and still alive.
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.as_ref().and_then(Weak::upgrade)
    }

    /// Assign or clear the spouse.
    ///
    /// Only this person's own age is checked: below [`MIN_MARRIAGE_AGE`] the
    /// spouse is always cleared. The spouse's age is not considered.
    pub fn set_spouse(&mut self, spouse: Option<&PersonRef>) {
        if self.age >= MIN_MARRIAGE_AGE {
            self.spouse = spouse.map(Rc::downgrade);
            return;
        }
        if spouse.is_some() {
            tracing::debug!(
                person = %self.id,
                age = self.age,
                "spouse assignment ignored: below minimum marriage age"
            );
        }
        self.spouse = None;
    }

    pub fn is_married_to(&self, other: &PersonRef) -> bool {
        self.spouse().is_some_and(|spouse| Rc::ptr_eq(&spouse, other))
    }

    /// One-line summary; absent job or spouse render as `nil`.
    pub fn describe(&self) -> String {
        let job = self.job.as_ref().map_or(NIL, Job::title);
        let spouse = match self.spouse() {
            // Self-marriage: the cell may already be mutably borrowed by our caller.
            Some(spouse) if core::ptr::eq(spouse.as_ptr(), self) => self.first_name.clone(),
            Some(spouse) => spouse.borrow().first_name.clone(),
            None => NIL.to_string(),
        };
        format!(
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            self.first_name, self.last_name, self.age, job, spouse
        )
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> PersonId {
        self.id
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

//! `find`: narrow both displayed lists.

use tracing::debug;

use crate::model::predicates::{
    AgeMatchesPredicate, AllOf, MedicalQualificationContainsKeywordPredicate,
    NameContainsKeywordPredicate, NricMatchesPredicate, Predicate, RiskLevelMatchesPredicate,
    ShowNone, TagContainsKeywordPredicate,
};
use crate::model::{Elderly, Model, Person, Volunteer};

use super::CommandResult;

/// Usage of `find`.
pub const FIND_USAGE: &str = "find: Finds all volunteers and elderly matching every given \
criterion. Keywords are matched case-insensitively as substrings.\n\
Parameters: [n/NAME] [ic/NRIC] [ag/AGE] [r/RISK_LEVEL] [t/TAG] [mt/MEDICAL_QUALIFICATION] \
(at least one)\n\
Example: find n/alice mt/cpr";

/// Criteria given to `find`. Every criterion present must hold.
///
/// A risk level only applies to elderly and a medical qualification only to
/// volunteers; giving one hides every record of the other kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindCriteria {
    /// Name keyword.
    pub name: Option<NameContainsKeywordPredicate>,
    /// Exact NRIC.
    pub nric: Option<NricMatchesPredicate>,
    /// Exact age.
    pub age: Option<AgeMatchesPredicate>,
    /// Tag keyword.
    pub tag: Option<TagContainsKeywordPredicate>,
    /// Exact risk level.
    pub risk_level: Option<RiskLevelMatchesPredicate>,
    /// Medical qualification keyword.
    pub medical_qualification: Option<MedicalQualificationContainsKeywordPredicate>,
}

impl FindCriteria {
    /// Check if no criterion was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn shared<T>(&self) -> Vec<Box<dyn Predicate<T>>>
    where
        T: Person + 'static,
    {
        let mut predicates: Vec<Box<dyn Predicate<T>>> = Vec::new();
        if let Some(p) = &self.name {
            predicates.push(Box::new(p.clone()));
        }
        if let Some(p) = &self.nric {
            predicates.push(Box::new(p.clone()));
        }
        if let Some(p) = self.age {
            predicates.push(Box::new(p));
        }
        if let Some(p) = &self.tag {
            predicates.push(Box::new(p.clone()));
        }
        predicates
    }

    /// Predicate for the volunteer list.
    #[must_use]
    pub fn volunteer_predicate(&self) -> Box<dyn Predicate<Volunteer>> {
        if self.risk_level.is_some() {
            return Box::new(ShowNone);
        }
        let mut predicates = self.shared::<Volunteer>();
        if let Some(p) = &self.medical_qualification {
            predicates.push(Box::new(p.clone()));
        }
        Box::new(AllOf::new(predicates))
    }

    /// Predicate for the elderly list.
    #[must_use]
    pub fn elderly_predicate(&self) -> Box<dyn Predicate<Elderly>> {
        if self.medical_qualification.is_some() {
            return Box::new(ShowNone);
        }
        let mut predicates = self.shared::<Elderly>();
        if let Some(p) = self.risk_level {
            predicates.push(Box::new(p));
        }
        Box::new(AllOf::new(predicates))
    }
}

pub(super) fn find(model: &mut Model, criteria: &FindCriteria) -> CommandResult {
    debug!(?criteria, "Applying find criteria");
    model.update_volunteer_filter(criteria.volunteer_predicate());
    model.update_elderly_filter(criteria.elderly_predicate());

    let volunteers = model.filtered_volunteers().len();
    let elderly = model.filtered_elderly().len();
    CommandResult::new(format!("{volunteers} volunteers and {elderly} elderly listed!"))
        .with_lists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::Command;
    use crate::model::{Nric, RiskLevel};
    use crate::testutil::{alice_volunteer, benson_volunteer, bob_elderly, carl_elderly};

    fn model() -> Model {
        let mut model = Model::default();
        model.add_volunteer(alice_volunteer()).unwrap();
        model.add_volunteer(benson_volunteer()).unwrap();
        model.add_elderly(bob_elderly()).unwrap();
        model.add_elderly(carl_elderly()).unwrap();
        model
    }

    #[test]
    fn test_find_by_name_across_lists() {
        let mut model = model();
        let criteria = FindCriteria {
            name: Some(NameContainsKeywordPredicate::new("b")),
            ..FindCriteria::default()
        };
        let result = Command::Find(criteria).execute(&mut model).unwrap();

        assert_eq!(result.feedback, "1 volunteers and 1 elderly listed!");
        assert_eq!(model.filtered_volunteers(), vec![&benson_volunteer()]);
        assert_eq!(model.filtered_elderly(), vec![&bob_elderly()]);
    }

    #[test]
    fn test_find_combines_criteria() {
        let mut model = model();
        let criteria = FindCriteria {
            tag: Some(TagContainsKeywordPredicate::new("friends")),
            medical_qualification: Some(MedicalQualificationContainsKeywordPredicate::new("cpr")),
            ..FindCriteria::default()
        };
        Command::Find(criteria).execute(&mut model).unwrap();

        assert_eq!(model.filtered_volunteers(), vec![&alice_volunteer()]);
        assert!(model.filtered_elderly().is_empty());
    }

    #[test]
    fn test_find_risk_level_hides_volunteers() {
        let mut model = model();
        let criteria = FindCriteria {
            risk_level: Some(RiskLevelMatchesPredicate::new(RiskLevel::Medium)),
            ..FindCriteria::default()
        };
        Command::Find(criteria).execute(&mut model).unwrap();

        assert!(model.filtered_volunteers().is_empty());
        assert_eq!(model.filtered_elderly(), vec![&carl_elderly()]);
    }

    #[test]
    fn test_find_by_nric() {
        let mut model = model();
        let criteria = FindCriteria {
            nric: Some(NricMatchesPredicate::new(Nric::parse("s7654321c").unwrap())),
            ..FindCriteria::default()
        };
        Command::Find(criteria).execute(&mut model).unwrap();

        assert!(model.filtered_volunteers().is_empty());
        assert_eq!(model.filtered_elderly(), vec![&bob_elderly()]);
    }

    #[test]
    fn test_is_empty() {
        assert!(FindCriteria::default().is_empty());
        let criteria = FindCriteria {
            tag: Some(TagContainsKeywordPredicate::new("x")),
            ..FindCriteria::default()
        };
        assert!(!criteria.is_empty());
    }
}

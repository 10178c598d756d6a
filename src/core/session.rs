use chrono::{DateTime, Local};

use crate::core::comparison::Comparison;

/// Application state holding the single live comparison.
///
/// A new calculation replaces the previous one as a whole, there is no history.
#[derive(Default)]
pub struct Session {
    current: Option<Entry>,
}

pub struct Entry {
    pub calculated_at: DateTime<Local>,
    pub comparison: Comparison,
}

impl Session {
    /// Store the comparison and return the one it replaces.
    pub fn replace(&mut self, comparison: Comparison) -> Option<Comparison> {
        self.current
            .replace(Entry { calculated_at: Local::now(), comparison })
            .map(|entry| entry.comparison)
    }

    pub fn reset(&mut self) -> Option<Comparison> {
        self.current.take().map(|entry| entry.comparison)
    }

    pub const fn current(&self) -> Option<&Entry> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::find,
        core::{estimation::EstimationResult, parameter::Parameter},
        quantity::distance::Kilometers,
    };

    fn comparison(id: &str) -> Comparison {
        let selected =
            EstimationResult::local(find(id).unwrap(), Parameter::Distance(Kilometers(1.0)), None);
        Comparison::build(selected, Vec::new())
    }

    #[test]
    fn test_last_writer_wins() {
        let mut session = Session::default();
        assert!(session.current().is_none());
        assert!(session.replace(comparison("car_gasoline")).is_none());

        let previous = session.replace(comparison("bus")).unwrap();
        assert_eq!(previous.selected.activity.id, "car_gasoline");
        assert_eq!(session.current().unwrap().comparison.selected.activity.id, "bus");
    }

    #[test]
    fn test_reset() {
        let mut session = Session::default();
        session.replace(comparison("train"));
        assert_eq!(session.reset().unwrap().selected.activity.id, "train");
        assert!(session.current().is_none());
        assert!(session.reset().is_none());
    }
}

use crate::models::{Activity, ActivityState};
use std::collections::HashSet;

/// The four things a view can ask the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityAction {
    SaveActivity(Activity),
    SetActiveId(String),
    DeleteActivity(String),
    ClearActivities,
}

impl ActivityAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ActivityAction::SaveActivity(_) => "save-activity",
            ActivityAction::SetActiveId(_) => "set-active-id",
            ActivityAction::DeleteActivity(_) => "delete-activity",
            ActivityAction::ClearActivities => "clear-activities",
        }
    }
}

impl ActivityState {
    pub fn dispatch(&mut self, action: ActivityAction) {
        match action {
            ActivityAction::SaveActivity(activity) => self.save(activity),
            ActivityAction::SetActiveId(id) => self.set_active(&id),
            ActivityAction::DeleteActivity(id) => self.delete(&id),
            ActivityAction::ClearActivities => self.clear(),
        }
    }

    /// Replaces the entry with the same id in place, or appends.
    pub fn save(&mut self, activity: Activity) {
        if self.active_id.as_deref() == Some(activity.id.as_str()) {
            self.active_id = None;
        }

        match self.activities.iter_mut().find(|entry| entry.id == activity.id) {
            Some(entry) => *entry = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn set_active(&mut self, id: &str) {
        if self.get(id).is_some() {
            self.active_id = Some(id.to_string());
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.activities.retain(|entry| entry.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
    }

    pub fn clear(&mut self) {
        self.activities.clear();
        self.active_id = None;
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|entry| entry.id == id)
    }

    pub fn active(&self) -> Option<&Activity> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Restores the store invariants on state that came from outside,
    /// e.g. a snapshot edited by hand. First occurrence of an id wins.
    pub fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.activities.retain(|entry| seen.insert(entry.id.clone()));

        if self.active_id.as_ref().is_some_and(|id| !seen.contains(id)) {
            self.active_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn activity(id: &str, category: Category, name: &str, calories: u32) -> Activity {
        Activity {
            id: id.to_string(),
            category,
            name: name.to_string(),
            calories,
        }
    }

    fn seeded() -> ActivityState {
        let mut state = ActivityState::default();
        state.save(activity("a", Category::Food, "Toast", 200));
        state.save(activity("b", Category::Exercise, "Run", 400));
        state.save(activity("c", Category::Food, "Salad", 300));
        state
    }

    #[test]
    fn save_new_id_appends() {
        let mut state = seeded();
        state.save(activity("d", Category::Food, "Juice", 120));
        assert_eq!(state.len(), 4);
        assert_eq!(state.activities[3].id, "d");
    }

    #[test]
    fn save_existing_id_replaces_in_place() {
        let mut state = seeded();
        state.save(activity("b", Category::Exercise, "Swim", 600));
        assert_eq!(state.len(), 3);
        assert_eq!(state.activities[1], activity("b", Category::Exercise, "Swim", 600));
    }

    #[test]
    fn saving_active_entry_clears_active_id() {
        let mut state = seeded();
        state.set_active("c");
        state.save(activity("c", Category::Food, "Big salad", 450));
        assert!(state.active_id.is_none());
    }

    #[test]
    fn saving_other_entry_keeps_active_id() {
        let mut state = seeded();
        state.set_active("c");
        state.save(activity("e", Category::Food, "Apple", 80));
        assert_eq!(state.active_id.as_deref(), Some("c"));
    }

    #[test]
    fn set_active_ignores_unknown_id() {
        let mut state = seeded();
        state.set_active("missing");
        assert!(state.active_id.is_none());

        state.set_active("a");
        state.set_active("missing");
        assert_eq!(state.active().map(|a| a.name.as_str()), Some("Toast"));
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut state = seeded();
        let before = state.clone();
        state.delete("missing");
        assert_eq!(state, before);
    }

    #[test]
    fn delete_active_entry_clears_active_id() {
        let mut state = seeded();
        state.set_active("b");
        state.delete("b");
        assert_eq!(state.len(), 2);
        assert!(state.active_id.is_none());
        assert!(state.get("b").is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let mut state = seeded();
        state.set_active("a");
        state.clear();
        assert!(state.is_empty());
        assert!(state.active_id.is_none());
    }

    #[test]
    fn dispatch_routes_each_action() {
        let mut state = ActivityState::default();
        state.dispatch(ActivityAction::SaveActivity(activity("x", Category::Food, "Rice", 350)));
        state.dispatch(ActivityAction::SetActiveId("x".into()));
        assert_eq!(state.active_id.as_deref(), Some("x"));
        state.dispatch(ActivityAction::DeleteActivity("x".into()));
        assert!(state.is_empty());
        state.dispatch(ActivityAction::SaveActivity(activity("y", Category::Food, "Egg", 90)));
        state.dispatch(ActivityAction::ClearActivities);
        assert!(state.is_empty());
    }

    #[test]
    fn normalize_drops_duplicates_and_dangling_active() {
        let mut state = ActivityState {
            activities: vec![
                activity("a", Category::Food, "First", 100),
                activity("a", Category::Food, "Second", 200),
            ],
            active_id: Some("gone".into()),
        };
        state.normalize();
        assert_eq!(state.len(), 1);
        assert_eq!(state.activities[0].name, "First");
        assert!(state.active_id.is_none());
    }
}

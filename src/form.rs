use crate::models::{Activity, ActivityForm, ActivityState, Category, UnknownCategory};
use crate::store::ActivityAction;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    UnknownField(String),
    UnknownCategory(UnknownCategory),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::UnknownField(field) => write!(f, "unknown field '{field}'"),
            DraftError::UnknownCategory(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DraftError {}

impl From<UnknownCategory> for DraftError {
    fn from(err: UnknownCategory) -> Self {
        DraftError::UnknownCategory(err)
    }
}

/// The activity currently being typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    activity: Activity,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityDraft {
    pub fn new() -> Self {
        Self {
            activity: Activity {
                id: new_activity_id(),
                category: Category::Food,
                name: String::new(),
                calories: 0,
            },
        }
    }

    pub fn from_activity(activity: Activity) -> Self {
        Self { activity }
    }

    /// Starts from the stored activity when the state has one selected,
    /// otherwise from a blank draft.
    pub fn for_state(state: &ActivityState) -> Self {
        let mut draft = Self::new();
        draft.load_active(state);
        draft
    }

    /// Builds a draft out of posted form fields, coercing as the inputs do.
    pub fn from_form(form: &ActivityForm) -> Result<Self, DraftError> {
        let mut draft = Self::new();
        if !form.id.trim().is_empty() {
            draft.set_field("id", &form.id)?;
        }
        draft.set_field("category", &form.category)?;
        draft.set_field("name", &form.name)?;
        draft.set_field("calories", &form.calories)?;
        Ok(draft)
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), DraftError> {
        match field {
            "id" => self.activity.id = value.trim().to_string(),
            "category" => self.activity.category = value.parse::<Category>()?,
            "name" => self.activity.name = value.to_string(),
            "calories" => self.activity.calories = coerce_calories(value),
            other => return Err(DraftError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn load_active(&mut self, state: &ActivityState) {
        if let Some(active) = state.active() {
            self.activity = active.clone();
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.activity.name.trim().is_empty() && self.activity.calories > 0
    }

    pub fn is_editing(&self, state: &ActivityState) -> bool {
        state.get(&self.activity.id).is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.activity.category {
            Category::Food => "Save food",
            Category::Exercise => "Save exercise",
        }
    }

    /// Saves the draft and resets it to a blank one with a fresh id.
    /// Returns `None` and leaves everything untouched when invalid.
    pub fn submit(&mut self, state: &mut ActivityState) -> Option<Activity> {
        if !self.is_valid() {
            return None;
        }
        let saved = std::mem::replace(self, Self::new()).activity;
        state.dispatch(ActivityAction::SaveActivity(saved.clone()));
        Some(saved)
    }
}

pub fn new_activity_id() -> String {
    Uuid::new_v4().to_string()
}

fn coerce_calories(value: &str) -> u32 {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() && number > 0.0 => {
            number.round().min(f64::from(u32::MAX)) as u32
        }
        _ => 0,
    }
}

use crate::models::{Activity, Category, SummaryResponse};
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalorieTotals {
    pub consumed: u64,
    pub burned: u64,
    pub net: i64,
    pub food_entries: usize,
    pub exercise_entries: usize,
}

pub fn calorie_totals(activities: &[Activity]) -> CalorieTotals {
    let mut totals = CalorieTotals::default();
    for activity in activities {
        let calories = u64::from(activity.calories);
        match activity.category {
            Category::Food => {
                totals.consumed = totals.consumed.saturating_add(calories);
                totals.food_entries += 1;
            }
            Category::Exercise => {
                totals.burned = totals.burned.saturating_add(calories);
                totals.exercise_entries += 1;
            }
        }
    }
    totals.net = totals.consumed as i64 - totals.burned as i64;
    totals
}

/// The calendar day the summary belongs to, in server local time.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn build_summary(activities: &[Activity]) -> SummaryResponse {
    build_summary_at(local_today(), activities)
}

pub fn build_summary_at(today: NaiveDate, activities: &[Activity]) -> SummaryResponse {
    let totals = calorie_totals(activities);
    SummaryResponse {
        date: today.to_string(),
        consumed: totals.consumed,
        burned: totals.burned,
        net: totals.net,
        food_entries: totals.food_entries,
        exercise_entries: totals.exercise_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: Category, calories: u32) -> Activity {
        Activity {
            id: id.to_string(),
            category,
            name: id.to_string(),
            calories,
        }
    }

    #[test]
    fn totals_split_by_category() {
        let totals = calorie_totals(&[
            entry("lunch", Category::Food, 500),
            entry("walk", Category::Exercise, 200),
        ]);
        assert_eq!(totals.consumed, 500);
        assert_eq!(totals.burned, 200);
        assert_eq!(totals.net, 300);
        assert_eq!(totals.food_entries, 1);
        assert_eq!(totals.exercise_entries, 1);
    }

    #[test]
    fn net_goes_negative_when_burning_more() {
        let totals = calorie_totals(&[
            entry("apple", Category::Food, 80),
            entry("run", Category::Exercise, 600),
            entry("bike", Category::Exercise, 300),
        ]);
        assert_eq!(totals.net, -820);
        assert_eq!(totals.consumed as i64 - totals.burned as i64, totals.net);
    }

    #[test]
    fn order_does_not_matter() {
        let mut list = vec![
            entry("a", Category::Food, 120),
            entry("b", Category::Exercise, 45),
            entry("c", Category::Food, 700),
            entry("d", Category::Exercise, 310),
        ];
        let forward = calorie_totals(&list);
        list.reverse();
        assert_eq!(calorie_totals(&list), forward);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(calorie_totals(&[]), CalorieTotals::default());
    }

    #[test]
    fn summary_carries_date() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let summary = build_summary_at(today, &[entry("a", Category::Food, 10)]);
        assert_eq!(summary.date, "2026-01-05");
        assert_eq!(summary.net, 10);
    }
}

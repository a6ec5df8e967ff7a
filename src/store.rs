use crate::models::{Day, Habit};

pub fn next_id(habits: &[Habit]) -> u32 {
    habits.iter().map(|habit| habit.id).max().unwrap_or(0) + 1
}

pub fn find_habit(habits: &[Habit], id: u32) -> Option<&Habit> {
    habits.iter().find(|habit| habit.id == id)
}

pub fn add_habit(habits: &mut Vec<Habit>, name: String, icon: String, target: i64) -> u32 {
    let id = next_id(habits);
    habits.push(Habit {
        id,
        name,
        target,
        icon,
        days: Vec::new(),
    });
    id
}

/// Appends a day to the habit's log. Returns false (and leaves the
/// collection untouched) when the id is unknown.
pub fn add_day(habits: &mut [Habit], id: u32, comment: String) -> bool {
    match habits.iter_mut().find(|habit| habit.id == id) {
        Some(habit) => {
            habit.days.push(Day { comment });
            true
        }
        None => false,
    }
}

/// Removes the day at `index`, shifting later days down. Unknown id or an
/// out-of-range index performs no removal and returns false.
pub fn delete_day(habits: &mut [Habit], id: u32, index: usize) -> bool {
    match habits.iter_mut().find(|habit| habit.id == id) {
        Some(habit) if index < habit.days.len() => {
            habit.days.remove(index);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: u32, days: &[&str]) -> Habit {
        Habit {
            id,
            name: format!("habit {id}"),
            target: 10,
            icon: "sport".into(),
            days: days
                .iter()
                .map(|comment| Day {
                    comment: (*comment).into(),
                })
                .collect(),
        }
    }

    #[test]
    fn next_id_is_one_past_the_max() {
        let habits = vec![habit(1, &[]), habit(3, &[]), habit(5, &[])];
        assert_eq!(next_id(&habits), 6);
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn add_habit_appends_with_empty_days() {
        let mut habits = vec![habit(2, &["done"])];
        let id = add_habit(&mut habits, "Water".into(), "water".into(), 30);
        assert_eq!(id, 3);
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[1].name, "Water");
        assert!(habits[1].days.is_empty());
    }

    #[test]
    fn add_day_appends_in_order() {
        let mut habits = vec![habit(1, &["first"])];
        assert!(add_day(&mut habits, 1, "second".into()));
        let comments: Vec<_> = habits[0].days.iter().map(|d| d.comment.as_str()).collect();
        assert_eq!(comments, ["first", "second"]);
    }

    #[test]
    fn add_day_unknown_id_is_a_no_op() {
        let mut habits = vec![habit(1, &["first"])];
        assert!(!add_day(&mut habits, 9, "lost".into()));
        assert_eq!(habits[0].days.len(), 1);
    }

    #[test]
    fn delete_day_removes_exactly_one_and_shifts() {
        let mut habits = vec![habit(1, &["a", "b", "c"])];
        assert!(delete_day(&mut habits, 1, 1));
        let comments: Vec<_> = habits[0].days.iter().map(|d| d.comment.as_str()).collect();
        assert_eq!(comments, ["a", "c"]);
    }

    #[test]
    fn delete_day_out_of_range_leaves_collection_unchanged() {
        let mut habits = vec![habit(1, &["a"])];
        assert!(!delete_day(&mut habits, 1, 5));
        assert!(!delete_day(&mut habits, 2, 0));
        assert_eq!(habits[0].days.len(), 1);
    }

    #[test]
    fn find_habit_by_id() {
        let habits = vec![habit(1, &[]), habit(2, &[]), habit(3, &[])];
        assert_eq!(find_habit(&habits, 2).map(|h| h.id), Some(2));
        assert!(find_habit(&habits, 7).is_none());
    }
}

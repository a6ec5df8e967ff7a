use crate::models::Habit;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DayRow {
    pub index: usize,
    pub number: usize,
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub percent_text: String,
    pub bar_width: f64,
    pub days: Vec<DayRow>,
    pub next_day_label: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MenuEntry {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Debug, PartialEq)]
pub struct MenuDiff {
    pub to_create: Vec<u32>,
    pub to_update: Vec<u32>,
}

/// Everything one rerender needs: the menu with active flags plus the
/// active habit's header, day list, and progress.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub menu: Vec<MenuEntry>,
    pub habit: HabitView,
}

pub fn progress_percent(day_count: usize, target: i64) -> f64 {
    if target <= 0 {
        return 0.0;
    }
    let percent = day_count as f64 / target as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

pub fn habit_view(habit: &Habit) -> HabitView {
    let percent = progress_percent(habit.days.len(), habit.target);
    HabitView {
        id: habit.id,
        title: habit.name.clone(),
        icon: habit.icon.clone(),
        percent_text: format!("{} %", percent.round() as i64),
        bar_width: percent,
        days: habit
            .days
            .iter()
            .enumerate()
            .map(|(index, day)| DayRow {
                index,
                number: index + 1,
                comment: day.comment.clone(),
            })
            .collect(),
        next_day_label: format!("Day {}", habit.days.len() + 1),
    }
}

pub fn page_view(habits: &[Habit], active_id: u32) -> Option<PageView> {
    let habit = habits.iter().find(|habit| habit.id == active_id)?;
    Some(PageView {
        menu: menu_view(habits, active_id),
        habit: habit_view(habit),
    })
}

pub fn menu_view(habits: &[Habit], active_id: u32) -> Vec<MenuEntry> {
    habits
        .iter()
        .map(|habit| MenuEntry {
            id: habit.id,
            name: habit.name.clone(),
            icon: habit.icon.to_lowercase(),
            active: habit.id == active_id,
        })
        .collect()
}

/// The reconciliation behind the page's incremental menu sync: entries are
/// created for ids not rendered yet and the rest only get their active class
/// refreshed. Entries for habits still present are never removed.
pub fn menu_diff(rendered: &[u32], habits: &[Habit]) -> MenuDiff {
    let mut to_create = Vec::new();
    let mut to_update = Vec::new();
    for habit in habits {
        if rendered.contains(&habit.id) {
            to_update.push(habit.id);
        } else {
            to_create.push(habit.id);
        }
    }
    MenuDiff {
        to_create,
        to_update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn habit_with_days(target: i64, count: usize) -> Habit {
        Habit {
            id: 1,
            name: "Read".into(),
            target,
            icon: "book".into(),
            days: (0..count)
                .map(|i| Day {
                    comment: format!("day {}", i + 1),
                })
                .collect(),
        }
    }

    #[test]
    fn progress_is_zero_with_no_days() {
        assert_eq!(progress_percent(0, 10), 0.0);
    }

    #[test]
    fn progress_is_half_at_half_target() {
        assert_eq!(progress_percent(5, 10), 50.0);
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        assert_eq!(progress_percent(15, 10), 100.0);
    }

    #[test]
    fn non_positive_target_yields_zero() {
        assert_eq!(progress_percent(5, 0), 0.0);
        assert_eq!(progress_percent(5, -3), 0.0);
    }

    #[test]
    fn habit_view_formats_percent_and_day_rows() {
        let view = habit_view(&habit_with_days(10, 5));
        assert_eq!(view.percent_text, "50 %");
        assert_eq!(view.bar_width, 50.0);
        assert_eq!(view.days.len(), 5);
        assert_eq!(view.days[0].number, 1);
        assert_eq!(view.days[4].index, 4);
        assert_eq!(view.next_day_label, "Day 6");
    }

    #[test]
    fn habit_view_rounds_the_displayed_percent() {
        // 1 of 3 days is 33.33...%, shown as "33 %", bar kept unrounded.
        let view = habit_view(&habit_with_days(3, 1));
        assert_eq!(view.percent_text, "33 %");
        assert!((view.bar_width - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn menu_view_marks_only_the_active_habit() {
        let habits = vec![habit_with_days(10, 0), {
            let mut other = habit_with_days(10, 0);
            other.id = 2;
            other.icon = "Sport".into();
            other
        }];
        let menu = menu_view(&habits, 2);
        assert!(!menu[0].active);
        assert!(menu[1].active);
        assert_eq!(menu[1].icon, "sport");
    }

    #[test]
    fn page_view_selects_by_id_regardless_of_order() {
        let habits: Vec<Habit> = [3, 1, 2]
            .into_iter()
            .map(|id| {
                let mut habit = habit_with_days(10, 0);
                habit.id = id;
                habit.name = format!("habit {id}");
                habit
            })
            .collect();

        let page = page_view(&habits, 2).unwrap();
        assert_eq!(page.habit.id, 2);
        assert_eq!(page.habit.title, "habit 2");
        let active: Vec<_> = page.menu.iter().filter(|entry| entry.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 2);
    }

    #[test]
    fn page_view_is_none_for_an_unknown_id() {
        assert!(page_view(&[habit_with_days(10, 0)], 9).is_none());
    }

    #[test]
    fn menu_diff_splits_created_from_updated() {
        let mut habits = vec![habit_with_days(10, 0)];
        let mut second = habit_with_days(10, 0);
        second.id = 2;
        habits.push(second);

        let diff = menu_diff(&[1], &habits);
        assert_eq!(diff.to_update, [1]);
        assert_eq!(diff.to_create, [2]);
    }

    #[test]
    fn menu_diff_never_drops_rendered_habits() {
        let habits = vec![habit_with_days(10, 0)];
        let diff = menu_diff(&[1], &habits);
        assert_eq!(diff.to_update, [1]);
        assert!(diff.to_create.is_empty());
    }
}

use indexmap::IndexMap;

use crate::model::task::TaskEntry;

/// Two-level grouping: main project → sub-project → entries.
pub type GroupedTasks<'a> = IndexMap<&'a str, IndexMap<&'a str, Vec<&'a TaskEntry>>>;

/// Group entries for rendering. Main projects appear in first-seen order,
/// sub-projects in first-seen order within their main project, and entries
/// keep their input order within each bucket. Display numbering (1., 1.1,
/// 1.2, …) is derived by the renderers from enumeration, never stored.
pub fn group(entries: &[TaskEntry]) -> GroupedTasks<'_> {
    let mut grouped: GroupedTasks<'_> = IndexMap::new();
    for entry in entries {
        grouped
            .entry(entry.main_project.as_str())
            .or_default()
            .entry(entry.sub_project.as_str())
            .or_default()
            .push(entry);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Status;

    fn entry(main: &str, sub: &str, task: &str) -> TaskEntry {
        TaskEntry {
            main_project: main.to_string(),
            sub_project: sub.to_string(),
            task: task.to_string(),
            status: Status::Completed,
            task_type: "Normal".to_string(),
            label: None,
            comment: None,
        }
    }

    #[test]
    fn test_first_seen_order_of_mains_and_subs() {
        let entries = vec![
            entry("Beta", "Core", "a"),
            entry("Alpha", "UI", "b"),
            entry("Beta", "API", "c"),
            entry("Alpha", "UI", "d"),
        ];
        let grouped = group(&entries);
        let mains: Vec<&&str> = grouped.keys().collect();
        assert_eq!(mains, [&"Beta", &"Alpha"]);
        let beta_subs: Vec<&&str> = grouped["Beta"].keys().collect();
        assert_eq!(beta_subs, [&"Core", &"API"]);
    }

    #[test]
    fn test_bucket_preserves_input_order() {
        let entries = vec![
            entry("P", "S", "first"),
            entry("P", "T", "other"),
            entry("P", "S", "second"),
            entry("P", "S", "third"),
        ];
        let grouped = group(&entries);
        let tasks: Vec<&str> = grouped["P"]["S"].iter().map(|e| e.task.as_str()).collect();
        assert_eq!(tasks, ["first", "second", "third"]);
    }

    #[test]
    fn test_every_entry_lands_in_exactly_one_bucket() {
        let entries = vec![
            entry("A", "X", "1"),
            entry("B", "Y", "2"),
            entry("A", "Z", "3"),
            entry("B", "Y", "4"),
            entry("C", "W", "5"),
        ];
        let grouped = group(&entries);
        let total: usize = grouped
            .values()
            .flat_map(|subs| subs.values())
            .map(Vec::len)
            .sum();
        assert_eq!(total, entries.len());
    }

    #[test]
    fn test_empty_input_yields_empty_grouping() {
        let grouped = group(&[]);
        assert!(grouped.is_empty());
    }
}

//! Singly linked task sequence
//!
//! Tasks live in a chain of boxed nodes. Appends go to the tail, removal
//! splices out the first node holding the target task (by identity), and
//! sorting swaps task payloads between nodes so the links themselves never
//! move.

use std::fmt;

use crate::task::Task;

type Link = Option<Box<Node>>;

struct Node {
    task: Task,
    next: Link,
}

/// Ordered collection of the currently active tasks
#[derive(Default)]
pub struct TaskSequence {
    head: Link,
    len: usize,
}

impl TaskSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Add a task as the new tail
    pub fn append(&mut self, task: Task) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { task, next: None }));
        self.len += 1;
    }

    /// Remove the first node holding `task`
    ///
    /// Removing a task that is not in the sequence is a no-op and returns
    /// `None`. Everything else keeps its relative order.
    pub fn remove(&mut self, task: &Task) -> Option<Task> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !node.task.same_as(task)) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let node = cursor.take()?;
        let Node { task: removed, next } = *node;
        *cursor = next;
        self.len -= 1;
        Some(removed)
    }

    /// Selection sort by ascending priority, in place
    ///
    /// For each position the lowest priority at or after it is swapped in.
    /// Only a strictly lower priority displaces the current pick, so among
    /// equal priorities the earliest one wins.
    pub fn sort(&mut self) {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            let Node { task, next } = node;

            let mut lowest = task.priority();
            let mut min_task: Option<&mut Task> = None;
            let mut scan = next.as_deref_mut();
            while let Some(candidate) = scan {
                let Node { task: other, next: after } = candidate;
                if other.priority() < lowest {
                    lowest = other.priority();
                    min_task = Some(other);
                }
                scan = after.as_deref_mut();
            }

            if let Some(other) = min_task {
                std::mem::swap(task, other);
            }
            cursor = next.as_deref_mut();
        }
    }

    /// Front-to-back copy of the tasks, detached from the chain
    pub fn to_sequence(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    pub fn contains(&self, task: &Task) -> bool {
        self.iter().any(|t| t.same_as(task))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for TaskSequence {
    fn drop(&mut self) {
        // Unlink one node at a time; the default recursive drop can blow the
        // stack on long chains
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for TaskSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Task> for TaskSequence {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl Extend<Task> for TaskSequence {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        // Walk to the tail once, then keep appending from there
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for task in iter {
            let node = cursor.insert(Box::new(Node { task, next: None }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

/// Borrowing front-to-back iterator
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.task
        })
    }
}

impl<'a> IntoIterator for &'a TaskSequence {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn task(title: &str, priority: i64) -> Task {
        Task::new(title, "d", "2024-01-01", priority)
    }

    fn titles(sequence: &TaskSequence) -> Vec<String> {
        sequence.iter().map(|t| t.title().to_string()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut seq = TaskSequence::new();
        assert!(seq.is_empty());

        seq.append(task("A", 3));
        seq.append(task("B", 1));
        seq.append(task("C", 2));

        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(titles(&seq), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let (a, b, c, d) = (task("A", 1), task("B", 2), task("C", 3), task("D", 4));
        let mut seq: TaskSequence = [a.clone(), b.clone(), c.clone(), d.clone()].into_iter().collect();

        assert_eq!(seq.remove(&a), Some(a));
        assert_eq!(titles(&seq), vec!["B", "C", "D"]);

        assert_eq!(seq.remove(&c), Some(c));
        assert_eq!(titles(&seq), vec!["B", "D"]);

        assert_eq!(seq.remove(&d), Some(d));
        assert_eq!(titles(&seq), vec!["B"]);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut seq = TaskSequence::new();
        assert_eq!(seq.remove(&task("ghost", 1)), None);
        assert!(seq.is_empty());

        seq.append(task("A", 1));
        assert_eq!(seq.remove(&task("A", 1)), None);
        assert_eq!(titles(&seq), vec!["A"]);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_remove_targets_identity_not_fields() {
        let first = task("Same", 1);
        let second = task("Same", 1);
        let mut seq: TaskSequence = [first.clone(), second.clone()].into_iter().collect();

        seq.remove(&second);

        assert_eq!(seq.to_sequence(), vec![first]);
        assert!(!seq.contains(&second));
    }

    #[test]
    fn test_sort_by_priority() {
        let mut seq: TaskSequence = [task("Task 1", 3), task("Task 2", 1), task("Task 3", 2)]
            .into_iter()
            .collect();

        seq.sort();

        let priorities: Vec<i64> = seq.iter().map(Task::priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
        assert_eq!(titles(&seq), vec!["Task 2", "Task 3", "Task 1"]);
    }

    #[test]
    fn test_sort_picks_earliest_of_equal_minimums() {
        let mut seq: TaskSequence = [task("A", 3), task("B", 1), task("C", 1)].into_iter().collect();

        seq.sort();

        assert_eq!(titles(&seq), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut seq = TaskSequence::new();
        seq.sort();
        assert!(seq.is_empty());

        seq.append(task("only", 5));
        seq.sort();
        assert_eq!(titles(&seq), vec!["only"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut seq: TaskSequence = [task("A", 1), task("B", 2)].into_iter().collect();

        let mut snapshot = seq.to_sequence();
        snapshot.clear();
        assert_eq!(seq.len(), 2);

        let snapshot = seq.to_sequence();
        seq.append(task("C", 3));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_long_chain_drops() {
        let seq: TaskSequence = (0..100_000).map(|i| task("t", i)).collect();
        assert_eq!(seq.len(), 100_000);
        drop(seq);
    }

    #[test]
    fn test_debug_lists_tasks() {
        let seq: TaskSequence = [task("A", 1)].into_iter().collect();
        let rendered = format!("{:?}", seq);
        assert!(rendered.starts_with('['));
        assert!(rendered.contains("\"A\""));
    }

    proptest! {
        #[test]
        fn prop_sort_orders_adjacent_pairs(priorities in prop::collection::vec(-50i64..50, 0..40)) {
            let mut seq: TaskSequence = priorities.iter().map(|p| task("t", *p)).collect();

            seq.sort();

            let sorted = seq.to_sequence();
            prop_assert_eq!(sorted.len(), priorities.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].priority() <= pair[1].priority());
            }
        }

        #[test]
        fn prop_sort_keeps_every_task(priorities in prop::collection::vec(0i64..5, 0..30)) {
            let tasks: Vec<Task> = priorities.iter().map(|p| task("t", *p)).collect();
            let mut seq: TaskSequence = tasks.iter().cloned().collect();

            seq.sort();

            prop_assert_eq!(seq.len(), tasks.len());
            for t in &tasks {
                prop_assert!(seq.contains(t));
            }
        }

        #[test]
        fn prop_removal_keeps_survivor_order(
            count in 0usize..30,
            removals in prop::collection::vec(any::<prop::sample::Index>(), 0..30),
        ) {
            let tasks: Vec<Task> = (0..count).map(|i| task(&format!("t{i}"), i as i64)).collect();
            let mut seq: TaskSequence = tasks.iter().cloned().collect();
            let mut model = tasks.clone();

            if !tasks.is_empty() {
                for index in removals {
                    let target = &tasks[index.index(tasks.len())];
                    seq.remove(target);
                    model.retain(|t| !t.same_as(target));
                }
            }

            prop_assert_eq!(seq.len(), model.len());
            prop_assert_eq!(seq.to_sequence(), model);
        }
    }
}

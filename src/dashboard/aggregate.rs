//! Join & Aggregation Engine
//!
//! Groups child records under their parents by foreign-key equality.
//! One parameterized implementation serves every relation on the
//! dashboard (todos per user, comments per post, posts per user) instead
//! of each view re-deriving its own grouping.
//!
//! The join is a single O(n) grouping pass over the children followed by
//! one pass over the parents, so output order always follows parent
//! order regardless of how the network interleaved the responses.

use std::collections::HashMap;

/// Per-parent aggregation result for one relation.
///
/// Invariant: `count == children.len()`. `count` is kept as its own
/// field because the chart series only needs the cardinality and the
/// grouped lists can be large.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<C> {
    /// `id` of the parent record
    pub parent_id: u64,
    /// Display label of the parent
    pub label: String,
    /// Number of matched children
    pub count: usize,
    /// The matched children, in child-collection order
    pub children: Vec<C>,
    /// Count for an optional second relation on the same parent
    pub secondary_count: Option<usize>,
}

/// Group `children` under `parents` by foreign-key equality.
///
/// Emits one [`Aggregate`] per parent, in parent order. Parents with no
/// matching children are emitted with count 0 and an empty list.
/// Children whose foreign key matches no parent (dangling references)
/// are dropped from the output; callers that need them still see them
/// in the raw collection totals.
pub fn aggregate_by<P, C: Clone>(
    parents: &[P],
    children: &[C],
    parent_id: impl Fn(&P) -> u64,
    label: impl Fn(&P) -> String,
    foreign_key: impl Fn(&C) -> u64,
) -> Vec<Aggregate<C>> {
    let mut groups = group_by_key(children, &foreign_key);

    parents
        .iter()
        .map(|parent| {
            let id = parent_id(parent);
            let children = groups.remove(&id).unwrap_or_default();
            Aggregate {
                parent_id: id,
                label: label(parent),
                count: children.len(),
                children,
                secondary_count: None,
            }
        })
        .collect()
}

/// Same as [`aggregate_by`], with a second child collection counted per
/// parent by its own foreign key.
///
/// The secondary children are counted but not carried: the dashboard
/// shows e.g. todos per user with a post count alongside, without
/// hauling every post into the user's aggregate.
pub fn aggregate_with_secondary<P, C: Clone, S>(
    parents: &[P],
    children: &[C],
    parent_id: impl Fn(&P) -> u64,
    label: impl Fn(&P) -> String,
    foreign_key: impl Fn(&C) -> u64,
    secondary: &[S],
    secondary_key: impl Fn(&S) -> u64,
) -> Vec<Aggregate<C>> {
    let mut secondary_counts: HashMap<u64, usize> = HashMap::new();
    for child in secondary {
        *secondary_counts.entry(secondary_key(child)).or_insert(0) += 1;
    }

    let mut aggregates = aggregate_by(parents, children, parent_id, label, foreign_key);
    for aggregate in &mut aggregates {
        aggregate.secondary_count =
            Some(secondary_counts.get(&aggregate.parent_id).copied().unwrap_or(0));
    }
    aggregates
}

/// Number of children whose foreign key matches no id in `parent_ids`.
pub fn count_dangling<C>(
    parents: impl IntoIterator<Item = u64>,
    children: &[C],
    foreign_key: impl Fn(&C) -> u64,
) -> usize {
    let known: std::collections::HashSet<u64> = parents.into_iter().collect();
    children
        .iter()
        .filter(|child| !known.contains(&foreign_key(child)))
        .count()
}

fn group_by_key<C: Clone>(
    children: &[C],
    foreign_key: &impl Fn(&C) -> u64,
) -> HashMap<u64, Vec<C>> {
    let mut groups: HashMap<u64, Vec<C>> = HashMap::new();
    for child in children {
        groups.entry(foreign_key(child)).or_default().push(child.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Todo, User};

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: Some(name.to_string()),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn todo(id: u64, user_id: u64) -> Todo {
        Todo {
            id,
            user_id,
            title: format!("todo {}", id),
            completed: false,
        }
    }

    fn todos_per_user(users: &[User], todos: &[Todo]) -> Vec<Aggregate<Todo>> {
        aggregate_by(
            users,
            todos,
            |u| u.id,
            |u| u.name.clone().unwrap_or_default(),
            |t| t.user_id,
        )
    }

    #[test]
    fn test_two_users_three_todos() {
        let users = vec![user(1, "Ann"), user(2, "Bob")];
        let todos = vec![todo(10, 1), todo(11, 1), todo(12, 2)];

        let aggregates = todos_per_user(&users, &todos);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].parent_id, 1);
        assert_eq!(aggregates[0].label, "Ann");
        assert_eq!(aggregates[0].count, 2);
        assert_eq!(aggregates[1].parent_id, 2);
        assert_eq!(aggregates[1].count, 1);
    }

    #[test]
    fn test_count_matches_child_list() {
        let users = vec![user(1, "Ann"), user(2, "Bob"), user(3, "Cyd")];
        let todos = vec![todo(10, 1), todo(11, 3), todo(12, 1), todo(13, 1)];

        for aggregate in todos_per_user(&users, &todos) {
            assert_eq!(aggregate.count, aggregate.children.len());
        }
    }

    #[test]
    fn test_dangling_child_excluded() {
        let users = vec![user(1, "Ann"), user(2, "Bob")];
        let todos = vec![todo(10, 1), todo(11, 1), todo(12, 2), todo(13, 99)];

        let aggregates = todos_per_user(&users, &todos);

        assert_eq!(aggregates[0].count, 2);
        assert_eq!(aggregates[1].count, 1);

        let matched: usize = aggregates.iter().map(|a| a.count).sum();
        let dangling = count_dangling(users.iter().map(|u| u.id), &todos, |t| t.user_id);
        assert_eq!(dangling, 1);
        assert_eq!(matched + dangling, todos.len());
    }

    #[test]
    fn test_parent_with_no_children_kept() {
        let users = vec![user(1, "Ann"), user(2, "Bob")];
        let todos = vec![todo(10, 1)];

        let aggregates = todos_per_user(&users, &todos);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[1].count, 0);
        assert!(aggregates[1].children.is_empty());
    }

    #[test]
    fn test_empty_parents_yield_empty_output() {
        let todos = vec![todo(10, 1), todo(11, 2)];
        let aggregates = todos_per_user(&[], &todos);
        assert!(aggregates.is_empty());
    }

    #[test]
    fn test_output_follows_parent_order() {
        // Children arrive in an order unrelated to the parents.
        let users = vec![user(3, "Cyd"), user(1, "Ann"), user(2, "Bob")];
        let todos = vec![todo(10, 2), todo(11, 1), todo(12, 3)];

        let ids: Vec<u64> = todos_per_user(&users, &todos)
            .iter()
            .map(|a| a.parent_id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_children_keep_collection_order() {
        let users = vec![user(1, "Ann")];
        let todos = vec![todo(12, 1), todo(10, 1), todo(11, 1)];

        let aggregates = todos_per_user(&users, &todos);
        let ids: Vec<u64> = aggregates[0].children.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![12, 10, 11]);
    }

    #[test]
    fn test_secondary_relation_counts() {
        use crate::model::Post;

        let users = vec![user(1, "Ann"), user(2, "Bob")];
        let todos = vec![todo(10, 1), todo(11, 2)];
        let posts = vec![
            Post {
                id: 20,
                user_id: 2,
                title: String::new(),
                body: String::new(),
            },
            Post {
                id: 21,
                user_id: 2,
                title: String::new(),
                body: String::new(),
            },
        ];

        let aggregates = aggregate_with_secondary(
            &users,
            &todos,
            |u| u.id,
            |u| u.name.clone().unwrap_or_default(),
            |t| t.user_id,
            &posts,
            |p| p.user_id,
        );

        assert_eq!(aggregates[0].secondary_count, Some(0));
        assert_eq!(aggregates[1].secondary_count, Some(2));
        assert_eq!(aggregates[1].count, 1);
    }
}

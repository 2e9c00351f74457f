//! View-Model Assembler
//!
//! Pure shaping of one cycle's raw collections into the immutable
//! snapshot the presentation layer renders: collection totals, the
//! per-relation aggregates, and label/value series for the two charts.
//! No I/O happens here.

use super::aggregate::{aggregate_by, aggregate_with_secondary, Aggregate};
use super::fetch::Collections;
use crate::model::{Comment, Todo};

/// Display label used when a parent record has no name.
pub const UNNAMED_LABEL: &str = "Unknown";

/// Raw cardinality of each collection.
///
/// Counted over the collections as fetched, so dangling children are
/// included here even though no aggregate carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub todos: usize,
}

/// A label/value pairing for one bar-style visualization.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// The complete derived snapshot for one fetch cycle.
///
/// Immutable once assembled; a new cycle produces a wholly new value,
/// never a patch of this one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub totals: Totals,
    /// Todos grouped per user, with each user's post count alongside
    pub todos_per_user: Vec<Aggregate<Todo>>,
    /// Comments grouped per post
    pub comments_per_post: Vec<Aggregate<Comment>>,
}

impl ViewModel {
    /// Series for the collection-totals chart.
    pub fn totals_series(&self) -> Series {
        Series {
            labels: vec![
                "Users".to_string(),
                "Posts".to_string(),
                "Comments".to_string(),
                "Todos".to_string(),
            ],
            values: vec![
                self.totals.users as u64,
                self.totals.posts as u64,
                self.totals.comments as u64,
                self.totals.todos as u64,
            ],
        }
    }

    /// Series for the todos-per-user chart, in user order.
    pub fn todos_per_user_series(&self) -> Series {
        Series {
            labels: self
                .todos_per_user
                .iter()
                .map(|a| a.label.clone())
                .collect(),
            values: self
                .todos_per_user
                .iter()
                .map(|a| a.count as u64)
                .collect(),
        }
    }
}

/// Assemble the view-model for one cycle's collections.
///
/// Deterministic and total: the same collections always produce the
/// same view-model, and no record shape that decoded successfully can
/// make assembly fail. Users without a name get [`UNNAMED_LABEL`].
pub fn assemble(collections: &Collections) -> ViewModel {
    let totals = Totals {
        users: collections.users.len(),
        posts: collections.posts.len(),
        comments: collections.comments.len(),
        todos: collections.todos.len(),
    };

    let todos_per_user = aggregate_with_secondary(
        &collections.users,
        &collections.todos,
        |u| u.id,
        |u| u.name.clone().unwrap_or_else(|| UNNAMED_LABEL.to_string()),
        |t| t.user_id,
        &collections.posts,
        |p| p.user_id,
    );

    let comments_per_post = aggregate_by(
        &collections.posts,
        &collections.comments,
        |p| p.id,
        |p| p.title.clone(),
        |c| c.post_id,
    );

    ViewModel {
        totals,
        todos_per_user,
        comments_per_post,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Post, User};

    fn collections() -> Collections {
        let users = vec![
            User {
                id: 1,
                name: Some("Ann".to_string()),
                username: "ann".to_string(),
                email: String::new(),
            },
            User {
                id: 2,
                name: Some("Bob".to_string()),
                username: "bob".to_string(),
                email: String::new(),
            },
        ];
        let posts = vec![Post {
            id: 30,
            user_id: 1,
            title: "hello".to_string(),
            body: String::new(),
        }];
        let comments = vec![
            Comment {
                id: 40,
                post_id: 30,
                name: String::new(),
                email: String::new(),
                body: "first".to_string(),
            },
            Comment {
                id: 41,
                post_id: 77,
                name: String::new(),
                email: String::new(),
                body: "dangling".to_string(),
            },
        ];
        let todos = vec![
            Todo {
                id: 50,
                user_id: 1,
                title: String::new(),
                completed: false,
            },
            Todo {
                id: 51,
                user_id: 1,
                title: String::new(),
                completed: true,
            },
            Todo {
                id: 52,
                user_id: 2,
                title: String::new(),
                completed: false,
            },
        ];
        Collections {
            users,
            posts,
            comments,
            todos,
        }
    }

    #[test]
    fn test_assemble_totals_and_aggregates() {
        let vm = assemble(&collections());

        assert_eq!(
            vm.totals,
            Totals {
                users: 2,
                posts: 1,
                comments: 2,
                todos: 3
            }
        );
        assert_eq!(vm.todos_per_user[0].count, 2);
        assert_eq!(vm.todos_per_user[1].count, 1);
        // Post counts ride along as the secondary relation.
        assert_eq!(vm.todos_per_user[0].secondary_count, Some(1));
        assert_eq!(vm.todos_per_user[1].secondary_count, Some(0));
    }

    #[test]
    fn test_dangling_comment_in_totals_but_not_aggregates() {
        let vm = assemble(&collections());

        assert_eq!(vm.totals.comments, 2);
        let grouped: usize = vm.comments_per_post.iter().map(|a| a.count).sum();
        assert_eq!(grouped, 1);
    }

    #[test]
    fn test_dangling_todo_leaves_aggregates_unchanged() {
        let mut input = collections();
        input.todos.push(Todo {
            id: 53,
            user_id: 99,
            title: String::new(),
            completed: false,
        });

        let vm = assemble(&input);

        assert_eq!(vm.totals.todos, 4);
        assert_eq!(vm.todos_per_user[0].count, 2);
        assert_eq!(vm.todos_per_user[1].count, 1);
    }

    #[test]
    fn test_empty_parents_still_produce_totals() {
        let mut input = collections();
        input.users.clear();

        let vm = assemble(&input);

        assert!(vm.todos_per_user.is_empty());
        assert_eq!(vm.totals.users, 0);
        assert_eq!(vm.totals.todos, 3);
    }

    #[test]
    fn test_unnamed_user_gets_fallback_label() {
        let mut input = collections();
        input.users[0].name = None;

        let vm = assemble(&input);
        assert_eq!(vm.todos_per_user[0].label, UNNAMED_LABEL);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let input = collections();
        assert_eq!(assemble(&input), assemble(&input));
    }

    #[test]
    fn test_chart_series() {
        let vm = assemble(&collections());

        let totals = vm.totals_series();
        assert_eq!(totals.labels[0], "Users");
        assert_eq!(totals.values, vec![2, 1, 2, 3]);

        let per_user = vm.todos_per_user_series();
        assert_eq!(per_user.labels, vec!["Ann", "Bob"]);
        assert_eq!(per_user.values, vec![2, 1]);
    }
}

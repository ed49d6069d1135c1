//! Edits and deletes existing comments (`comment/{id}`).

route!(
    /// Comments that already exist. New comments are posted through the
    /// task, list and view routes.
    Comments,
    "comment",
    by_id(&str): [update, delete]
);

//! Webhook updates and deletion (`webhook/{id}`).

route!(
    /// Existing webhooks. Webhooks are created and listed per team.
    Webhooks,
    "webhook",
    by_id(&str): [update, delete]
);

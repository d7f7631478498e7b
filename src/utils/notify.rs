/// Desktop notifications are cosmetic, a failure to show one must never
/// fail the command that triggered it.
pub fn notify_best_effort(summary: &str, body: &str) {
    if let Err(e) = notify_rust::Notification::new()
        .summary(summary)
        .body(body)
        .show()
    {
        eprintln!("Warning: failed to show desktop notification: {e}");
    }
}

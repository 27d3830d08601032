/// Returns true when the error is the unique-constraint violation on `urls.slug`.
///
/// This is the signal the registry uses to distinguish a slug collision from
/// every other database failure.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("urls_slug_key"))
}

use const_format::concatcp;

pub const USERS: &str = "users";

/// Pure schema definition for a Postgres table.
/// No I/O operations - just metadata about table structure.
/// All methods return &'static str to avoid runtime allocations.
/// Use const_format::concatcp! to build SQL strings at compile time.
pub trait Schema {
    /// Returns the name of the table in the database.
    fn name() -> &'static str;
    /// Returns the SQL to prepare the table schema, idempotently.
    fn creates() -> &'static str;
    /// Returns the single-statement conflict-target upsert for the table.
    fn upserts() -> &'static str;
}

/// The users table. `id` is a surrogate key the database assigns; `name`
/// carries the unique constraint that makes the upsert safe to repeat.
pub struct UserTable;

#[rustfmt::skip]
impl Schema for UserTable {
    fn name() -> &'static str {
        USERS
    }
    fn creates() -> &'static str {
        concatcp!(
            "CREATE TABLE IF NOT EXISTS ", USERS, " (",
                "id    SERIAL PRIMARY KEY, ",
                "name  TEXT NOT NULL, ",
                "email TEXT NOT NULL, ",
                "CONSTRAINT uq_name UNIQUE (name)",
            ");"
        )
    }
    fn upserts() -> &'static str {
        concatcp!(
            "INSERT INTO ", USERS, " (name, email) ",
            "VALUES              ($1,   $2) ",
            "ON CONFLICT (name) ",
            "DO UPDATE SET ",
                "email = EXCLUDED.email"
        )
    }
}

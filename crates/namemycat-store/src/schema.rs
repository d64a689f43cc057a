//! SQL statements for the `names` table.

/// Idempotent table creation.
pub const CREATE_NAMES: &str = "
CREATE TABLE IF NOT EXISTS names(
  id SERIAL PRIMARY KEY,
  name text
);";

/// Pick one row uniformly at random.
pub const SELECT_RANDOM_NAME: &str = "SELECT name FROM names ORDER BY random() LIMIT 1";

/// Insert a name and return the stored row.
pub const INSERT_NAME: &str = "INSERT INTO names (name) VALUES ($1) RETURNING id, name";

/// Exact-match lookup.
pub const SELECT_BY_VALUE: &str = "SELECT id, name FROM names WHERE name = $1 ORDER BY id";

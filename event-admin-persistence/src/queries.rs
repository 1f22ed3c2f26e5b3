//! Statement text shared by the MariaDB and SQLite repositories. Both drivers
//! take `?` placeholders.

pub const INSERT_EVENT: &str = "INSERT INTO events \
    (name, description, image, promoted, date, price, location, organizer, category_id) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

pub const CATEGORY_EXISTS: &str = "SELECT id FROM category WHERE id = ?";

// MariaDB may declare the column unsigned; the cast keeps it decodable as i64.
pub const LIST_CATEGORIES: &str = "SELECT CAST(id AS SIGNED) AS id, name FROM category";

use super::{temp_db_path, test_db};
use crate::{Database, schema};

#[test]
fn test_open_creates_tables() {
    let db = test_db();
    let (settings, messages) = db
        .with_conn(|conn| {
            Ok((
                schema::table_exists(conn, "settings")?,
                schema::table_exists(conn, "contact_messages")?,
            ))
        })
        .unwrap();
    assert!(settings);
    assert!(messages);
}

#[test]
fn test_open_file_twice_is_idempotent() {
    let path = temp_db_path();
    let first = Database::open(&path).unwrap();
    first.upsert_setting("config", "{}", "2024-01-01T00:00:00+00:00").unwrap();
    first.add_contact_message("Al", "a@b.co", "hi!!", "2024-01-01T00:00:00+00:00").unwrap();

    let second = Database::open(&path).unwrap();
    assert_eq!(second.get_setting("config").unwrap(), Some("{}".into()));
    assert_eq!(second.count_contact_messages().unwrap(), 1);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_failed_transaction_rolls_back() {
    let db = test_db();
    let result: Result<(), crate::DbError> = db.with_tx(|conn| {
        conn.execute(
            "INSERT INTO contact_messages (name, email, message, created_at) VALUES ('Al', 'a@b.co', 'hi!!', 'now')",
            [],
        )?;
        conn.execute("INSERT INTO missing_table VALUES (1)", [])?;
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(db.count_contact_messages().unwrap(), 0);
}

#[test]
fn test_now_iso_is_utc_rfc3339() {
    let ts = crate::now_iso();
    let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}

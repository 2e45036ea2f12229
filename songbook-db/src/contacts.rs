//! The standalone `contacts` table exercise: drop, create, insert, update,
//! delete, then read back.
//!
//! Statements run in auto-commit mode, one transaction each. A failure part
//! way through leaves the earlier statements applied.

use rusqlite::{params, Connection};
use songbook_catalog::Contact;

use crate::datasource::DatasourceError;

/// Default database file for the contacts exercise.
pub const CONTACTS_DB_NAME: &str = "testjava.db";

pub const COLUMN_NAME: &str = "name";
pub const COLUMN_PHONE: &str = "phone";
pub const COLUMN_EMAIL: &str = "email";

/// Drop and recreate an empty `contacts` table. Destroys prior rows.
pub fn reset_contacts_table(conn: &Connection) -> Result<(), DatasourceError> {
    conn.execute("DROP TABLE IF EXISTS contacts", [])?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contacts (name text, phone integer, email text)",
        [],
    )?;
    Ok(())
}

/// Insert one contact row.
pub fn insert_contact(conn: &Connection, contact: &Contact) -> Result<(), DatasourceError> {
    conn.execute(
        "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
        params![contact.name, contact.phone, contact.email],
    )?;
    Ok(())
}

/// Set the phone number of every contact called `name`. Returns rows changed.
pub fn update_contact_phone(
    conn: &Connection,
    name: &str,
    phone: i64,
) -> Result<usize, DatasourceError> {
    let changed = conn.execute(
        "UPDATE contacts SET phone = ?2 WHERE name = ?1",
        params![name, phone],
    )?;
    Ok(changed)
}

/// Delete every contact called `name`. Returns rows removed.
pub fn delete_contact(conn: &Connection, name: &str) -> Result<usize, DatasourceError> {
    let removed = conn.execute("DELETE FROM contacts WHERE name = ?1", params![name])?;
    Ok(removed)
}

/// All contacts, in engine order.
pub fn list_contacts(conn: &Connection) -> Result<Vec<Contact>, DatasourceError> {
    let mut stmt = conn.prepare("SELECT * FROM contacts")?;
    let rows = stmt.query_map([], |row| {
        Ok(Contact {
            name: row.get(COLUMN_NAME)?,
            phone: row.get(COLUMN_PHONE)?,
            email: row.get(COLUMN_EMAIL)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Run the full sequence and return what is left in the table.
pub fn run_contacts_demo(conn: &Connection) -> Result<Vec<Contact>, DatasourceError> {
    demo_sequence(conn).inspect_err(|e| log::error!("Something went wrong: {}", e))
}

fn demo_sequence(conn: &Connection) -> Result<Vec<Contact>, DatasourceError> {
    reset_contacts_table(conn)?;

    for contact in [
        Contact::new("PB", 123456789, "pb@provides.com"),
        Contact::new("Joe", 56564654, "joe@regular.com"),
        Contact::new("Leon", 7897887, "leon@hitman.com"),
    ] {
        insert_contact(conn, &contact)?;
    }

    // Nobody called John was inserted; both statements match zero rows.
    update_contact_phone(conn, "John", 1234)?;
    delete_contact(conn, "John")?;

    list_contacts(conn)
}

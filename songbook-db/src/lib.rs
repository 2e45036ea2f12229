//! SQLite data access layer for the music catalog.
//!
//! Owns a single connection, builds query text from fixed table and column
//! names, binds caller values as parameters, and maps rows onto the plain
//! records from `songbook-catalog`.

pub mod contacts;
pub mod datasource;
pub mod schema;
pub mod sql;

pub use contacts::{
    delete_contact, insert_contact, list_contacts, reset_contacts_table, run_contacts_demo,
    update_contact_phone, CONTACTS_DB_NAME,
};
pub use datasource::{Datasource, DatasourceError, DB_NAME};
pub use schema::create_music_schema;

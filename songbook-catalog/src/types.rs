//! Data model types for the music catalog.
//!
//! Artists are owned by the database; the layer only reads them. Albums are
//! carried around by name alone, and `SongArtist` rows exist only for the
//! lifetime of a query result.

use std::fmt;

// ── Artist ──────────────────────────────────────────────────────────────────

/// A row of the `artists` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID = {}, Name = {}", self.id, self.name)
    }
}

// ── Song / Artist Projection ────────────────────────────────────────────────

/// One song+album+artist combination from a three-way join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongArtist {
    pub artist_name: String,
    pub album_name: String,
    pub track: i64,
}

impl fmt::Display for SongArtist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Artist name = {} Album name = {} Track = {}",
            self.artist_name, self.album_name, self.track
        )
    }
}

// ── Contact ─────────────────────────────────────────────────────────────────

/// A row of the standalone `contacts` demo table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: i64,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone,
            email: email.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.phone, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_artist_display() {
        let row = SongArtist {
            artist_name: "Iron Maiden".to_string(),
            album_name: "Powerslave".to_string(),
            track: 1,
        };
        assert_eq!(
            row.to_string(),
            "Artist name = Iron Maiden Album name = Powerslave Track = 1"
        );
    }

    #[test]
    fn contact_display_matches_row_layout() {
        let contact = Contact::new("Joe", 56564654, "joe@regular.com");
        assert_eq!(contact.to_string(), "Joe 56564654 joe@regular.com");
    }
}

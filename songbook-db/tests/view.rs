use songbook_catalog::SongArtist;
use songbook_db::{create_music_schema, Datasource};

fn setup_db() -> Datasource {
    let mut ds = Datasource::new();
    ds.open_in_memory().unwrap();
    let conn = ds.connection().unwrap();
    create_music_schema(conn).unwrap();
    conn.execute_batch(
        "INSERT INTO artists (_id, name) VALUES (1, 'Iron Maiden'), (2, 'Fleetwood Mac');
         INSERT INTO albums (_id, name, artist) VALUES (1, 'Powerslave', 1), (2, 'Rumours', 2), (3, 'Live', 2);
         INSERT INTO songs (_id, track, title, album) VALUES
             (1, 1, 'Aces High', 1),
             (2, 5, 'Go Your Own Way', 2),
             (3, 12, 'Go Your Own Way', 3);",
    )
    .unwrap();
    ds
}

fn sorted(mut rows: Vec<SongArtist>) -> Vec<SongArtist> {
    rows.sort_by(|a, b| {
        (a.artist_name.to_lowercase(), a.album_name.to_lowercase(), a.track).cmp(&(
            b.artist_name.to_lowercase(),
            b.album_name.to_lowercase(),
            b.track,
        ))
    });
    rows
}

fn view_exists(ds: &Datasource) -> bool {
    ds.connection()
        .unwrap()
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='view' AND name='artist_list')",
            [],
            |row| row.get(0),
        )
        .unwrap()
}

#[test]
fn create_view() {
    let ds = setup_db();
    assert!(!view_exists(&ds));
    ds.create_view_for_song_artists().unwrap();
    assert!(view_exists(&ds));
}

#[test]
fn create_view_is_idempotent() {
    let ds = setup_db();
    ds.create_view_for_song_artists().unwrap();
    let first = sorted(ds.query_song_info_view("Go Your Own Way").unwrap());
    ds.create_view_for_song_artists().unwrap();
    let second = sorted(ds.query_song_info_view("Go Your Own Way").unwrap());
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn view_rows_match_join_query() {
    let ds = setup_db();
    ds.create_view_for_song_artists().unwrap();
    let from_view = sorted(ds.query_song_info_view("Aces High").unwrap());
    assert_eq!(
        from_view,
        [SongArtist {
            artist_name: "Iron Maiden".to_string(),
            album_name: "Powerslave".to_string(),
            track: 1,
        }]
    );
}

#[test]
fn view_unknown_title_is_empty() {
    let ds = setup_db();
    ds.create_view_for_song_artists().unwrap();
    assert!(ds.query_song_info_view("Nope").unwrap().is_empty());
}

#[test]
fn view_query_before_creation_fails() {
    let ds = setup_db();
    assert!(ds.query_song_info_view("Aces High").is_err());
}

#[test]
fn view_rows_ordered_case_insensitively() {
    let mut ds = Datasource::new();
    ds.open_in_memory().unwrap();
    let conn = ds.connection().unwrap();
    create_music_schema(conn).unwrap();
    conn.execute_batch(
        "INSERT INTO artists (_id, name) VALUES (1, 'Beatles'), (2, 'abba');
         INSERT INTO albums (_id, name, artist) VALUES (1, 'Help', 1), (2, 'waterloo', 2), (3, 'Arrival', 2);
         INSERT INTO songs (_id, track, title, album) VALUES
             (1, 2, 'S', 1),
             (2, 9, 'S', 2),
             (3, 5, 'S', 3),
             (4, 1, 'S', 3);",
    )
    .unwrap();
    ds.create_view_for_song_artists().unwrap();

    let rows: Vec<(String, String, i64)> = ds
        .query_song_info_view("S")
        .unwrap()
        .into_iter()
        .map(|r| (r.artist_name, r.album_name, r.track))
        .collect();
    assert_eq!(
        rows,
        [
            ("abba".to_string(), "Arrival".to_string(), 1),
            ("abba".to_string(), "Arrival".to_string(), 5),
            ("abba".to_string(), "waterloo".to_string(), 9),
            ("Beatles".to_string(), "Help".to_string(), 2),
        ]
    );
}

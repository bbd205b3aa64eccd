//! Sample catalog data.

use comicdeck_types::{Comic, ComicId};

fn comic(
    id: i64,
    title: &str,
    author: &str,
    genre: &str,
    tags: &[&str],
    rating: f64,
    description: &str,
) -> Comic {
    Comic {
        id: ComicId::Number(id),
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        genre: genre.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        cover_url: format!("/covers/{}.jpg", id),
    }
}

/// Six comics across four genres (Superhero appears twice, Horror twice)
pub fn sample_comics() -> Vec<Comic> {
    vec![
        comic(
            1,
            "The Night Archive",
            "Mara Quill",
            "Superhero",
            &["vigilante", "city", "mystery"],
            4.8,
            "A masked archivist hunts the thieves who stole a city's memory.",
        ),
        comic(
            2,
            "Hollow Lantern",
            "Idris Fenn",
            "Horror",
            &["ghosts", "small town"],
            4.1,
            "Every lantern in Marrow Bay burns for someone who never left.",
        ),
        comic(
            3,
            "Orbit of Ash",
            "Keiko Sato",
            "Sci-Fi",
            &["space", "rebellion", "mecha"],
            4.6,
            "Miners on a dying moon build the machine that will free them.",
        ),
        comic(
            4,
            "Paper Crowns",
            "Lucia Ortega",
            "Fantasy",
            &["royalty", "magic"],
            3.9,
            "A forger of royal decrees accidentally crowns herself queen.",
        ),
        comic(
            5,
            "Static Saints",
            "Mara Quill",
            "Superhero",
            &["team", "radio"],
            4.3,
            "Five heroes whose powers only work while the pirate station is on air.",
        ),
        comic(
            6,
            "The Drowned Choir",
            "Idris Fenn",
            "Horror",
            &["sea", "folk horror"],
            4.4,
            "A village sings to the tide, and one night the tide sings back.",
        ),
    ]
}

/// JSON body for a comic list, exactly as a backend would send it
pub fn comics_json(comics: &[Comic]) -> String {
    serde_json::to_string(comics).expect("comics serialize")
}

/// A record with no `rating` field at all
pub const UNRATED_COMIC_JSON: &str = r#"{
    "id": 77,
    "title": "Quiet Panels",
    "author": "Anon",
    "description": "Wordless stories.",
    "genre": "Slice of Life",
    "tags": ["silent"],
    "cover_url": "/covers/77.jpg"
}"#;

use std::fmt;

use crate::presentation::formatters::{one_line, truncate};
use crate::presentation::view_models::{
    ComicCardViewModel, ComicDetailViewModel, ComicListViewModel, ConfigViewModel,
    GenreListViewModel,
};

const ID_WIDTH: usize = 6;
const TITLE_WIDTH: usize = 26;
const AUTHOR_WIDTH: usize = 18;
const GENRE_WIDTH: usize = 14;

fn filters_line(query: Option<&str>, genre: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(q) = query {
        parts.push(format!("query=\"{}\"", q));
    }
    if let Some(genre) = genre {
        parts.push(format!("genre={}", genre));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(" ")
    }
}

// --------------------------------------------------------
// Comic List View
// --------------------------------------------------------

pub struct ComicListView<'a> {
    data: &'a ComicListViewModel,
}

impl<'a> ComicListView<'a> {
    pub fn new(data: &'a ComicListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ComicListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Catalog: {}", self.data.endpoint)?;
        writeln!(
            f,
            "Filters: {}",
            filters_line(self.data.query.as_deref(), Some(&self.data.genre))
        )?;
        writeln!(f)?;

        if self.data.comics.is_empty() {
            writeln!(f, "No comics found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<id$} {:<title$} {:<author$} {:<genre$} RATING",
            "ID",
            "TITLE",
            "AUTHOR",
            "GENRE",
            id = ID_WIDTH,
            title = TITLE_WIDTH,
            author = AUTHOR_WIDTH,
            genre = GENRE_WIDTH,
        )?;
        let rule = ID_WIDTH + TITLE_WIDTH + AUTHOR_WIDTH + GENRE_WIDTH + 10;
        writeln!(f, "{}", "-".repeat(rule))?;

        let indent = ID_WIDTH + 1;
        let description_width = self.data.description_width.saturating_sub(indent).max(20);

        for comic in &self.data.comics {
            writeln!(
                f,
                "{:<id$} {:<title$} {:<author$} {:<genre$} {}",
                truncate(&comic.id, ID_WIDTH),
                truncate(&comic.title, TITLE_WIDTH),
                truncate(&comic.author, AUTHOR_WIDTH),
                truncate(&comic.genre, GENRE_WIDTH),
                comic.rating_label,
                id = ID_WIDTH,
                title = TITLE_WIDTH,
                author = AUTHOR_WIDTH,
                genre = GENRE_WIDTH,
            )?;
            if !comic.description.is_empty() {
                writeln!(
                    f,
                    "{:indent$}{}",
                    "",
                    one_line(&comic.description, description_width),
                    indent = indent
                )?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Genre List View
// --------------------------------------------------------

pub struct GenreListView<'a> {
    data: &'a GenreListViewModel,
}

impl<'a> GenreListView<'a> {
    pub fn new(data: &'a GenreListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GenreListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Catalog: {}", self.data.endpoint)?;
        writeln!(f, "Filters: {}", filters_line(self.data.query.as_deref(), None))?;
        writeln!(f)?;
        writeln!(f, "Genres across {} comic(s):", self.data.comic_count)?;
        for genre in &self.data.genres {
            writeln!(f, "  {}", genre)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Comic Detail View
// --------------------------------------------------------

pub struct ComicDetailView<'a> {
    comic: &'a ComicCardViewModel,
}

impl<'a> ComicDetailView<'a> {
    pub fn new(data: &'a ComicDetailViewModel) -> Self {
        Self { comic: &data.comic }
    }
}

impl<'a> fmt::Display for ComicDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let comic = self.comic;
        let tags = if comic.tags.is_empty() {
            "(none)".to_string()
        } else {
            comic
                .tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ")
        };

        writeln!(f, "{}", comic.title)?;
        writeln!(f, "{}", "=".repeat(comic.title.chars().count().max(3)))?;
        writeln!(f, "  ID:      {}", comic.id)?;
        writeln!(f, "  Author:  {}", comic.author)?;
        writeln!(f, "  Genre:   {}", comic.genre)?;
        writeln!(f, "  Rating:  {}", comic.rating_label)?;
        writeln!(f, "  Tags:    {}", tags)?;
        if !comic.cover_url.is_empty() {
            writeln!(f, "  Cover:   {}", comic.cover_url)?;
        }
        if !comic.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", comic.description)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Config View
// --------------------------------------------------------

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config_state = if self.data.config_exists {
            ""
        } else {
            " (not found, using defaults)"
        };
        let timeout = self
            .data
            .timeout_secs
            .map(|secs| format!("{}s", secs))
            .unwrap_or_else(|| "none".to_string());

        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "Config file:    {}{}", self.data.config_path, config_state)?;
        writeln!(f, "Backend:        {}", self.data.base_url)?;
        writeln!(f, "Endpoint:       {}", self.data.endpoint)?;
        writeln!(f, "Timeout:        {}", timeout)?;
        writeln!(f, "Log file:       {}", self.data.log_file)?;
        Ok(())
    }
}

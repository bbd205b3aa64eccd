use comicdeck_types::{CatalogQuery, Comic, GenreFilter};

use crate::presentation::view_models::{
    ComicCardViewModel, ComicDetailViewModel, ComicListViewModel, CommandResultViewModel,
    ConfigViewModel, GenreListViewModel, Guidance, StatusBadge,
};

pub fn present_card(comic: &Comic) -> ComicCardViewModel {
    ComicCardViewModel {
        id: comic.id.to_string(),
        title: comic.title.clone(),
        author: comic.author.clone(),
        genre: comic.genre.clone(),
        rating: comic.rating,
        rating_label: comic.rating_label(),
        tags: comic.tags.clone(),
        description: comic.description.clone(),
        cover_url: comic.cover_url.clone(),
    }
}

fn query_label(query: &CatalogQuery) -> Option<String> {
    (!query.q.is_empty()).then(|| query.q.clone())
}

pub fn present_list(
    endpoint: &str,
    query: &CatalogQuery,
    comics: &[Comic],
    description_width: usize,
) -> CommandResultViewModel<ComicListViewModel> {
    let content = ComicListViewModel {
        endpoint: endpoint.to_string(),
        query: query_label(query),
        genre: query.genre.label().to_string(),
        total_count: comics.len(),
        comics: comics.iter().map(present_card).collect(),
        description_width,
    };

    let mut result = CommandResultViewModel::new(content);
    if comics.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("No comics matched"))
            .with_suggestion(
                Guidance::new("Drop the filters to see the whole catalog")
                    .with_command("comicdeck list"),
            );
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} comic{}",
            comics.len(),
            if comics.len() == 1 { "" } else { "s" }
        )));
    }
    result
}

pub fn present_genres(
    endpoint: &str,
    query: &CatalogQuery,
    comics: &[Comic],
    facets: &[GenreFilter],
) -> CommandResultViewModel<GenreListViewModel> {
    CommandResultViewModel::new(GenreListViewModel {
        endpoint: endpoint.to_string(),
        query: query_label(query),
        genres: facets.iter().map(|g| g.label().to_string()).collect(),
        comic_count: comics.len(),
    })
}

pub fn present_detail(comic: &Comic) -> CommandResultViewModel<ComicDetailViewModel> {
    CommandResultViewModel::new(ComicDetailViewModel {
        comic: present_card(comic),
    })
}

pub fn present_config(content: ConfigViewModel) -> CommandResultViewModel<ConfigViewModel> {
    let exists = content.config_exists;
    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result
            .with_badge(StatusBadge::info("Using built-in defaults (no config.toml)"))
            .with_suggestion(
                Guidance::new("Write a config file you can edit").with_command("comicdeck config init"),
            );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use comicdeck_types::ComicId;

    fn unrated() -> Comic {
        serde_json::from_str(r#"{"id": 77, "title": "Quiet Panels", "genre": "Slice of Life"}"#)
            .unwrap()
    }

    #[test]
    fn test_card_formats_default_rating() {
        let card = present_card(&unrated());
        assert_eq!(card.id, "77");
        assert_eq!(card.rating_label, "4.5");
    }

    #[test]
    fn test_list_badge_counts() {
        let comic = unrated();
        let result = present_list("http://x/api/comics", &CatalogQuery::default(), &[comic], 60);
        assert_eq!(result.badge.map(|b| b.label), Some("1 comic".to_string()));
        assert_eq!(result.content.genre, "All");
        assert_eq!(result.content.query, None);
    }

    #[test]
    fn test_empty_list_suggests_dropping_filters() {
        let query = CatalogQuery::new("zzz", GenreFilter::from("Horror"));
        let result = present_list("http://x/api/comics", &query, &[], 60);
        assert_eq!(result.content.total_count, 0);
        assert_eq!(result.content.query.as_deref(), Some("zzz"));
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_detail_keeps_all_tags() {
        let mut comic = unrated();
        comic.id = ComicId::from("qp");
        comic.tags = vec!["silent".into(), "anthology".into(), "award".into()];
        let result = present_detail(&comic);
        assert_eq!(result.content.comic.tags.len(), 3);
        assert_eq!(result.content.comic.id, "qp");
    }
}

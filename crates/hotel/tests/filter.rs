use akkor_hotel::{FilterQuery, SortBy, SortOrder};
use akkor_shared::{page::PageRequest, user::Role};
use temp_dir::TempDir;

mod helpers;

const HOTELS: [(&str, &str); 5] = [
    ("Le Grand Paris", "Paris, France"),
    ("Akkor Palace", "Nice, France"),
    ("Mountain Lodge", "Chamonix, France"),
    ("The London Royal", "London, United Kingdom"),
    ("Barcelona Beach Resort", "Barcelona, Spain"),
];

#[tokio::test]
async fn search_matches_name_or_location() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    helpers::create_hotels(&state, &admin, HOTELS).await?;
    let query = akkor_hotel::Query::new(state);

    let france = query
        .filter(FilterQuery {
            search: Some("FRANCE".to_owned()),
            sort: SortBy::Name,
            order: SortOrder::Asc,
            ..Default::default()
        })
        .await?;
    let names = france.data.iter().map(|h| h.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Akkor Palace", "Le Grand Paris", "Mountain Lodge"]);
    assert_eq!(france.meta.total, 3);

    let royal = query
        .filter(FilterQuery {
            search: Some("royal".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(royal.data.len(), 1);
    assert_eq!(royal.data[0].name, "The London Royal");

    let wildcard = query
        .filter(FilterQuery {
            search: Some("%".to_owned()),
            ..Default::default()
        })
        .await?;
    assert!(wildcard.data.is_empty());

    Ok(())
}

#[tokio::test]
async fn sorts_and_paginates() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let ids = helpers::create_hotels(&state, &admin, HOTELS).await?;
    let query = akkor_hotel::Query::new(state);

    let by_location = query
        .filter(FilterQuery {
            sort: SortBy::Location,
            order: SortOrder::Desc,
            page: PageRequest::new(Some("1"), Some("2")),
            ..Default::default()
        })
        .await?;
    let locations = by_location
        .data
        .iter()
        .map(|h| h.location.as_str())
        .collect::<Vec<_>>();
    assert_eq!(locations, vec!["Paris, France", "Nice, France"]);
    assert_eq!(by_location.meta.total, 5);
    assert_eq!(by_location.meta.last_page, 3);
    assert!(by_location.meta.has_next());

    let newest = query.filter(FilterQuery::default()).await?;
    let newest_ids = newest.data.iter().map(|h| h.id).collect::<Vec<_>>();
    assert_eq!(newest_ids, ids.iter().rev().copied().collect::<Vec<_>>());

    let beyond = query
        .filter(FilterQuery {
            page: PageRequest::new(Some("4"), Some("2")),
            ..Default::default()
        })
        .await?;
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.meta.current_page, 4);

    Ok(())
}

#[tokio::test]
async fn all_by_name_is_alphabetical() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    helpers::create_hotels(&state, &admin, HOTELS).await?;
    let query = akkor_hotel::Query::new(state);

    let names = query
        .all_by_name()
        .await?
        .into_iter()
        .map(|h| h.name)
        .collect::<Vec<_>>();

    assert_eq!(
        names,
        vec![
            "Akkor Palace",
            "Barcelona Beach Resort",
            "Le Grand Paris",
            "Mountain Lodge",
            "The London Royal"
        ]
    );

    Ok(())
}

#[tokio::test]
async fn search_ignores_case_of_accented_letters() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let ids = helpers::create_hotels(
        &state,
        &admin,
        [("Hôtel Étoile", "Zürich, Suisse"), ("Le Grand Paris", "Paris, France")],
    )
    .await?;
    let query = akkor_hotel::Query::new(state.clone());

    for term in ["étoile", "ÉTOILE", "zürich", "ZÜRICH"] {
        let found = query
            .filter(FilterQuery {
                search: Some(term.to_owned()),
                ..Default::default()
            })
            .await?;
        assert_eq!(found.meta.total, 1, "{term}");
        assert_eq!(found.data[0].id, ids[0]);
    }

    akkor_hotel::Command::new(state)
        .update(
            &admin,
            ids[1],
            akkor_hotel::UpdateInput {
                name: Some("Château Noël".to_owned()),
                ..Default::default()
            },
        )
        .await?;

    let renamed = query
        .filter(FilterQuery {
            search: Some("CHÂTEAU".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(renamed.meta.total, 1);
    assert_eq!(renamed.data[0].id, ids[1]);

    Ok(())
}

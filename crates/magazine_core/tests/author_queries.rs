use magazine_core::{
    AuthorId, AuthorService, EntityRef, InMemoryCatalogRepository, MagazineId, MagazineService,
    RepoError, ValidationError,
};

#[test]
fn create_author_rejects_empty_name_without_registering() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);

    let err = authors.create_author("").unwrap_err();
    assert_eq!(err, RepoError::Validation(ValidationError::EmptyAuthorName));
    assert!(authors.list_authors().unwrap().is_empty());
}

#[test]
fn rename_author_is_a_no_op() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let author = authors.create_author("Carry Bradshaw").unwrap();

    let returned = authors.rename_author(author.id(), "ActuallyTopher").unwrap();
    assert_eq!(returned.name(), "Carry Bradshaw");
    assert_eq!(
        authors.get_author(author.id()).unwrap().unwrap().name(),
        "Carry Bradshaw"
    );
}

#[test]
fn add_article_grows_author_and_magazine_articles() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let magazines = MagazineService::new(&repo);
    let author = authors.create_author("Carry Bradshaw").unwrap();
    let magazine = magazines.create_magazine("Vogue", "Fashion").unwrap();

    assert!(authors.articles(author.id()).unwrap().is_empty());

    let article = authors
        .add_article(author.id(), magazine.id(), "Valid Title")
        .unwrap();

    let by_author = authors.articles(author.id()).unwrap();
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0], article);
    assert_eq!(by_author[0].author_id(), author.id());

    let in_magazine = magazines.articles(magazine.id()).unwrap();
    assert!(in_magazine.iter().any(|a| a.id() == article.id()));
}

#[test]
fn add_article_propagates_validation_errors() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let magazines = MagazineService::new(&repo);
    let author = authors.create_author("Carry Bradshaw").unwrap();
    let magazine = magazines.create_magazine("Vogue", "Fashion").unwrap();

    let err = authors
        .add_article(author.id(), magazine.id(), "Tiny")
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::TitleLength { len: 4 })
    );

    let unknown_magazine = MagazineId::new();
    let err = authors
        .add_article(author.id(), unknown_magazine, "Valid Title")
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::UnknownMagazine(unknown_magazine))
    );
    assert!(authors.articles(author.id()).unwrap().is_empty());
}

#[test]
fn articles_keep_registry_order_and_only_match_author() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let magazines = MagazineService::new(&repo);
    let carry = authors.create_author("Carry Bradshaw").unwrap();
    let nathaniel = authors.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = magazines.create_magazine("Vogue", "Fashion").unwrap();

    authors.add_article(carry.id(), vogue.id(), "First piece").unwrap();
    authors
        .add_article(nathaniel.id(), vogue.id(), "Not Carry's piece")
        .unwrap();
    authors.add_article(carry.id(), vogue.id(), "Second piece").unwrap();

    let titles: Vec<String> = authors
        .articles(carry.id())
        .unwrap()
        .iter()
        .map(|a| a.title().to_string())
        .collect();
    assert_eq!(titles, vec!["First piece", "Second piece"]);
}

#[test]
fn magazines_are_unique_by_identity() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let magazines = MagazineService::new(&repo);
    let author = authors.create_author("Carry Bradshaw").unwrap();
    let vogue = magazines.create_magazine("Vogue", "Fashion").unwrap();
    let vogue_twin = magazines.create_magazine("Vogue", "Fashion").unwrap();
    let af = magazines.create_magazine("AD", "Architecture").unwrap();

    authors.add_article(author.id(), vogue.id(), "Piece one").unwrap();
    authors.add_article(author.id(), vogue.id(), "Piece two").unwrap();
    authors.add_article(author.id(), af.id(), "Piece three").unwrap();
    authors
        .add_article(author.id(), vogue_twin.id(), "Piece four")
        .unwrap();

    let ids: Vec<MagazineId> = authors
        .magazines(author.id())
        .unwrap()
        .iter()
        .map(|m| m.id())
        .collect();
    assert_eq!(ids, vec![vogue.id(), af.id(), vogue_twin.id()]);
}

#[test]
fn topic_areas_is_none_without_articles() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let author = authors.create_author("Carry Bradshaw").unwrap();

    assert_eq!(authors.topic_areas(author.id()).unwrap(), None);
}

#[test]
fn topic_areas_deduplicates_categories() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let magazines = MagazineService::new(&repo);
    let author = authors.create_author("Carry Bradshaw").unwrap();
    let vogue = magazines.create_magazine("Vogue", "Fashion").unwrap();
    let elle = magazines.create_magazine("Elle", "Fashion").unwrap();
    let ad = magazines.create_magazine("AD", "Architecture").unwrap();

    authors.add_article(author.id(), vogue.id(), "Piece one").unwrap();
    authors.add_article(author.id(), elle.id(), "Piece two").unwrap();
    authors.add_article(author.id(), ad.id(), "Piece three").unwrap();

    let mut topics = authors.topic_areas(author.id()).unwrap().unwrap();
    topics.sort();
    assert_eq!(topics, vec!["Architecture", "Fashion"]);
}

#[test]
fn queries_on_unregistered_author_return_not_found() {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let stranger = AuthorId::new();

    let err = authors.articles(stranger).unwrap_err();
    assert_eq!(err, RepoError::NotFound(EntityRef::Author(stranger)));
    assert!(authors.topic_areas(stranger).is_err());
}

use magazine_core::{
    ArticleId, ArticleService, AuthorId, AuthorService, EntityRef, InMemoryCatalogRepository,
    MagazineId, MagazineService, RepoError, ValidationError,
};

struct Fixture {
    repo: InMemoryCatalogRepository,
}

impl Fixture {
    fn new() -> Self {
        Self {
            repo: InMemoryCatalogRepository::new(),
        }
    }

    fn authors(&self) -> AuthorService<&InMemoryCatalogRepository> {
        AuthorService::new(&self.repo)
    }

    fn magazines(&self) -> MagazineService<&InMemoryCatalogRepository> {
        MagazineService::new(&self.repo)
    }

    fn articles(&self) -> ArticleService<&InMemoryCatalogRepository> {
        ArticleService::new(&self.repo)
    }
}

#[test]
fn create_article_checks_title_before_references() {
    let fixture = Fixture::new();
    let stranger = AuthorId::new();
    let nowhere = MagazineId::new();

    let err = fixture
        .articles()
        .create_article(stranger, nowhere, "Tiny")
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::TitleLength { len: 4 })
    );

    let err = fixture
        .articles()
        .create_article(stranger, nowhere, "Valid Title")
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::UnknownAuthor(stranger))
    );
    assert!(fixture.articles().list_articles().unwrap().is_empty());
}

#[test]
fn set_author_rejects_unknown_author_and_keeps_original() {
    let fixture = Fixture::new();
    let author = fixture.authors().create_author("Carry Bradshaw").unwrap();
    let magazine = fixture.magazines().create_magazine("Vogue", "Fashion").unwrap();
    let article = fixture
        .articles()
        .create_article(author.id(), magazine.id(), "Valid Title")
        .unwrap();

    let stranger = AuthorId::new();
    let err = fixture.articles().set_author(article.id(), stranger).unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::UnknownAuthor(stranger))
    );

    let stored = fixture.articles().get_article(article.id()).unwrap().unwrap();
    assert_eq!(stored.author_id(), author.id());
}

#[test]
fn set_author_moves_article_between_authors() {
    let fixture = Fixture::new();
    let carry = fixture.authors().create_author("Carry Bradshaw").unwrap();
    let nathaniel = fixture.authors().create_author("Nathaniel Hawthorne").unwrap();
    let magazine = fixture.magazines().create_magazine("Vogue", "Fashion").unwrap();
    let article = fixture
        .articles()
        .create_article(carry.id(), magazine.id(), "Valid Title")
        .unwrap();

    let updated = fixture.articles().set_author(article.id(), nathaniel.id()).unwrap();
    assert_eq!(updated.author_id(), nathaniel.id());

    assert!(fixture.authors().articles(carry.id()).unwrap().is_empty());
    assert_eq!(fixture.authors().articles(nathaniel.id()).unwrap().len(), 1);
}

#[test]
fn set_magazine_rejects_unknown_magazine_and_keeps_original() {
    let fixture = Fixture::new();
    let author = fixture.authors().create_author("Carry Bradshaw").unwrap();
    let vogue = fixture.magazines().create_magazine("Vogue", "Fashion").unwrap();
    let ad = fixture.magazines().create_magazine("AD", "Architecture").unwrap();
    let article = fixture
        .articles()
        .create_article(author.id(), vogue.id(), "Valid Title")
        .unwrap();

    let nowhere = MagazineId::new();
    let err = fixture.articles().set_magazine(article.id(), nowhere).unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::UnknownMagazine(nowhere))
    );
    assert_eq!(
        fixture
            .articles()
            .get_article(article.id())
            .unwrap()
            .unwrap()
            .magazine_id(),
        vogue.id()
    );

    fixture.articles().set_magazine(article.id(), ad.id()).unwrap();
    assert!(fixture.magazines().articles(vogue.id()).unwrap().is_empty());
    assert_eq!(fixture.magazines().articles(ad.id()).unwrap().len(), 1);
}

#[test]
fn retitle_article_is_a_no_op() {
    let fixture = Fixture::new();
    let author = fixture.authors().create_author("Carry Bradshaw").unwrap();
    let magazine = fixture.magazines().create_magazine("Vogue", "Fashion").unwrap();
    let article = fixture
        .articles()
        .create_article(author.id(), magazine.id(), "Valid Title")
        .unwrap();

    let returned = fixture
        .articles()
        .retitle_article(article.id(), "A different title")
        .unwrap();
    assert_eq!(returned.title(), "Valid Title");
}

#[test]
fn updates_on_unregistered_article_return_not_found() {
    let fixture = Fixture::new();
    let author = fixture.authors().create_author("Carry Bradshaw").unwrap();
    let missing = ArticleId::new();

    let err = fixture.articles().set_author(missing, author.id()).unwrap_err();
    assert_eq!(err, RepoError::NotFound(EntityRef::Article(missing)));
}

#[test]
fn separate_registries_do_not_share_state() {
    let first = Fixture::new();
    let second = Fixture::new();
    let author = first.authors().create_author("Carry Bradshaw").unwrap();
    let magazine = first.magazines().create_magazine("Vogue", "Fashion").unwrap();
    first
        .articles()
        .create_article(author.id(), magazine.id(), "Valid Title")
        .unwrap();

    assert!(second.articles().list_articles().unwrap().is_empty());
    assert_eq!(second.magazines().top_publisher().unwrap(), None);
}

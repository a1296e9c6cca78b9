//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `magazine_core` linkage with a tiny seeded catalog.
//! - Keep output deterministic for quick local sanity checks.

use magazine_core::{
    AuthorService, InMemoryCatalogRepository, MagazineService, RepoResult,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("magazine_core ping={}", magazine_core::ping());
    println!("magazine_core version={}", magazine_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("magazine_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> RepoResult<()> {
    let repo = InMemoryCatalogRepository::new();
    let authors = AuthorService::new(&repo);
    let magazines = MagazineService::new(&repo);

    let ada = authors.create_author("Ada Lovelace")?;
    let tech = magazines.create_magazine("Byte", "Technology")?;
    let arts = magazines.create_magazine("Canvas", "Art")?;

    authors.add_article(ada.id(), tech.id(), "Notes on the Engine")?;
    authors.add_article(ada.id(), tech.id(), "Loops and Cards")?;
    authors.add_article(ada.id(), arts.id(), "Poetical Science")?;

    let topics = authors.topic_areas(ada.id())?.unwrap_or_default();
    println!("author={} topic_areas={}", ada.name(), topics.join(","));

    match magazines.top_publisher()? {
        Some(top) => println!("top_publisher={}", top.name()),
        None => println!("top_publisher=none"),
    }
    Ok(())
}

use std::sync::Arc;

mod support;

use chrono::Duration;

use newsdesk_core::application::queries::articles::ArticleQueryService;
use newsdesk_core::domain::publisher::PublisherId;
use newsdesk_core::domain::subscription::SubscriptionRepository;
use newsdesk_core::domain::user::{Role, UserId};

use support::{
    ArticleBuilder, InMemoryArticleRepo, InMemorySubscriptionRepo, InMemoryUserRepo, UserBuilder,
    actor, fixed_now,
};

struct Harness {
    service: ArticleQueryService,
    subscriptions: Arc<InMemorySubscriptionRepo>,
}

fn harness() -> Harness {
    let users = Arc::new(InMemoryUserRepo::new());
    users.seed(vec![
        UserBuilder::new(10, "alice").role(Role::Journalist).build(),
        UserBuilder::new(11, "eve").role(Role::Journalist).build(),
        UserBuilder::new(12, "mallory")
            .role(Role::Journalist)
            .build(),
        UserBuilder::new(20, "bob").email("bob@example.com").build(),
    ]);

    let subscriptions = Arc::new(InMemorySubscriptionRepo::new(users));
    let articles = Arc::new(InMemoryArticleRepo::new(Arc::clone(&subscriptions)));

    let base = fixed_now();
    articles.seed(vec![
        // reachable through both paths, must appear exactly once
        ArticleBuilder::new()
            .id(1)
            .title("Both paths")
            .approved()
            .journalist(10)
            .publisher(1)
            .created_at(base)
            .build(),
        // journalist path only
        ArticleBuilder::new()
            .id(2)
            .title("Followed journalist")
            .approved()
            .journalist(10)
            .publisher(2)
            .created_at(base + Duration::hours(1))
            .build(),
        // publisher path only
        ArticleBuilder::new()
            .id(3)
            .title("Subscribed publisher")
            .approved()
            .journalist(11)
            .publisher(1)
            .created_at(base + Duration::hours(2))
            .build(),
        // reachable but not approved
        ArticleBuilder::new()
            .id(4)
            .title("Draft")
            .journalist(10)
            .publisher(1)
            .created_at(base + Duration::hours(3))
            .build(),
        // approved but out of reach
        ArticleBuilder::new()
            .id(5)
            .title("Elsewhere")
            .approved()
            .journalist(12)
            .publisher(3)
            .created_at(base + Duration::hours(4))
            .build(),
    ]);

    Harness {
        service: ArticleQueryService::new(articles),
        subscriptions,
    }
}

#[tokio::test]
async fn reader_sees_the_union_of_both_paths_deduplicated() {
    let h = harness();
    h.subscriptions
        .subscribe_publisher(UserId::new(20).unwrap(), PublisherId::new(1).unwrap())
        .await
        .unwrap();
    h.subscriptions
        .follow_journalist(UserId::new(20).unwrap(), UserId::new(10).unwrap())
        .await
        .unwrap();

    let reader = actor(20, "bob", Role::Reader);
    let feed = h.service.subscribed_articles(&reader).await.unwrap();

    let titles: Vec<&str> = feed.iter().map(|a| a.title.as_str()).collect();
    // newest first; the draft and the unreachable article are absent and
    // the double-reachable one shows up once
    assert_eq!(
        titles,
        vec!["Subscribed publisher", "Followed journalist", "Both paths"]
    );
}

#[tokio::test]
async fn reader_without_subscriptions_gets_an_empty_feed() {
    let h = harness();
    let reader = actor(20, "bob", Role::Reader);
    let feed = h.service.subscribed_articles(&reader).await.unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn non_readers_get_an_empty_feed_even_with_edges() {
    let h = harness();
    // edges for a journalist account are ignored by the query
    h.subscriptions
        .subscribe_publisher(UserId::new(10).unwrap(), PublisherId::new(1).unwrap())
        .await
        .unwrap();

    let journalist = actor(10, "alice", Role::Journalist);
    let feed = h.service.subscribed_articles(&journalist).await.unwrap();
    assert!(feed.is_empty());

    let editor = actor(1, "editor", Role::Editor);
    let feed = h.service.subscribed_articles(&editor).await.unwrap();
    assert!(feed.is_empty());
}

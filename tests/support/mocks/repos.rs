// tests/support/mocks/repos.rs
use std::collections::{HashMap, HashSet};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;

use newsdesk_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::publisher::{
    NewPublisher, Publisher, PublisherId, PublisherRepository,
};
use newsdesk_core::domain::subscription::SubscriptionRepository;
use newsdesk_core::domain::user::{
    NewUser, User, UserId, UserRepository, UserUpdate, Username,
};

/* -------------------------------- InMemoryUserRepo -------------------------------- */

/// 軽量なインメモリユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, users: Vec<User>) {
        let mut map = self.inner.lock().unwrap();
        let mut max_id = self.next_id.load(Ordering::SeqCst);
        for user in users {
            let id = i64::from(user.id);
            max_id = max_id.max(id + 1);
            map.insert(id, user);
        }
        self.next_id.store(max_id, Ordering::SeqCst);
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
        };
        self.inner.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(email) = update.email {
            user.email = Some(email);
        }

        Ok(user.clone())
    }
}

/* -------------------------------- InMemoryPublisherRepo -------------------------------- */

#[derive(Default)]
pub struct InMemoryPublisherRepo {
    inner: Mutex<HashMap<i64, Publisher>>,
    editors: Mutex<HashSet<(i64, i64)>>,
    journalists: Mutex<HashSet<(i64, i64)>>,
    next_id: AtomicI64,
}

impl InMemoryPublisherRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            editors: Mutex::new(HashSet::new()),
            journalists: Mutex::new(HashSet::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, publishers: Vec<Publisher>) {
        let mut map = self.inner.lock().unwrap();
        let mut max_id = self.next_id.load(Ordering::SeqCst);
        for publisher in publishers {
            let id = i64::from(publisher.id);
            max_id = max_id.max(id + 1);
            map.insert(id, publisher);
        }
        self.next_id.store(max_id, Ordering::SeqCst);
    }

    pub fn has_editor(&self, publisher: i64, user: i64) -> bool {
        self.editors.lock().unwrap().contains(&(publisher, user))
    }

    pub fn has_journalist(&self, publisher: i64, user: i64) -> bool {
        self.journalists.lock().unwrap().contains(&(publisher, user))
    }
}

#[async_trait]
impl PublisherRepository for InMemoryPublisherRepo {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let publisher = Publisher {
            id: PublisherId::new(id)?,
            name: publisher.name,
            created_at: publisher.created_at,
        };
        self.inner.lock().unwrap().insert(id, publisher.clone());
        Ok(publisher)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn add_editor(&self, publisher: PublisherId, editor: UserId) -> DomainResult<()> {
        self.editors
            .lock()
            .unwrap()
            .insert((i64::from(publisher), i64::from(editor)));
        Ok(())
    }

    async fn add_journalist(
        &self,
        publisher: PublisherId,
        journalist: UserId,
    ) -> DomainResult<()> {
        self.journalists
            .lock()
            .unwrap()
            .insert((i64::from(publisher), i64::from(journalist)));
        Ok(())
    }
}

/* -------------------------------- InMemorySubscriptionRepo -------------------------------- */

/// 購読エッジのインメモリ実装
/// 購読者の解決にはユーザーリポジトリを参照する
pub struct InMemorySubscriptionRepo {
    users: Arc<InMemoryUserRepo>,
    publisher_edges: Mutex<HashSet<(i64, i64)>>,
    journalist_edges: Mutex<HashSet<(i64, i64)>>,
}

impl InMemorySubscriptionRepo {
    pub fn new(users: Arc<InMemoryUserRepo>) -> Self {
        Self {
            users,
            publisher_edges: Mutex::new(HashSet::new()),
            journalist_edges: Mutex::new(HashSet::new()),
        }
    }

    pub fn publisher_edge_count(&self, user: i64) -> usize {
        self.publisher_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| *u == user)
            .count()
    }

    pub fn journalist_edge_count(&self, user: i64) -> usize {
        self.journalist_edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| *u == user)
            .count()
    }

    pub fn has_publisher_edge(&self, user: i64, publisher: i64) -> bool {
        self.publisher_edges
            .lock()
            .unwrap()
            .contains(&(user, publisher))
    }

    pub fn has_journalist_edge(&self, user: i64, journalist: i64) -> bool {
        self.journalist_edges
            .lock()
            .unwrap()
            .contains(&(user, journalist))
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepo {
    async fn subscribe_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()> {
        self.publisher_edges
            .lock()
            .unwrap()
            .insert((i64::from(reader), i64::from(publisher)));
        Ok(())
    }

    async fn unsubscribe_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()> {
        self.publisher_edges
            .lock()
            .unwrap()
            .remove(&(i64::from(reader), i64::from(publisher)));
        Ok(())
    }

    async fn follow_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        self.journalist_edges
            .lock()
            .unwrap()
            .insert((i64::from(reader), i64::from(journalist)));
        Ok(())
    }

    async fn unfollow_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        self.journalist_edges
            .lock()
            .unwrap()
            .remove(&(i64::from(reader), i64::from(journalist)));
        Ok(())
    }

    async fn clear_for_user(&self, user: UserId) -> DomainResult<()> {
        let id = i64::from(user);
        self.publisher_edges.lock().unwrap().retain(|(u, _)| *u != id);
        self.journalist_edges
            .lock()
            .unwrap()
            .retain(|(u, _)| *u != id);
        Ok(())
    }

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<User>> {
        let target = i64::from(publisher);
        let edges = self.publisher_edges.lock().unwrap().clone();
        let mut subscribers = Vec::new();
        for (user_id, publisher_id) in edges {
            if publisher_id == target {
                if let Some(user) = self.users.get(user_id) {
                    subscribers.push(user);
                }
            }
        }
        subscribers.sort_by_key(|u| i64::from(u.id));
        Ok(subscribers)
    }

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<User>> {
        let target = i64::from(journalist);
        let edges = self.journalist_edges.lock().unwrap().clone();
        let mut followers = Vec::new();
        for (user_id, journalist_id) in edges {
            if journalist_id == target {
                if let Some(user) = self.users.get(user_id) {
                    followers.push(user);
                }
            }
        }
        followers.sort_by_key(|u| i64::from(u.id));
        Ok(followers)
    }
}

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// 記事の読み書き両リポジトリを兼ねるインメモリ実装
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<i64, Article>>,
    subscriptions: Arc<InMemorySubscriptionRepo>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new(subscriptions: Arc<InMemorySubscriptionRepo>) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            subscriptions,
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, articles: Vec<Article>) {
        let mut map = self.inner.lock().unwrap();
        let mut max_id = self.next_id.load(Ordering::SeqCst);
        for article in articles {
            let id = i64::from(article.id);
            max_id = max_id.max(id + 1);
            map.insert(id, article);
        }
        self.next_id.store(max_id, Ordering::SeqCst);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let article = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            body: article.body,
            approved: article.approved,
            journalist_id: article.journalist_id,
            publisher_id: article.publisher_id,
            created_at: article.created_at,
        };
        self.inner.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let article = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(approved) = update.approved {
            article.approved = approved;
        }

        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_subscribed(&self, reader: UserId) -> DomainResult<Vec<Article>> {
        let reader_id = i64::from(reader);
        let articles: Vec<Article> = self.inner.lock().unwrap().values().cloned().collect();

        let mut visible: Vec<Article> = articles
            .into_iter()
            .filter(|a| {
                a.approved
                    && (self
                        .subscriptions
                        .has_publisher_edge(reader_id, i64::from(a.publisher_id))
                        || self
                            .subscriptions
                            .has_journalist_edge(reader_id, i64::from(a.journalist_id)))
            })
            .collect();

        visible.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });

        Ok(visible)
    }
}

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use ktour_application::ports::{ResponseCache, TourTransport, TransportReply};
use ktour_application::TourDataClient;
use ktour_domain::config::ApiConfig;
use ktour_domain::KtourError;

/// Transport double: scripted replies consumed in order, with a fetch
/// counter and a log of requested URLs.
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<TransportReply, KtourError>>>,
    fetches: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fetches: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(Ok(TransportReply {
            status,
            body: Bytes::from(body.to_string()),
        }));
    }

    pub fn push_err(&self, err: KtourError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> Option<String> {
        self.urls.lock().unwrap().last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TourTransport for MockTransport {
    async fn fetch(&self, url: &str) -> Result<TransportReply, KtourError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(KtourError::Network("no scripted reply".to_string())))
    }
}

/// In-memory cache double with operation counters.
pub struct MockCache {
    store: Mutex<HashMap<String, Bytes>>,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl MockCache {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }

    pub fn seed(&self, key: &str, payload: &str) {
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), Bytes::from(payload.to_string()));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().unwrap().contains_key(key)
    }

    pub fn entry_count(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

impl Default for MockCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseCache for MockCache {
    async fn get(&self, key: &str) -> Option<Bytes> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.store.lock().unwrap().get(key).cloned()
    }

    async fn put(&self, key: &str, payload: Bytes) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.store.lock().unwrap().insert(key.to_string(), payload);
    }

    async fn remove(&self, key: &str) {
        self.store.lock().unwrap().remove(key);
    }

    async fn clear(&self) {
        self.store.lock().unwrap().clear();
    }
}

pub fn test_api_config() -> ApiConfig {
    ApiConfig {
        base_url: "https://api.example.test/tour".to_string(),
        service_key: "testkey".to_string(),
        mobile_os: "ETC".to_string(),
        mobile_app: "ktour-tests".to_string(),
        response_format: "json".to_string(),
        default_page_size: 10,
    }
}

pub struct ClientFixture {
    pub client: TourDataClient,
    pub transport: Arc<MockTransport>,
    pub cache: Arc<MockCache>,
}

pub fn client_fixture() -> ClientFixture {
    let transport = Arc::new(MockTransport::new());
    let cache = Arc::new(MockCache::new());
    let client = TourDataClient::new(&test_api_config(), transport.clone(), cache.clone());
    ClientFixture {
        client,
        transport,
        cache,
    }
}

/// Builds a well-formed list envelope with one item per title.
pub fn list_body(titles: &[&str], total: u32) -> String {
    let items: Vec<serde_json::Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "contentid": format!("{}", 100000 + i),
                "contenttypeid": "12",
                "title": title,
                "addr1": "서울특별시 종로구",
                "mapx": "126.97",
                "mapy": "37.57"
            })
        })
        .collect();

    serde_json::json!({
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": {
                "items": { "item": items },
                "numOfRows": 10,
                "pageNo": 1,
                "totalCount": total
            }
        }
    })
    .to_string()
}

/// Envelope that reports an application-level failure despite HTTP 200.
pub fn error_body(code: &str, message: &str) -> String {
    serde_json::json!({
        "response": {
            "header": { "resultCode": code, "resultMsg": message }
        }
    })
    .to_string()
}

/// No-result envelope: the service collapses `items` to an empty string.
pub fn empty_body() -> String {
    serde_json::json!({
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": {
                "items": "",
                "numOfRows": 10,
                "pageNo": 1,
                "totalCount": 0
            }
        }
    })
    .to_string()
}

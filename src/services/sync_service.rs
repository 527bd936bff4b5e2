use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::Activity;
use crate::services::activity_service::ActivityStore;
use serde::Serialize;

/// Body posted for one activity
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    pub title: String,
    pub body: String,
    pub user_id: u32,
}

impl SyncPayload {
    pub fn from_activity(activity: &Activity, user_id: u32) -> Self {
        Self {
            title: activity.title.clone(),
            body: activity.description.clone(),
            user_id,
        }
    }
}

/// Remote end of the one-way sync
#[allow(async_fn_in_trait)]
pub trait SyncTarget {
    fn user_id(&self) -> u32;

    /// True when the endpoint is reachable and answers with 2xx
    async fn check_connection(&self) -> bool;

    /// Returns Ok(true) on a 2xx answer, Ok(false) on any other status
    async fn push(&self, payload: &SyncPayload) -> Result<bool, AppError>;
}

/// Placeholder REST endpoint reached over HTTP
pub struct HttpSyncTarget {
    client: reqwest::Client,
    api_url: String,
    user_id: u32,
}

impl HttpSyncTarget {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            user_id: config.user_id,
        })
    }
}

impl SyncTarget for HttpSyncTarget {
    fn user_id(&self) -> u32 {
        self.user_id
    }

    /// HEAD request against the first resource of the endpoint
    async fn check_connection(&self) -> bool {
        match self
            .client
            .head(format!("{}/1", self.api_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Connection check failed: {}", e);
                false
            }
        }
    }

    async fn push(&self, payload: &SyncPayload) -> Result<bool, AppError> {
        let response = self.client.post(&self.api_url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Sync endpoint answered {}", status);
        }
        Ok(status.is_success())
    }
}

/// Pushes one activity and marks it synced on success.
///
/// Network failures leave the store untouched and yield `Ok(false)`; only a
/// failing local write is reported as an error.
pub async fn sync_to_server<T: SyncTarget>(
    store: &ActivityStore<'_>,
    target: &T,
    activity: &Activity,
) -> Result<bool, AppError> {
    let payload = SyncPayload::from_activity(activity, target.user_id());

    match target.push(&payload).await {
        Ok(true) => {
            let synced = Activity {
                is_synced: true,
                ..activity.clone()
            };
            store.update_activity(&synced)?;
            log::info!("Activity {} synced", activity.id);
            Ok(true)
        }
        Ok(false) => Ok(false),
        Err(e) => {
            log::info!("Sync failed - offline mode: {}", e);
            Ok(false)
        }
    }
}

/// Pushes every unsynced activity once and returns how many succeeded
pub async fn sync_all_pending<T: SyncTarget>(
    store: &ActivityStore<'_>,
    target: &T,
) -> Result<usize, AppError> {
    let pending: Vec<Activity> = store
        .get_activities()?
        .into_iter()
        .filter(|a| !a.is_synced)
        .collect();

    let mut synced_count = 0;
    for activity in &pending {
        match sync_to_server(store, target, activity).await {
            Ok(true) => synced_count += 1,
            Ok(false) => {}
            Err(e) => log::error!("Marking {} as synced failed: {}", activity.id, e),
        }
    }

    log::info!("Synced {} of {} pending activities", synced_count, pending.len());
    Ok(synced_count)
}

/// Result of a user-triggered sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualSyncOutcome {
    /// The connectivity check failed; nothing was pushed
    Offline,
    /// No record is pending
    AllSynced,
    /// Pending records were pushed; holds the number that succeeded
    Synced(usize),
}

/// Checks connectivity, then pushes everything still pending
pub async fn manual_sync<T: SyncTarget>(
    store: &ActivityStore<'_>,
    target: &T,
) -> Result<ManualSyncOutcome, AppError> {
    if !target.check_connection().await {
        log::info!("Manual sync skipped, endpoint unreachable");
        return Ok(ManualSyncOutcome::Offline);
    }

    if store.get_activities()?.iter().all(|a| a.is_synced) {
        return Ok(ManualSyncOutcome::AllSynced);
    }

    let synced = sync_all_pending(store, target).await?;
    Ok(ManualSyncOutcome::Synced(synced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::activity_service::tests::{sample, setup};
    use std::cell::RefCell;

    /// Answers success unless the title is listed; "offline" titles fail in transport
    struct FakeTarget {
        reachable: bool,
        rejected: Vec<&'static str>,
        offline: Vec<&'static str>,
        received: RefCell<Vec<SyncPayload>>,
    }

    impl FakeTarget {
        fn new() -> Self {
            Self {
                reachable: true,
                rejected: Vec::new(),
                offline: Vec::new(),
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl SyncTarget for FakeTarget {
        fn user_id(&self) -> u32 {
            1
        }

        async fn check_connection(&self) -> bool {
            self.reachable
        }

        async fn push(&self, payload: &SyncPayload) -> Result<bool, AppError> {
            self.received.borrow_mut().push(payload.clone());
            if self.offline.contains(&payload.title.as_str()) {
                return Err(AppError::Network("connection refused".to_string()));
            }
            Ok(!self.rejected.contains(&payload.title.as_str()))
        }
    }

    #[test]
    fn test_payload_shape() {
        let payload = SyncPayload::from_activity(&sample("1", "Standup"), 1);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Standup", "body": "Standup description", "userId": 1})
        );
    }

    #[tokio::test]
    async fn test_sync_marks_synced_on_success() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        let activity = sample("1", "Standup");
        store.add_activity(activity.clone()).unwrap();

        let target = FakeTarget::new();
        assert!(sync_to_server(&store, &target, &activity).await.unwrap());
        assert!(store.get_activity("1").unwrap().is_synced);
    }

    #[tokio::test]
    async fn test_sync_leaves_record_pending_on_failure() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        let rejected = sample("1", "Rejected");
        let offline = sample("2", "Offline");
        store.add_activity(rejected.clone()).unwrap();
        store.add_activity(offline.clone()).unwrap();

        let mut target = FakeTarget::new();
        target.rejected.push("Rejected");
        target.offline.push("Offline");

        assert!(!sync_to_server(&store, &target, &rejected).await.unwrap());
        assert!(!sync_to_server(&store, &target, &offline).await.unwrap());
        assert!(store.get_activities().unwrap().iter().all(|a| !a.is_synced));
    }

    #[tokio::test]
    async fn test_sync_all_pending_continues_past_failures() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        let mut already = sample("0", "Already");
        already.is_synced = true;
        store.add_activity(already).unwrap();
        store.add_activity(sample("1", "One")).unwrap();
        store.add_activity(sample("2", "Offline")).unwrap();
        store.add_activity(sample("3", "Three")).unwrap();

        let mut target = FakeTarget::new();
        target.offline.push("Offline");

        let count = sync_all_pending(&store, &target).await.unwrap();
        assert_eq!(count, 2);

        // Already-synced records are not pushed again
        let titles: Vec<String> = target
            .received
            .borrow()
            .iter()
            .map(|p| p.title.clone())
            .collect();
        assert_eq!(titles, vec!["Three", "Offline", "One"]);

        let stored = store.get_activities().unwrap();
        let pending: Vec<&str> = stored
            .iter()
            .filter(|a| !a.is_synced)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(pending, vec!["2"]);

        // A second run retries only what is still pending
        target.offline.clear();
        assert_eq!(sync_all_pending(&store, &target).await.unwrap(), 1);
        assert!(store.get_activities().unwrap().iter().all(|a| a.is_synced));
    }

    #[tokio::test]
    async fn test_sync_after_delete_does_not_resurrect() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        let activity = sample("1", "Gone");
        store.add_activity(activity.clone()).unwrap();
        store.delete_activity("1").unwrap();

        let target = FakeTarget::new();
        assert!(sync_to_server(&store, &target, &activity).await.unwrap());
        assert!(store.get_activities().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_manual_sync_offline() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        store.add_activity(sample("1", "Pending")).unwrap();

        let mut target = FakeTarget::new();
        target.reachable = false;

        assert_eq!(
            manual_sync(&store, &target).await.unwrap(),
            ManualSyncOutcome::Offline
        );
        assert!(target.received.borrow().is_empty());
        assert!(!store.get_activity("1").unwrap().is_synced);
    }

    #[tokio::test]
    async fn test_manual_sync_nothing_pending() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        let target = FakeTarget::new();

        assert_eq!(
            manual_sync(&store, &target).await.unwrap(),
            ManualSyncOutcome::AllSynced
        );

        let mut done = sample("1", "Done");
        done.is_synced = true;
        store.add_activity(done).unwrap();
        assert_eq!(
            manual_sync(&store, &target).await.unwrap(),
            ManualSyncOutcome::AllSynced
        );
        assert!(target.received.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_manual_sync_reports_successes() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        store.add_activity(sample("1", "One")).unwrap();
        store.add_activity(sample("2", "Rejected")).unwrap();
        store.add_activity(sample("3", "Three")).unwrap();

        let mut target = FakeTarget::new();
        target.rejected.push("Rejected");

        assert_eq!(
            manual_sync(&store, &target).await.unwrap(),
            ManualSyncOutcome::Synced(2)
        );
        assert!(!store.get_activity("2").unwrap().is_synced);
    }

    /// Serves one canned HTTP response on a local port and returns the base URL
    fn serve_once(status_line: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // Read headers, then as many body bytes as announced
            loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://{}/posts", addr)
    }

    fn http_target(api_url: String) -> HttpSyncTarget {
        HttpSyncTarget::new(&AppConfig {
            api_url,
            request_timeout_secs: 5,
            ..AppConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_http_push_maps_status() {
        let payload = SyncPayload::from_activity(&sample("1", "Standup"), 1);

        let created = http_target(serve_once("201 Created"));
        assert!(created.push(&payload).await.unwrap());

        let failing = http_target(serve_once("500 Internal Server Error"));
        assert!(!failing.push(&payload).await.unwrap());
    }

    #[tokio::test]
    async fn test_http_connection_check() {
        assert!(http_target(serve_once("200 OK")).check_connection().await);
        assert!(!http_target(serve_once("404 Not Found")).check_connection().await);
        assert!(!http_target("http://127.0.0.1:9/posts".to_string()).check_connection().await);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_leaves_record_pending() {
        let conn = setup();
        let store = ActivityStore::new(&conn, &AppConfig::default());
        let activity = sample("1", "Standup");
        store.add_activity(activity.clone()).unwrap();

        let target = http_target("http://127.0.0.1:9/posts".to_string());
        assert!(target.push(&SyncPayload::from_activity(&activity, 1)).await.is_err());
        assert!(!sync_to_server(&store, &target, &activity).await.unwrap());
        assert!(!store.get_activity("1").unwrap().is_synced);
    }
}

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}_{}_{nanos}@test.fr", std::process::id())
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/categories")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_rdv-server"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_json(client: &Client, url: String) -> Value {
    client
        .get(url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_login_succeeds_with_demo_account() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "identifier": "demo@rdv.fr", "password": "demo1234" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert!(body["token"].as_str().unwrap().starts_with("demo-token-"));
    assert_eq!(body["user"]["email"], "demo@rdv.fr");
}

#[tokio::test]
async fn http_login_wrong_password_keeps_http_200() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "identifier": "demo@rdv.fr", "password": "faux" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn http_register_then_login() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("inscription");

    let body: Value = client
        .post(format!("{}/api/register", server.base_url))
        .json(&json!({ "name": "Luc Test", "email": email, "password": "motdepasse" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert!(!body["token"].as_str().unwrap().is_empty());

    let body: Value = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "identifier": email, "password": "motdepasse" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Luc Test");
}

#[tokio::test]
async fn http_register_rejects_duplicate_email() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("doublon");

    for expected in [true, false] {
        let response = client
            .post(format!("{}/api/register", server.base_url))
            .json(&json!({ "name": "Eva Test", "email": email, "password": "motdepasse" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], expected);
    }
}

#[tokio::test]
async fn http_category_create_list_delete() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/api/categories", server.base_url))
        .json(&json!({
            "titre": "Atelier",
            "description": "Sessions de groupe",
            "couleur": "#c4372f",
            "icone": "🛠",
            "departement": "Formation",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["category"]["titre"], "Atelier");
    let id = body["category"]["id"].as_u64().unwrap();

    let body = get_json(&client, format!("{}/api/categories", server.base_url)).await;
    let titles: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["titre"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Atelier"));
    assert!(titles.contains(&"Entretien"));

    let response = client
        .delete(format!("{}/api/categories/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let body = get_json(&client, format!("{}/api/categories", server.base_url)).await;
    assert!(!body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"].as_u64() == Some(id)));
}

#[tokio::test]
async fn http_category_requires_title() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/categories", server.base_url))
        .json(&json!({ "titre": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn http_appointment_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/api/appointments", server.base_url))
        .json(&json!({
            "title": "Entretien annuel",
            "category_id": 1,
            "client_name": "Nora Blanc",
            "start_time": "2030-01-06T10:00:00",
            "end_time": "2030-01-06T11:00:00",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["appointment"]["status"], "pending");
    let id = body["appointment"]["id"].as_u64().unwrap();

    let body: Value = client
        .put(format!("{}/api/appointments/{id}/status", server.base_url))
        .json(&json!({ "status": "confirmed" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let body = get_json(&client, format!("{}/api/appointments/{id}", server.base_url)).await;
    assert_eq!(body["appointment"]["status"], "confirmed");
    assert_eq!(body["appointment"]["title"], "Entretien annuel");
}

#[tokio::test]
async fn http_appointment_rejects_end_before_start() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/appointments", server.base_url))
        .json(&json!({
            "title": "Créneau inversé",
            "start_time": "2030-01-06T11:00:00",
            "end_time": "2030-01-06T10:00:00",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn http_appointments_filter_by_category() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/api/appointments", server.base_url))
        .json(&json!({
            "title": "Consultation filtrée",
            "category_id": 2,
            "start_time": "2030-02-03T09:00:00",
            "end_time": "2030-02-03T09:30:00",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let body = get_json(
        &client,
        format!("{}/api/appointments?category_id=2", server.base_url),
    )
    .await;
    let appointments = body["appointments"].as_array().unwrap();
    assert!(!appointments.is_empty());
    assert!(appointments
        .iter()
        .all(|a| a["category_id"].as_u64() == Some(2)));
}

#[tokio::test]
async fn http_task_status_drives_completed() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&json!({ "title": "Relire le contrat", "priority": "high" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["task"]["status"], "todo");
    assert_eq!(body["task"]["completed"], false);
    let id = body["task"]["id"].as_u64().unwrap();

    let body: Value = client
        .put(format!("{}/api/tasks/{id}/status", server.base_url))
        .json(&json!({ "status": "done" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let body = get_json(&client, format!("{}/api/tasks", server.base_url)).await;
    let task = body["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"].as_u64() == Some(id))
        .unwrap();
    assert_eq!(task["status"], "done");
    assert_eq!(task["completed"], true);

    let response = client
        .delete(format!("{}/api/tasks/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn http_dashboard_data_shape() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body = get_json(&client, format!("{}/api/dashboard/data", server.base_url)).await;
    assert_eq!(body["success"], true);
    let stats = &body["data"]["stats"];
    assert!(stats["categories_total"].as_u64().unwrap() >= 1);
    assert!(stats["appointments_pending"].is_u64());
    assert!(body["data"]["today_appointments"].is_array());
    assert!(body["data"]["today_tasks"].is_array());
}

#[tokio::test]
async fn http_profile_update_roundtrip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("profil");

    // register to become the active profile
    let body: Value = client
        .post(format!("{}/api/register", server.base_url))
        .json(&json!({ "name": "Chloé Test", "email": email, "password": "motdepasse" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let new_email = unique_email("profil_maj");
    let body: Value = client
        .put(format!("{}/api/profile", server.base_url))
        .json(&json!({ "name": "Chloé Martin", "email": new_email }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let body = get_json(&client, format!("{}/api/profile", server.base_url)).await;
    assert_eq!(body["profile"]["name"], "Chloé Martin");
    assert_eq!(body["profile"]["email"], new_email.as_str());
    assert!(body["profile"]["security"]["last_login"].is_string());
    assert_eq!(body["profile"]["preferences"]["language"], "fr");
}

#[tokio::test]
async fn http_password_change_checks_current() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let email = unique_email("motdepasse");

    let body: Value = client
        .post(format!("{}/api/register", server.base_url))
        .json(&json!({ "name": "Rémi Test", "email": email, "password": "ancienmdp" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let response = client
        .put(format!("{}/api/profile/password", server.base_url))
        .json(&json!({ "current_password": "faux", "new_password": "nouveaumdp" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    let body: Value = client
        .put(format!("{}/api/profile/password", server.base_url))
        .json(&json!({ "current_password": "ancienmdp", "new_password": "nouveaumdp" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);

    let body: Value = client
        .post(format!("{}/api/login", server.base_url))
        .json(&json!({ "identifier": email, "password": "nouveaumdp" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
}

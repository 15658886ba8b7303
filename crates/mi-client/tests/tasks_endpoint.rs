//! End-to-end tests for the task endpoints against a local `tiny_http` server.

use std::sync::mpsc;
use std::thread;

use mi_client::{ClientError, ManagementClient, TaskApi};
use mi_config::MiConfig;
use mi_core::enums::TriggerKind;
use pretty_assertions::assert_eq;

/// Serve exactly one request with `status` and `body`, reporting the request
/// path+query back through the returned channel.
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("fixture server has an ip address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let _ = tx.send(request.url().to_string());
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}/management"), rx)
}

fn client_for(base: &str) -> ManagementClient {
    let config = MiConfig::default()
        .with_base_url(base)
        .expect("fixture base url is valid");
    ManagementClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn get_task_requests_filtered_url() {
    let (base, requests) = serve_once(
        200,
        r#"{"name":"SampleTask","type":"simple","triggerCount":"-1","triggerInterval":"5000"}"#,
    );

    let task = client_for(&base).get_task("SampleTask").await.unwrap();

    assert_eq!(
        requests.recv().unwrap(),
        "/management/tasks?taskName=SampleTask"
    );
    assert_eq!(task.name, "SampleTask");
    assert_eq!(task.trigger_type, TriggerKind::Simple);
    assert_eq!(task.trigger_count, "-1");
    assert_eq!(task.trigger_interval, "5000");
}

#[tokio::test]
async fn list_tasks_requests_collection_url() {
    let (base, requests) = serve_once(
        200,
        r#"{"count":1,"list":[{"name":"T1","type":"cron","triggerCron":"0 0 * * *"}]}"#,
    );

    let list = client_for(&base).list_tasks().await.unwrap();

    assert_eq!(requests.recv().unwrap(), "/management/tasks");
    assert_eq!(list.count, 1);
    assert_eq!(list.tasks[0].trigger_cron, "0 0 * * *");
}

#[tokio::test]
async fn not_found_maps_to_api_error() {
    let (base, _requests) = serve_once(404, r#"{"Error":"Specified task Missing not found"}"#);

    let err = client_for(&base).get_task("Missing").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Missing"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let (base, _requests) = serve_once(200, r#"{"count":"many"}"#);

    let err = client_for(&base).list_tasks().await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = client_for(&format!("http://127.0.0.1:{port}/management"))
        .list_tasks()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
}

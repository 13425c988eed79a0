use tws_cli::trigger::{RunList, TriggerClient, TriggerRunStatus, DOCUMENT_UPDATER_TASK};

#[test]
fn test_status_wire_names() {
    assert_eq!(TriggerRunStatus::Completed.as_str(), "COMPLETED");
    assert_eq!(TriggerRunStatus::WaitingForDeploy.as_str(), "WAITING_FOR_DEPLOY");
    assert_eq!(TriggerRunStatus::SystemFailure.as_str(), "SYSTEM_FAILURE");
    assert_eq!(TriggerRunStatus::Completed.to_string(), "COMPLETED");
}

#[test]
fn test_status_deserializes_from_wire_name() {
    let status: TriggerRunStatus = serde_json::from_str("\"REATTEMPTING\"").unwrap();
    assert_eq!(status, TriggerRunStatus::Reattempting);

    let status: TriggerRunStatus = serde_json::from_str("\"SYSTEM_FAILURE\"").unwrap();
    assert_eq!(status, TriggerRunStatus::SystemFailure);
}

#[test]
fn test_run_list_deserializes_api_payload() {
    let payload = r#"{
        "data": [
            {
                "id": "run_1234",
                "status": "COMPLETED",
                "taskIdentifier": "document-updater",
                "createdAt": "2025-01-15T10:30:00.000Z",
                "isTest": false
            },
            {
                "id": "run_5678",
                "status": "FAILED",
                "taskIdentifier": "other-task",
                "createdAt": "2025-01-16T08:00:00.000Z"
            }
        ],
        "pagination": { "next": null }
    }"#;

    let list: RunList = serde_json::from_str(payload).unwrap();
    assert_eq!(list.data.len(), 2);
    assert_eq!(list.data[0].id, "run_1234");
    assert_eq!(list.data[0].status, TriggerRunStatus::Completed);
    assert_eq!(list.data[0].task_identifier, "document-updater");
    assert_eq!(list.data[1].status, TriggerRunStatus::Failed);
    assert_eq!(list.data[1].created_at, "2025-01-16T08:00:00.000Z");
}

#[test]
fn test_document_updater_task_name() {
    assert_eq!(DOCUMENT_UPDATER_TASK, "document-updater");
}

#[test]
fn test_client_construction() {
    // Explicit construction keeps the secret out of the environment in tests.
    let _client = TriggerClient::new("tr_dev_secret", "http://127.0.0.1:0");
}

//! Library-level load/merge/write round trips through the filesystem.

use super::test_utils::Sandbox;
use cwmerge::document::{self, Configuration};
use cwmerge::error::DocumentError;
use cwmerge::merge::merge;
use serde_json::json;

#[test]
fn test_load_merge_write() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json(
        "a.json",
        &json!({
            "agent": {"metrics_collection_interval": 60},
            "metrics": {
                "append_dimensions": {"InstanceId": "${aws:InstanceId}"},
                "metrics_collected": {"disk": {"resources": ["/"], "measurement": ["used_percent"]}}
            }
        }),
    );
    let b = sandbox.write_json(
        "b.json",
        &json!({
            "agent": {"metrics_collection_interval": 10},
            "logs": {"logs_collected": {"files": {"collect_list": []}}},
            "metrics": {
                "append_dimensions": {"AutoScalingGroupName": "${aws:AutoScalingGroupName}"},
                "metrics_collected": {"disk": {"resources": ["/data"], "measurement": ["used_percent"]}}
            }
        }),
    );

    let first = document::load(&a).unwrap();
    let second = document::load(&b).unwrap();
    let outcome = merge(&first, &second);
    assert!(outcome.is_clean());

    let out = sandbox.path("merged.json");
    document::write(&outcome.config, &out).unwrap();

    let reloaded = document::load(&out).unwrap();
    assert_eq!(
        reloaded,
        Configuration::try_from(json!({
            "agent": {"metrics_collection_interval": 60},
            "metrics": {
                "append_dimensions": {
                    "InstanceId": "${aws:InstanceId}",
                    "AutoScalingGroupName": "${aws:AutoScalingGroupName}"
                },
                "metrics_collected": {"disk": {"resources": ["/", "/data"], "measurement": ["used_percent"]}}
            },
            "logs": {"logs_collected": {"files": {"collect_list": []}}}
        }))
        .unwrap()
    );
}

#[test]
fn test_load_reports_path_in_errors() {
    let sandbox = Sandbox::new();
    let path = sandbox.write_text("list.json", "[]");

    match document::load(&path) {
        Err(DocumentError::MalformedInput { path: reported, reason }) => {
            assert_eq!(reported, path);
            assert!(reason.contains("object"));
        }
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

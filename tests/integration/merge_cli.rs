//! End-to-end runs of the cwmerge binary.

use super::test_utils::{read_json, stderr, stdout, Sandbox};
use serde_json::json;

#[test]
fn test_merge_writes_output_and_reports_success() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json(
        "a.json",
        &json!({"metrics": {"namespace": "NS", "metrics_collected": {
            "cpu": {"measurement": ["cpu_usage_idle"]}
        }}}),
    );
    let b = sandbox.write_json(
        "b.json",
        &json!({"metrics": {"namespace": "NS", "metrics_collected": {
            "cpu": {"measurement": ["cpu_usage_idle", "cpu_usage_user"]},
            "mem": {"measurement": ["mem_used_percent"]}
        }}}),
    );
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&a, &b, &out]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("Merged configuration written to {}\n", out.display())
    );
    assert!(!stderr(&output).contains("Warning"));
    assert_eq!(
        read_json(&out),
        json!({"metrics": {"namespace": "NS", "metrics_collected": {
            "cpu": {"measurement": ["cpu_usage_idle", "cpu_usage_user"]},
            "mem": {"measurement": ["mem_used_percent"]}
        }}})
    );
}

#[test]
fn test_output_is_indented_and_ordered() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json("a.json", &json!({"agent": {"region": "us-east-1"}}));
    let b = sandbox.write_json("b.json", &json!({"metrics": {"namespace": "CWAgent"}}));
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&a, &b, &out]);
    assert!(output.status.success());

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        text,
        "{\n  \"agent\": {\n    \"region\": \"us-east-1\"\n  },\n  \"metrics\": {\n    \"namespace\": \"CWAgent\"\n  }\n}"
    );
}

#[test]
fn test_namespace_conflict_warns_on_stderr_and_succeeds() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json("a.json", &json!({"metrics": {"namespace": "N1"}}));
    let b = sandbox.write_json("b.json", &json!({"metrics": {"namespace": "N2"}}));
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&a, &b, &out]);

    assert!(output.status.success());
    assert!(stderr(&output)
        .contains("Warning: Different namespaces found. Using 'N1' from first config."));
    assert!(!stdout(&output).contains("Warning"));
    assert_eq!(read_json(&out), json!({"metrics": {"namespace": "N1"}}));
}

#[test]
fn test_missing_input_exits_with_error() {
    let sandbox = Sandbox::new();
    let b = sandbox.write_json("b.json", &json!({}));
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&sandbox.path("absent.json"), &b, &out]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("absent.json"));
    assert!(stderr(&output).contains("not found"));
    assert!(stdout(&output).is_empty());
    assert!(!out.exists());
}

#[test]
fn test_malformed_input_exits_with_error() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_text("a.json", "{\"metrics\": [");
    let b = sandbox.write_json("b.json", &json!({}));
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&a, &b, &out]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is not a valid configuration document"));
    assert!(!out.exists());
}

#[test]
fn test_non_utf8_input_is_reported_as_malformed() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json("a.json", &json!({}));
    let b = sandbox.write_bytes("b.json", b"{\"metrics\": \"\xff\"}");
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&a, &b, &out]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("is not a valid configuration document"), "stderr: {}", err);
    assert!(!err.contains("not found"), "stderr: {}", err);
    assert!(!out.exists());
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json("a.json", &json!({}));
    let b = sandbox.write_json("b.json", &json!({}));
    let out = sandbox.path("missing-dir/merged.json");

    let output = sandbox.run(&[&a, &b, &out]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error writing to output file"));
}

#[test]
fn test_shape_conflict_warns_by_default() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json(
        "a.json",
        &json!({"metrics": {"metrics_collected": {"cpu": {"totalcpu": true}}}}),
    );
    let b = sandbox.write_json(
        "b.json",
        &json!({"metrics": {"metrics_collected": {"cpu": ["cpu_usage_idle"]}}}),
    );
    let out = sandbox.path("merged.json");

    let output = sandbox.run(&[&a, &b, &out]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Structural conflict at 'metrics.metrics_collected.cpu'"));
    assert_eq!(
        read_json(&out),
        json!({"metrics": {"metrics_collected": {"cpu": {"totalcpu": true}}}})
    );
}

#[test]
fn test_strict_flag_turns_shape_conflict_into_failure() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json(
        "a.json",
        &json!({"metrics": {"metrics_collected": {"cpu": {"totalcpu": true}}}}),
    );
    let b = sandbox.write_json(
        "b.json",
        &json!({"metrics": {"metrics_collected": {"cpu": ["cpu_usage_idle"]}}}),
    );
    let out = sandbox.path("merged.json");

    let output = sandbox
        .command()
        .arg("--strict")
        .args([&a, &b, &out])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Structural conflict"));
    assert!(!out.exists());
}

#[test]
fn test_dry_run_prints_merged_document() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json(
        "a.json",
        &json!({"metrics": {"aggregation_dimensions": [["InstanceId"]]}}),
    );
    let b = sandbox.write_json(
        "b.json",
        &json!({"metrics": {"aggregation_dimensions": [["InstanceId"], ["ImageId", "InstanceType"]]}}),
    );
    let out = sandbox.path("merged.json");

    let output = sandbox
        .command()
        .arg("--dry-run")
        .args([&a, &b, &out])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!out.exists());
    let printed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        printed,
        json!({"metrics": {"aggregation_dimensions": [["InstanceId"], ["ImageId", "InstanceType"]]}})
    );
}

#[test]
fn test_merged_output_can_be_merged_again() {
    let sandbox = Sandbox::new();
    let a = sandbox.write_json("a.json", &json!({"metrics": {"metrics_collected": {"swap": ["swap_used"]}}}));
    let b = sandbox.write_json("b.json", &json!({"metrics": {"metrics_collected": {"swap": ["swap_free"]}}}));
    let c = sandbox.write_json("c.json", &json!({"metrics": {"metrics_collected": {"swap": ["swap_used", "swap_used_percent"]}}}));
    let ab = sandbox.path("ab.json");
    let abc = sandbox.path("abc.json");

    assert!(sandbox.run(&[&a, &b, &ab]).status.success());
    assert!(sandbox.run(&[&ab, &c, &abc]).status.success());

    assert_eq!(
        read_json(&abc),
        json!({"metrics": {"metrics_collected": {"swap": ["swap_used", "swap_free", "swap_used_percent"]}}})
    );
}

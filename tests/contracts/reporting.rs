//! Reporting structure contracts
//!
//! - Every distinct employee below the root is counted exactly once
//! - The root is never counted, even when a cycle leads back to it
//! - Resolution never mutates the directory

use crate::common::*;

fn count(env: &TestEnv, id: &str) -> u64 {
    let result = env.run(&["reports", id, "--json"]);
    assert_success!(result);
    result.json()["numberOfReports"]
        .as_u64()
        .expect("numberOfReports is a number")
}

#[test]
fn contract_shared_report_is_counted_once() {
    let env = TestEnv::seeded(ORG_CHART);
    // ken is reachable through grace and alan; dennis through ken
    assert_eq!(count(&env, "ada"), 5);
}

#[test]
fn contract_root_never_counts_itself() {
    let env = TestEnv::seeded(
        r#"[{"employeeId": "narcissus", "directReports": [{"employeeId": "narcissus"}]}]"#,
    );
    assert_eq!(count(&env, "narcissus"), 0);

    let env = TestEnv::seeded(CYCLE);
    for id in ["x", "y", "z"] {
        assert_eq!(count(&env, id), 2, "cycle member {id}");
    }
}

#[test]
fn contract_resolution_is_read_only() {
    let env = TestEnv::seeded(ORG_CHART);
    let before = std::fs::read_to_string(env.store_path()).unwrap();

    assert_eq!(count(&env, "ada"), 5);
    assert_eq!(count(&env, "ada"), 5);

    let after = std::fs::read_to_string(env.store_path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn contract_json_shape_is_stable() {
    let env = TestEnv::seeded(ORG_CHART);

    let result = env.run(&["reports", "dennis", "--json"]);
    assert_success!(result);
    assert_eq!(
        result.json(),
        serde_json::json!({
            "employee": {
                "employeeId": "dennis",
                "firstName": "Dennis",
                "lastName": "Ritchie",
                "position": "Developer I",
                "department": "Engineering",
                "directReports": []
            },
            "numberOfReports": 0
        })
    );
}

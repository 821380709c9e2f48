#[cfg(test)]
mod model_tests {
    use serde_json::json;

    use crate::models::{
        Artifact, ArtifactKind, ExecutionStats, ExecutionSummary, SessionSnapshot, Severity,
        TestCase, TestCaseInput, TestStatus, VerdictTone,
    };

    fn create_test_case(id: &str, status: TestStatus) -> TestCase {
        TestCase {
            id: id.to_string(),
            title: "Valid login".to_string(),
            preconditions: "User exists".to_string(),
            steps: vec![
                "Open app".to_string(),
                "Enter creds".to_string(),
                "Submit".to_string(),
            ],
            expected_result: "Dashboard shown".to_string(),
            priority: "High".to_string(),
            status,
            notes: String::new(),
            expanded: false,
        }
    }

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in TestStatus::ALL {
            assert_eq!(status.as_str().parse::<TestStatus>(), Ok(status));
        }
        assert_eq!("PASSED".parse::<TestStatus>(), Ok(TestStatus::Pass));
        assert!("done".parse::<TestStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(TestStatus::Blocked).unwrap(),
            json!("blocked")
        );
        assert!(serde_json::from_value::<TestStatus>(json!("unknown")).is_err());
    }

    #[test]
    fn test_only_fail_and_blocked_reveal_details() {
        let revealing: Vec<_> = TestStatus::ALL
            .into_iter()
            .filter(TestStatus::reveals_details)
            .collect();
        assert_eq!(revealing, vec![TestStatus::Fail, TestStatus::Blocked]);
    }

    #[test]
    fn test_input_defaults_missing_fields() {
        let input: TestCaseInput = serde_json::from_value(json!({"title": "Only title"})).unwrap();
        assert_eq!(input.title, "Only title");
        assert!(input.id.is_empty());
        assert!(input.steps.is_empty());
        assert!(input.expected_result.is_empty());
    }

    #[test]
    fn test_input_ignores_unknown_fields() {
        let input: TestCaseInput = serde_json::from_value(json!({
            "id": "TC-002",
            "type": "Negative",
            "expectedResult": "Error shown"
        }))
        .unwrap();
        assert_eq!(input.id, "TC-002");
        assert_eq!(input.expected_result, "Error shown");
    }

    #[test]
    fn test_from_input_resets_execution_fields() {
        let case = TestCase::from_input(TestCaseInput {
            id: "TC-001".to_string(),
            title: "Valid login".to_string(),
            ..TestCaseInput::default()
        });
        assert_eq!(case.status, TestStatus::Pending);
        assert!(case.notes.is_empty());
        assert!(!case.expanded);
    }

    #[test]
    fn test_bug_draft_prefills_from_case() {
        let mut case = create_test_case("TC-001", TestStatus::Fail);
        case.notes = "crashes on iOS".to_string();

        let draft = case.bug_draft();
        assert_eq!(draft.title, "[FAIL] Valid login");
        assert_eq!(draft.steps, "1. Open app\n2. Enter creds\n3. Submit");
        assert_eq!(draft.expected, "Dashboard shown");
        assert_eq!(draft.actual, "crashes on iOS");
        assert_eq!(draft.severity, Severity::Medium);
    }

    #[test]
    fn test_stats_count_each_status() {
        let cases = vec![
            create_test_case("TC-001", TestStatus::Pass),
            create_test_case("TC-002", TestStatus::Fail),
            create_test_case("TC-003", TestStatus::Pending),
            create_test_case("TC-004", TestStatus::Pass),
        ];
        let stats = ExecutionStats::from_cases(&cases);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.pass, 2);
        assert_eq!(stats.fail, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.count(TestStatus::Blocked), 0);
        assert_eq!(stats.executed(), 3);
        assert_eq!(stats.progress_percent(), 75);
        assert_eq!(stats.pass_rate_percent(), 50);
    }

    #[test]
    fn test_stats_of_empty_set_are_zero() {
        let stats = ExecutionStats::from_cases(&[]);
        assert_eq!(stats, ExecutionStats::default());
        assert_eq!(stats.progress_fraction(), 0.0);
        assert_eq!(stats.progress_percent(), 0);
        assert_eq!(stats.pass_rate_percent(), 0);
    }

    #[test]
    fn test_progress_percent_rounds_to_nearest() {
        let cases = vec![
            create_test_case("TC-001", TestStatus::Pass),
            create_test_case("TC-002", TestStatus::Pending),
            create_test_case("TC-003", TestStatus::Pending),
        ];
        assert_eq!(ExecutionStats::from_cases(&cases).progress_percent(), 33);

        let cases = vec![
            create_test_case("TC-001", TestStatus::Skipped),
            create_test_case("TC-002", TestStatus::Blocked),
            create_test_case("TC-003", TestStatus::Pending),
        ];
        assert_eq!(ExecutionStats::from_cases(&cases).progress_percent(), 67);
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let snapshot = SessionSnapshot {
            feature: "Login".to_string(),
            test_cases: vec![create_test_case("TC-001", TestStatus::Pending)],
        };
        let value = serde_json::to_value(&snapshot).unwrap();

        assert!(value.get("testCases").is_some());
        assert_eq!(value["testCases"][0]["expectedResult"], "Dashboard shown");
        assert_eq!(value["testCases"][0]["status"], "pending");
    }

    #[test]
    fn test_snapshot_tolerates_missing_execution_fields() {
        let snapshot: SessionSnapshot = serde_json::from_value(json!({
            "feature": "Login",
            "testCases": [{"id": "TC-001", "title": "Valid login"}]
        }))
        .unwrap();

        let case = &snapshot.test_cases[0];
        assert_eq!(case.status, TestStatus::Pending);
        assert!(case.steps.is_empty());
        assert!(!case.expanded);
    }

    #[test]
    fn test_verdict_tone_classification() {
        assert_eq!(VerdictTone::classify("Pass"), VerdictTone::Positive);
        assert_eq!(VerdictTone::classify("Fail"), VerdictTone::Negative);
        assert_eq!(VerdictTone::classify("Pass / Fail"), VerdictTone::Negative);
        assert_eq!(VerdictTone::classify("Conditional"), VerdictTone::Conditional);
        assert_eq!(
            VerdictTone::classify("Conditional Pass"),
            VerdictTone::Positive
        );
    }

    #[test]
    fn test_summary_ignores_none_blocker_placeholder() {
        let summary: ExecutionSummary = serde_json::from_value(json!({
            "verdict": "Pass",
            "blockers": ["None"]
        }))
        .unwrap();
        assert!(summary.real_blockers().is_empty());

        let summary: ExecutionSummary = serde_json::from_value(json!({
            "blockers": ["Payment gateway down"]
        }))
        .unwrap();
        assert_eq!(summary.real_blockers().len(), 1);
    }

    #[test]
    fn test_artifact_kind_parses_from_slug_or_key() {
        assert_eq!(
            "bug-report".parse::<ArtifactKind>(),
            Ok(ArtifactKind::BugReport)
        );
        assert_eq!("testReport".parse::<ArtifactKind>(), Ok(ArtifactKind::TestNotes));
        assert!("poem".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn test_artifact_from_value_requires_root_key() {
        let value = json!({"review": {"overallScore": "8", "verdict": "Pass"}});
        let artifact = Artifact::from_value(ArtifactKind::Review, &value).unwrap();
        match artifact {
            Artifact::Review(review) => {
                assert_eq!(review.overall_score, Some(8.0));
                assert_eq!(review.verdict, "Pass");
            }
            other => panic!("unexpected artifact: {other:?}"),
        }

        assert!(Artifact::from_value(ArtifactKind::TestPlan, &value).is_none());
    }

    #[test]
    fn test_generated_test_cases_keep_type() {
        let value = json!({"testCases": [{"id": "TC-001", "type": "Functional"}]});
        let Some(Artifact::TestCases(cases)) =
            Artifact::from_value(ArtifactKind::TestCases, &value)
        else {
            panic!("expected test cases");
        };
        assert_eq!(cases[0].case_type, "Functional");
    }
}

//! End-to-end editing-session tests: editor, import/export, catalog.
mod common;

use chrono::{TimeZone, Utc};
use common::*;
use stepflow::prelude::*;

#[test]
fn build_simulate_and_undo_through_the_editor() {
    let mut editor = WorkflowEditor::new();
    let start = editor.add_step(StepKind::Start);
    let task = editor.add_step(StepKind::Task);
    let end = editor.add_step(StepKind::End);
    editor.connect(&start, &task);
    editor.connect(&task, &end);

    let report = editor.run_simulation().clone();
    assert!(report.is_clean());
    assert_eq!(report.trace.len(), 3);
    assert!(editor.annotations().is_empty());

    // Five edits so far; undo drops the last connection.
    assert!(editor.undo());
    assert_eq!(editor.graph().connections().len(), 1);
    assert!(editor.redo());
    assert_eq!(editor.graph().connections().len(), 2);
}

#[test]
fn add_step_assigns_palette_defaults() {
    let mut editor = WorkflowEditor::new();
    let first = editor.add_step(StepKind::Task);
    let second = editor.add_step(StepKind::Approval);

    assert_eq!(first, "step-1");
    assert_eq!(second, "step-2");

    let first = editor.graph().step("step-1").expect("step should exist");
    assert_eq!(first.position, Position::new(100.0, 100.0));
    assert_eq!(first.label(), Some("TASK"));

    let second = editor.graph().step("step-2").expect("step should exist");
    assert_eq!(second.position, Position::new(140.0, 130.0));
    assert_eq!(second.label(), Some("APPROVAL"));
}

#[test]
fn simulation_creates_no_history_entry() {
    let mut editor = WorkflowEditor::new();
    editor.add_step(StepKind::Start);
    editor.add_step(StepKind::Task);

    editor.run_simulation();

    // Two edits happened; a single undo lands on the first and a second
    // one is refused. If simulation had recorded, a third entry would
    // exist.
    assert!(editor.undo());
    assert_eq!(editor.graph().steps().len(), 1);
    assert!(!editor.undo());
}

#[test]
fn undo_clears_selection_report_and_annotations() {
    let mut editor = WorkflowEditor::new();
    editor.add_step(StepKind::Start);
    // No connection: the end step is unreachable.
    let end = editor.add_step(StepKind::End);

    editor.select(Some(end.clone()));
    editor.run_simulation();
    assert!(editor.report().is_some());
    assert!(!editor.annotations().is_empty());
    assert_eq!(editor.selection(), Some(end.as_str()));

    assert!(editor.undo());
    assert!(editor.report().is_none());
    assert!(editor.annotations().is_empty());
    assert_eq!(editor.selection(), None);
}

#[test]
fn unreachable_end_is_annotated_critical() {
    let mut editor = WorkflowEditor::new();
    let start = editor.add_step(StepKind::Start);
    let task = editor.add_step(StepKind::Task);
    let end = editor.add_step(StepKind::End);
    editor.connect(&start, &task);

    editor.run_simulation();

    let annotation = editor.annotations().get(&end).expect("end should be annotated");
    assert_eq!(annotation.severity, Severity::Critical);
    assert_eq!(annotation.messages, vec!["Unreachable from Start node".to_string()]);
    assert!(editor.annotations().get(&task).is_none());
}

#[test]
fn remove_step_cascades_its_connections() {
    let mut editor = WorkflowEditor::new();
    let start = editor.add_step(StepKind::Start);
    let task = editor.add_step(StepKind::Task);
    let end = editor.add_step(StepKind::End);
    editor.connect(&start, &task);
    editor.connect(&task, &end);

    assert!(editor.remove_step(&task));
    assert!(editor.graph().step(&task).is_none());
    assert!(editor.graph().connections().is_empty());
    assert!(!editor.remove_step(&task));
}

#[test]
fn auto_layout_is_undoable() {
    let mut editor = WorkflowEditor::new();
    let start = editor.add_step(StepKind::Start);
    let end = editor.add_step(StepKind::End);
    editor.connect(&start, &end);

    let before = editor.graph().step(&start).map(|s| s.position);
    editor.auto_layout();
    let after = editor.graph().step(&start).map(|s| s.position);
    assert_ne!(before, after);
    assert_eq!(after, Some(Position::new(150.0, 80.0)));

    assert!(editor.undo());
    assert_eq!(editor.graph().step(&start).map(|s| s.position), before);
}

#[test]
fn import_accepts_top_level_and_nested_shapes() {
    let top_level = r#"{
        "nodes": [
            {"id": "a", "type": "start", "position": {"x": 10.0, "y": 20.0}, "data": {"label": "Start"}},
            {"id": "b", "type": "end", "data": {"label": "End"}}
        ],
        "edges": [{"source": "a", "target": "b"}]
    }"#;

    let mut editor = WorkflowEditor::new();
    editor.import_json(top_level).expect("import should succeed");
    assert_eq!(editor.graph().steps().len(), 2);
    assert_eq!(editor.graph().connections().len(), 1);
    let start = editor.graph().step("a").expect("step should exist");
    assert_eq!(start.kind, StepKind::Start);
    assert_eq!(start.position, Position::new(10.0, 20.0));

    let nested = r#"{"workflow": {
        "nodes": [{"id": "x", "type": "task", "data": {"label": "Only"}}],
        "edges": []
    }}"#;

    editor.import_json(nested).expect("import should succeed");
    assert_eq!(editor.graph().steps().len(), 1);
    assert_eq!(editor.graph().step("x").map(|s| s.kind), Some(StepKind::Task));
}

#[test]
fn rejected_import_changes_nothing() {
    let mut editor = WorkflowEditor::new();
    editor.add_step(StepKind::Task);

    let error = editor.import_json("{}").expect_err("import should fail");
    assert!(matches!(error, ImportError::InvalidStructure));
    assert_eq!(error.to_string(), "Invalid workflow file structure");

    let error = editor.import_json("not json").expect_err("import should fail");
    assert!(matches!(error, ImportError::JsonParse(_)));

    // The session still holds the single step and its single history
    // entry.
    assert_eq!(editor.graph().steps().len(), 1);
    assert!(!editor.can_undo());
}

#[test]
fn import_records_one_history_entry() {
    let document = r#"{"nodes": [{"id": "a", "type": "start"}], "edges": []}"#;

    let mut editor = WorkflowEditor::new();
    editor.import_json(document).expect("import should succeed");
    assert!(!editor.can_undo());

    editor.add_step(StepKind::End);
    assert!(editor.undo());
    assert_eq!(editor.graph().steps().len(), 1);
    assert!(editor.graph().step("a").is_some());
}

#[test]
fn add_step_skips_ids_already_present() {
    let document = r#"{"nodes": [{"id": "step-1", "type": "start"}], "edges": []}"#;

    let mut editor = WorkflowEditor::new();
    editor.import_json(document).expect("import should succeed");

    let id = editor.add_step(StepKind::Task);
    assert_eq!(id, "step-2");
}

#[test]
fn export_round_trips_and_names_the_file() {
    let mut editor = WorkflowEditor::new();
    let start = editor.add_step(StepKind::Start);
    let end = editor.add_step(StepKind::End);
    editor.connect(&start, &end);
    editor.set_attribute(&end, "label", serde_json::json!("Done"));

    let exported_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 45).unwrap();
    let json = editor.export_json(exported_at).expect("export should succeed");
    assert!(json.contains("\"exportedAt\": \"2026-08-06T12:30:45.000Z\""));

    assert_eq!(
        editor.export_file_name(exported_at),
        "workflow-2026-08-06T12-30-45-000Z.json"
    );

    let mut reimported = WorkflowEditor::new();
    reimported.import_json(&json).expect("reimport should succeed");
    assert_eq!(reimported.graph().steps().len(), 2);
    assert_eq!(reimported.graph().connections().len(), 1);
    let end = reimported.graph().step(&end).expect("step should exist");
    assert_eq!(end.kind, StepKind::End);
    assert_eq!(end.label(), Some("Done"));
    assert_eq!(
        end.position,
        editor.graph().step(&end.id).map(|s| s.position).unwrap()
    );
}

#[test]
fn move_step_is_recorded_and_undoable() {
    let mut editor = WorkflowEditor::new();
    let task = editor.add_step(StepKind::Task);

    assert!(editor.move_step(&task, Position::new(300.0, 40.0)));
    assert_eq!(
        editor.graph().step(&task).map(|s| s.position),
        Some(Position::new(300.0, 40.0))
    );

    assert!(editor.undo());
    assert_eq!(
        editor.graph().step(&task).map(|s| s.position),
        Some(Position::new(100.0, 100.0))
    );

    assert!(!editor.move_step("missing", Position::new(0.0, 0.0)));
}

#[test]
fn custom_catalogs_replace_the_builtin_one() {
    let catalog = AutomationCatalog::new(vec![Automation {
        id: "archive_record".to_string(),
        label: "Archive Record".to_string(),
        params: vec!["retention".to_string()],
    }]);

    let editor = WorkflowEditor::with_catalog(catalog);
    assert!(editor.catalog().find("send_email").is_none());
    assert_eq!(
        editor.catalog().find("archive_record").map(|a| a.label.as_str()),
        Some("Archive Record")
    );
}

#[test]
fn builtin_catalog_lists_actions_in_order() {
    let editor = WorkflowEditor::new();
    let catalog = editor.catalog();

    let ids: Vec<&str> = catalog
        .automations()
        .iter()
        .map(|automation| automation.id.as_str())
        .collect();
    assert_eq!(ids, vec!["send_email", "generate_doc"]);

    let send_email = catalog.find("send_email").expect("automation should exist");
    assert_eq!(send_email.label, "Send Email");
    assert_eq!(send_email.params, vec!["to".to_string(), "subject".to_string()]);
    assert!(catalog.find("teleport").is_none());
}

#[test]
fn disconnect_removes_every_matching_pair() {
    let mut editor = WorkflowEditor::new();
    let start = editor.add_step(StepKind::Start);
    let end = editor.add_step(StepKind::End);
    editor.connect(&start, &end);
    editor.connect(&start, &end);

    assert_eq!(editor.disconnect(&start, &end), 2);
    assert!(editor.graph().connections().is_empty());
    assert_eq!(editor.disconnect(&start, &end), 0);
}

#[test]
fn simulation_of_fixture_graphs_matches_direct_calls() {
    // The standalone simulate() and the editor agree on the same graph.
    let direct = simulate(&linear_flow());

    let mut editor = WorkflowEditor::new();
    editor
        .import_json(
            r#"{"nodes": [
                {"id": "n1", "type": "start", "data": {"label": "Start"}},
                {"id": "n2", "type": "task", "data": {"label": "Review request"}},
                {"id": "n3", "type": "end", "data": {"label": "End"}}
            ],
            "edges": [
                {"source": "n1", "target": "n2"},
                {"source": "n2", "target": "n3"}
            ]}"#,
        )
        .expect("import should succeed");
    let through_editor = editor.run_simulation().clone();

    assert_eq!(direct.trace, through_editor.trace);
    assert_eq!(direct.errors, through_editor.errors);
}

#[cfg(test)]
mod model_tests {
    use crate::models::{
        ParentType, Phase, PlannerTaskMeta, PlanningProgressSummary, ProgressCounts,
        ProjectDetail, Task, TaskStatus, PLANNER_META_PREFIX,
    };

    #[test]
    fn test_task_decodes_numeric_ids_and_nulls() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 42,
                "projectPhaseId": 7,
                "name": null,
                "description": null,
                "startsOn": null,
                "position": null,
                "status": null,
                "active": null,
                "objective": null
            }"#,
        )
        .expect("Failed to decode task");

        assert_eq!(task.id, "42");
        assert_eq!(task.project_phase_id, "7");
        assert_eq!(task.name, "");
        assert_eq!(task.description, None);
        assert_eq!(task.position, 0);
        assert_eq!(task.status, TaskStatus::Planejada);
        assert!(task.active);
        assert!(task.objective.is_empty());
    }

    #[test]
    fn test_task_requires_an_id() {
        let result: Result<Task, _> = serde_json::from_str(r#"{ "name": "No id" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_phase_id_decodes_as_empty() {
        let task: Task =
            serde_json::from_str(r#"{ "id": "t1" }"#).expect("Failed to decode task");
        assert_eq!(task.project_phase_id, "");
    }

    #[test]
    fn test_phase_defaults() {
        let phase: Phase =
            serde_json::from_str(r#"{ "id": "p1" }"#).expect("Failed to decode phase");

        assert_eq!(phase, Phase::new("p1", ""));
        assert!(phase.active);
    }

    #[test]
    fn test_legacy_statuses_normalize() {
        let cases = [
            ("planejada", TaskStatus::Planejada),
            ("pendente", TaskStatus::Planejada),
            ("iniciada", TaskStatus::Iniciada),
            ("em_andamento", TaskStatus::Iniciada),
            ("Concluida", TaskStatus::Concluida),
            ("cancelada", TaskStatus::Cancelada),
            ("", TaskStatus::Planejada),
            ("archived", TaskStatus::Planejada),
        ];

        for (raw, expected) in cases {
            let json = format!(r#"{{ "id": "t", "status": "{raw}" }}"#);
            let task: Task = serde_json::from_str(&json).expect("Failed to decode task");
            assert_eq!(task.status, expected, "status {raw:?}");
        }
    }

    #[test]
    fn test_status_serializes_canonical_string() {
        let task = Task {
            status: TaskStatus::Iniciada,
            ..Task::new("t1", "p1", "Build")
        };
        let value = serde_json::to_value(&task).expect("Failed to encode task");

        assert_eq!(value["status"], "iniciada");
        assert_eq!(value["projectPhaseId"], "p1");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TaskStatus::Concluida.label(), "Completed");
        assert!(TaskStatus::Concluida.is_completed());
        assert!(!TaskStatus::Iniciada.is_completed());
        assert!(TaskStatus::Cancelada.is_cancelled());
    }

    #[test]
    fn test_meta_round_trips() {
        let metas = [
            PlannerTaskMeta::Subphase,
            PlannerTaskMeta::nested(ParentType::Subphase, "s1"),
            PlannerTaskMeta::nested(ParentType::Task, "t1"),
            PlannerTaskMeta::Task {
                parent_type: ParentType::Phase,
                parent_id: None,
            },
        ];

        for meta in metas {
            let objective = meta.encode().expect("Failed to encode meta");
            assert!(objective.starts_with(PLANNER_META_PREFIX));
            assert_eq!(PlannerTaskMeta::decode(&objective), Some(meta));
        }
    }

    #[test]
    fn test_meta_defaults_missing_parent_type_to_phase() {
        let meta = PlannerTaskMeta::decode(r#"__planner_meta__:{"kind":"task"}"#);
        assert_eq!(
            meta,
            Some(PlannerTaskMeta::Task {
                parent_type: ParentType::Phase,
                parent_id: None,
            })
        );
    }

    #[test]
    fn test_meta_accepts_numeric_parent_id() {
        let meta = PlannerTaskMeta::decode(
            r#"__planner_meta__:{"kind":"task","parentType":"subphase","parentId":10}"#,
        )
        .expect("Failed to decode numeric parentId");
        assert_eq!(meta.parent_task_ref(), Some((ParentType::Subphase, "10")));

        let meta = PlannerTaskMeta::decode(
            r#"__planner_meta__:{"kind":"task","parentType":"task","parentId":null}"#,
        );
        assert_eq!(
            meta,
            Some(PlannerTaskMeta::Task {
                parent_type: ParentType::Task,
                parent_id: None,
            })
        );
    }

    #[test]
    fn test_malformed_meta_is_not_decoded() {
        for objective in [
            "__planner_meta__:",
            "__planner_meta__:{\"kind\":\"milestone\"}",
            "__planner_meta__:[1,2]",
            " __planner_meta__:{\"kind\":\"subphase\"}",
        ] {
            assert_eq!(PlannerTaskMeta::decode(objective), None, "{objective}");
        }
        assert!(PlannerTaskMeta::is_tagged("__planner_meta__:{oops"));
    }

    #[test]
    fn test_parent_task_ref() {
        assert_eq!(
            PlannerTaskMeta::nested(ParentType::Task, "t1").parent_task_ref(),
            Some((ParentType::Task, "t1"))
        );
        assert_eq!(
            PlannerTaskMeta::nested(ParentType::Phase, "p1").parent_task_ref(),
            None
        );
        assert_eq!(
            PlannerTaskMeta::nested(ParentType::Subphase, "").parent_task_ref(),
            None
        );
        assert_eq!(PlannerTaskMeta::Subphase.parent_task_ref(), None);
    }

    #[test]
    fn test_objective_text_hides_meta() {
        let tagged = Task {
            objective: PlannerTaskMeta::Subphase.encode().expect("Failed to encode meta"),
            ..Task::new("s1", "p1", "Design")
        };
        let plain = Task {
            objective: "Ship it".to_string(),
            ..Task::new("t1", "p1", "Launch")
        };

        assert_eq!(tagged.objective_text(), None);
        assert_eq!(tagged.meta(), Some(PlannerTaskMeta::Subphase));
        assert_eq!(plain.objective_text(), Some("Ship it"));
        assert_eq!(plain.meta(), None);
    }

    #[test]
    fn test_progress_counts_arithmetic() {
        let total: ProgressCounts = [ProgressCounts::new(2, 1), ProgressCounts::new(3, 3)]
            .into_iter()
            .sum();

        assert_eq!(total, ProgressCounts::new(5, 4));
        assert_eq!(total.pending_tasks(), 1);
        assert_eq!(total.percent(), 80);
    }

    #[test]
    fn test_summary_wire_names() {
        let mut summary = PlanningProgressSummary::default();
        summary.phase_percent_by_id.insert("p1".to_string(), 40);
        summary.task_percent_by_id.insert("t1".to_string(), 100);

        let value = serde_json::to_value(&summary).expect("Failed to encode summary");
        assert_eq!(value["phasePercentByID"]["p1"], 40);
        assert_eq!(value["taskPercentByID"]["t1"], 100);
        assert_eq!(summary.phase_percent("missing"), 0);
    }

    #[test]
    fn test_project_from_reader_rejects_invalid_json() {
        let result = ProjectDetail::from_reader("{ not json".as_bytes());
        assert!(result.is_err());
    }
}

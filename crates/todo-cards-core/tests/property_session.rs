//! Randomized session checks: the controller against a plain `Vec` model.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use todo_cards_core::{AddOutcome, CardId, DisplayMode, RawTaskInput, TodoController, ValidationError};

#[derive(Clone, Debug)]
enum SessionOp {
    Add {
        title: String,
        description: String,
        priority: bool,
    },
    Delete(usize),
    Sort,
    ShowHighPriority,
    Back,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ModelTask {
    title: String,
    description: String,
    priority: bool,
}

/// Small alphabet with optional padding so trimmed duplicates and empty fields
/// come up often.
fn title_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        1 => Just("   ".to_owned()),
        8 => "[ ]{0,1}[a-d]{1,2}[ ]{0,1}",
    ]
}

fn description_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(" \t".to_owned()),
        6 => "[ ]{0,1}[a-c]{1,3}( [a-c]{1,2}){0,1}[ ]{0,1}",
    ]
}

fn operation_strategy() -> impl Strategy<Value = SessionOp> {
    prop_oneof![
        5 => (title_strategy(), description_strategy(), any::<bool>()).prop_map(
            |(title, description, priority)| SessionOp::Add {
                title,
                description,
                priority,
            }
        ),
        2 => any::<usize>().prop_map(SessionOp::Delete),
        1 => Just(SessionOp::Sort),
        1 => Just(SessionOp::ShowHighPriority),
        1 => Just(SessionOp::Back),
    ]
}

fn unique_tasks_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..16)
        .prop_map(|tasks| tasks.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn store_titles(controller: &TodoController) -> Vec<String> {
    controller
        .store()
        .list_all()
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}

fn visible_titles(controller: &TodoController) -> Vec<String> {
    controller
        .board()
        .visible_cards()
        .map(|card| card.title().to_owned())
        .collect()
}

fn check_against_model(
    controller: &TodoController,
    model: &[ModelTask],
    mode: DisplayMode,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(controller.mode(), mode);
    prop_assert!(controller.board().mirrors(controller.store(), controller.mode()));

    let stored: Vec<ModelTask> = controller
        .store()
        .list_all()
        .iter()
        .map(|task| ModelTask {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
        })
        .collect();
    prop_assert_eq!(stored.as_slice(), model);

    let expected_visible: Vec<String> = model
        .iter()
        .filter(|task| mode == DisplayMode::Normal || task.priority)
        .map(|task| task.title.clone())
        .collect();
    prop_assert_eq!(visible_titles(controller), expected_visible);
    Ok(())
}

fn add_all(controller: &mut TodoController, tasks: &[(String, bool)]) {
    for (title, priority) in tasks {
        let outcome = controller.add(&RawTaskInput::new(title.as_str(), "details", *priority));
        assert!(matches!(outcome, AddOutcome::Added(_)), "{title} was not added");
    }
}

proptest! {
    #[test]
    fn random_sessions_match_vec_model(ops in prop::collection::vec(operation_strategy(), 1..48)) {
        let mut controller = TodoController::new();
        let mut model: Vec<ModelTask> = Vec::new();
        let mut mode = DisplayMode::Normal;

        for op in ops {
            match op {
                SessionOp::Add { title, description, priority } => {
                    let outcome = controller.add(&RawTaskInput::new(title.as_str(), description.as_str(), priority));
                    let (title, description) = (title.trim(), description.trim());
                    match outcome {
                        AddOutcome::Unavailable => prop_assert_eq!(mode, DisplayMode::PriorityOnly),
                        AddOutcome::Rejected(errors) => {
                            prop_assert_eq!(mode, DisplayMode::Normal);
                            prop_assert_eq!(errors.contains(ValidationError::EmptyTitle), title.is_empty());
                            prop_assert_eq!(errors.contains(ValidationError::EmptyDescription), description.is_empty());
                            let duplicate = model.iter().any(|task| task.title == title);
                            prop_assert_eq!(errors.contains(ValidationError::DuplicateTitle), duplicate);
                            let indicators = controller.indicators();
                            prop_assert_eq!(indicators.title_empty, title.is_empty());
                            prop_assert_eq!(indicators.description_empty, description.is_empty());
                            prop_assert_eq!(indicators.title_duplicate, duplicate);
                        }
                        AddOutcome::Added(card) => {
                            prop_assert_eq!(mode, DisplayMode::Normal);
                            prop_assert!(!title.is_empty() && !description.is_empty());
                            prop_assert!(model.iter().all(|task| task.title != title));
                            prop_assert_eq!(controller.board().removal_key(card), Some(title));
                            model.push(ModelTask {
                                title: title.to_owned(),
                                description: description.to_owned(),
                                priority,
                            });
                            let titles = store_titles(&controller);
                            prop_assert_eq!(titles.iter().filter(|stored| *stored == title).count(), 1);
                            prop_assert_eq!(titles.last().map(String::as_str), Some(title));
                        }
                    }
                }
                SessionOp::Delete(pick) => {
                    let visible: Vec<CardId> = controller.board().visible_cards().map(|card| card.id()).collect();
                    if visible.is_empty() {
                        continue;
                    }
                    let card = visible[pick % visible.len()];
                    let title = controller.board().removal_key(card).map(str::to_owned).expect("card has a key");
                    prop_assert!(controller.delete(card));
                    model.retain(|task| task.title != title);
                    prop_assert!(controller.board().card(card).is_none());
                }
                SessionOp::Sort => {
                    let sorted = controller.sort();
                    prop_assert_eq!(sorted, mode == DisplayMode::Normal);
                    if sorted {
                        model.sort_by(|a, b| a.title.cmp(&b.title));
                    }
                }
                SessionOp::ShowHighPriority => {
                    prop_assert_eq!(controller.show_high_priority(), mode == DisplayMode::Normal);
                    mode = DisplayMode::PriorityOnly;
                }
                SessionOp::Back => {
                    prop_assert_eq!(controller.back(), mode == DisplayMode::PriorityOnly);
                    mode = DisplayMode::Normal;
                }
            }
            check_against_model(&controller, &model, mode)?;
        }
    }

    #[test]
    fn unique_titles_are_appended_in_insertion_order(tasks in unique_tasks_strategy()) {
        let mut controller = TodoController::new();
        for (index, (title, priority)) in tasks.iter().enumerate() {
            let outcome = controller.add(&RawTaskInput::new(title.as_str(), "details", *priority));
            prop_assert!(matches!(outcome, AddOutcome::Added(_)));
            let titles = store_titles(&controller);
            prop_assert_eq!(titles.len(), index + 1);
            prop_assert_eq!(&titles[index], title);
        }
        let expected: Vec<String> = tasks.iter().map(|(title, _)| title.clone()).collect();
        prop_assert_eq!(store_titles(&controller), expected);
    }

    #[test]
    fn removal_keeps_relative_order_of_the_rest(tasks in unique_tasks_strategy(), pick in any::<usize>()) {
        prop_assume!(!tasks.is_empty());
        let mut controller = TodoController::new();
        add_all(&mut controller, &tasks);

        let victim = &tasks[pick % tasks.len()].0;
        let card = controller.visible_card_for(victim).expect("card shown");
        prop_assert!(controller.delete(card));

        let expected: Vec<String> = tasks
            .iter()
            .map(|(title, _)| title.clone())
            .filter(|title| title != victim)
            .collect();
        prop_assert_eq!(store_titles(&controller), expected.clone());
        prop_assert_eq!(visible_titles(&controller), expected);
    }

    #[test]
    fn sorting_is_ordered_and_idempotent(tasks in unique_tasks_strategy()) {
        let mut controller = TodoController::new();
        add_all(&mut controller, &tasks);

        prop_assert!(controller.sort());
        let once = store_titles(&controller);
        prop_assert!(once.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(visible_titles(&controller), once.clone());

        prop_assert!(controller.sort());
        prop_assert_eq!(store_titles(&controller), once);
        prop_assert!(controller.board().mirrors(controller.store(), controller.mode()));
    }

    #[test]
    fn priority_filter_is_a_pure_view_transform(tasks in unique_tasks_strategy(), toggles in 1usize..6) {
        let mut controller = TodoController::new();
        add_all(&mut controller, &tasks);
        let before = store_titles(&controller);
        let priority_titles: Vec<String> = tasks
            .iter()
            .filter(|(_, priority)| *priority)
            .map(|(title, _)| title.clone())
            .collect();

        for _ in 0..toggles {
            prop_assert!(controller.show_high_priority());
            prop_assert_eq!(visible_titles(&controller), priority_titles.clone());
            prop_assert_eq!(store_titles(&controller), before.clone());

            prop_assert!(controller.back());
            prop_assert_eq!(visible_titles(&controller), before.clone());
            prop_assert_eq!(store_titles(&controller), before.clone());
        }
    }
}

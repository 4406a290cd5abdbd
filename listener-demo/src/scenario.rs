//! Scenario runner
//!
//! Builds one `Listener` per configured label, then replays the scenario
//! steps against a fresh `ListenerRegistry`. Each dispatch step is recorded
//! with the labels of the listeners it fired.

use crate::config::{ScenarioConfig, StepAction};
use listener_registry::{Listener, ListenerRegistry};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use thiserror::Error;

/// Errors found while validating a scenario
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("listener '{0}' is defined more than once")]
    DuplicateListener(String),

    #[error("step {step}: unknown listener '{name}'")]
    UnknownListener { step: usize, name: String },

    #[error("step {step}: '{action}' requires a listener")]
    MissingListener { step: usize, action: String },
}

/// Outcome of one dispatch step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub event: String,
    /// Labels of the listeners invoked, in invocation order
    pub fired: Vec<String>,
}

/// Everything a scenario run dispatched
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub dispatches: Vec<DispatchOutcome>,
}

impl ScenarioReport {
    pub fn total_invocations(&self) -> usize {
        self.dispatches.iter().map(|d| d.fired.len()).sum()
    }
}

/// Validate and run a scenario against a new registry
pub fn run(config: &ScenarioConfig) -> Result<ScenarioReport, ScenarioError> {
    validate(config)?;

    let registry = ListenerRegistry::new();
    let fired: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let listeners: HashMap<&str, Listener> = config
        .listeners
        .iter()
        .map(|def| {
            let label = def.name.clone();
            let message = def.message().to_string();
            let fired = Rc::clone(&fired);
            let listener = Listener::new(move || {
                println!("  {}", message);
                fired.borrow_mut().push(label.clone());
            });
            (def.name.as_str(), listener)
        })
        .collect();

    let mut report = ScenarioReport::default();

    for (index, step) in config.steps.iter().enumerate() {
        match step.action {
            StepAction::Add | StepAction::Remove => {
                // Labels were checked by validate()
                let Some((name, listener)) = step
                    .listener
                    .as_deref()
                    .and_then(|name| listeners.get(name).map(|l| (name, l)))
                else {
                    continue;
                };

                log::info!(
                    "step {}: {} '{}' on '{}'",
                    index + 1,
                    step.action.as_str(),
                    name,
                    step.event
                );
                if step.action == StepAction::Add {
                    registry.add_listener(&step.event, listener);
                } else {
                    registry.remove_listener(&step.event, listener);
                }
            }
            StepAction::Dispatch => {
                log::info!("step {}: dispatch '{}'", index + 1, step.event);
                println!("dispatch '{}':", step.event);

                registry.dispatch(&step.event);

                let outcome = DispatchOutcome {
                    event: step.event.clone(),
                    fired: fired.borrow_mut().drain(..).collect(),
                };
                println!("  -> {} invocation(s)", outcome.fired.len());
                report.dispatches.push(outcome);
            }
        }
    }

    log::debug!("Registry after scenario: {:?}", registry);
    Ok(report)
}

/// Check listener labels before anything runs
fn validate(config: &ScenarioConfig) -> Result<(), ScenarioError> {
    let mut names = HashSet::new();
    for def in &config.listeners {
        if !names.insert(def.name.as_str()) {
            return Err(ScenarioError::DuplicateListener(def.name.clone()));
        }
    }

    for (index, step) in config.steps.iter().enumerate() {
        let step_no = index + 1;
        match (step.action, step.listener.as_deref()) {
            (StepAction::Dispatch, _) => {}
            (action, None) => {
                return Err(ScenarioError::MissingListener {
                    step: step_no,
                    action: action.as_str().to_string(),
                });
            }
            (_, Some(name)) if !names.contains(name) => {
                return Err(ScenarioError::UnknownListener {
                    step: step_no,
                    name: name.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, ListenerConfig, StepConfig};

    fn listener(name: &str) -> ListenerConfig {
        ListenerConfig {
            name: name.to_string(),
            message: None,
        }
    }

    fn step(action: StepAction, event: &str, listener: Option<&str>) -> StepConfig {
        StepConfig {
            action,
            event: event.to_string(),
            listener: listener.map(str::to_string),
        }
    }

    #[test]
    fn test_default_scenario_counts() {
        let report = run(&default_config().unwrap()).unwrap();

        let counts: Vec<(&str, usize)> = report
            .dispatches
            .iter()
            .map(|d| (d.event.as_str(), d.fired.len()))
            .collect();
        assert_eq!(counts, vec![("hello", 1), ("world", 2), ("hello", 0), ("world", 2)]);
        assert_eq!(report.total_invocations(), 5);

        let mut world = report.dispatches[1].fired.clone();
        world.sort();
        assert_eq!(world, vec!["anonymous", "log_world"]);
    }

    #[test]
    fn test_duplicate_listener_rejected() {
        let config = ScenarioConfig {
            listeners: vec![listener("a"), listener("a")],
            steps: vec![],
        };
        assert_eq!(
            run(&config).unwrap_err(),
            ScenarioError::DuplicateListener("a".to_string())
        );
    }

    #[test]
    fn test_unknown_listener_rejected() {
        let config = ScenarioConfig {
            listeners: vec![listener("a")],
            steps: vec![
                step(StepAction::Add, "tick", Some("a")),
                step(StepAction::Remove, "tick", Some("b")),
            ],
        };
        assert_eq!(
            run(&config).unwrap_err(),
            ScenarioError::UnknownListener {
                step: 2,
                name: "b".to_string()
            }
        );
    }

    #[test]
    fn test_missing_listener_rejected() {
        let config = ScenarioConfig {
            listeners: vec![],
            steps: vec![step(StepAction::Add, "tick", None)],
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.to_string(), "step 1: 'add' requires a listener");
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let config = ScenarioConfig {
            listeners: vec![],
            steps: vec![step(StepAction::Dispatch, "quiet", None)],
        };
        let report = run(&config).unwrap();
        assert_eq!(report.dispatches.len(), 1);
        assert!(report.dispatches[0].fired.is_empty());
    }
}

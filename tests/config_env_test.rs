//! Environment overrides live in their own test binary so the variables
//! cannot leak into other config tests. Tests here share one lock because
//! they all mutate the process environment.

use std::env;
use std::sync::Mutex;

use labkit::application::ApplicationError;
use labkit::config::{Settings, TreeStyle};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const ORDER: &str = "LABKIT_MAGIC__ORDER";
const STYLE: &str = "LABKIT_TREE__STYLE";

fn load_with(vars: &[(&str, &str)]) -> Result<Settings, ApplicationError> {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for (key, value) in vars {
        env::set_var(key, value);
    }
    let result = Settings::load(None);
    for (key, _) in vars {
        env::remove_var(key);
    }
    result
}

#[test]
fn given_env_vars_when_load_then_env_wins() {
    let settings = load_with(&[(ORDER, "9"), (STYLE, "box")]).expect("load settings");

    assert_eq!(settings.magic.order, 9);
    assert_eq!(settings.tree.style, TreeStyle::Box);
}

#[test]
fn given_non_numeric_order_when_load_then_config_error() {
    let err = load_with(&[(ORDER, "seven")]).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{err}");
}

#[test]
fn given_unknown_tree_style_when_load_then_config_error() {
    let err = load_with(&[(STYLE, "fancy")]).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{err}");
}

//! Template loading and filters

use std::collections::HashMap;
use tera::{Tera, Value};
use ua_fixture_sources_common::{FixtureError, Result};

/// Load all export templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("yaml_str", yaml_str_filter);

    tera.add_raw_template(
        "fixtures.yaml",
        include_str!("../templates/fixtures.yaml.tera"),
    )
    .map_err(|e| FixtureError::Export(format!("Failed to load fixtures.yaml template: {}", e)))?;

    tera.add_raw_template("summary.md", include_str!("../templates/summary.md.tera"))
        .map_err(|e| FixtureError::Export(format!("Failed to load summary.md template: {}", e)))?;

    Ok(tera)
}

/// Render any value as a YAML flow scalar
///
/// JSON scalars are valid YAML, and quoting through JSON keeps user agents
/// with `:` or `#` intact.
fn yaml_str_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::Array(_) | Value::Object(_) => {
            Err(tera::Error::msg("yaml_str filter expects a scalar"))
        }
        scalar => serde_json::to_string(scalar)
            .map(Value::String)
            .map_err(|e| tera::Error::msg(format!("yaml_str filter: {}", e))),
    }
}

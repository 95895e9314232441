//! `${VAR}` expansion of configuration strings.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value` in place.
///
/// Values without `${` are left alone, so literal `$` in footer text or
/// URLs needs no escaping. `field` is the dotted key reported on failure.
pub(crate) fn expand_field(field: &str, value: &mut String) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |name| {
        std::env::var(name).map(Some)
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: match e.cause {
            VarError::NotPresent => format!("${{{}}} not set", e.var_name),
            VarError::NotUnicode(_) => format!("${{{}}} is not valid UTF-8", e.var_name),
        },
    })
    .map(std::borrow::Cow::into_owned)?;

    *value = expanded;
    Ok(())
}

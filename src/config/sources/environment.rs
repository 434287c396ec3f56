//! Environment source: CWMERGE_<SECTION>__<KEY>, e.g. CWMERGE_MERGE__SHAPE_CONFLICT=fail

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "CWMERGE";

/// Add environment overrides to builder. Highest precedence of all settings sources.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}

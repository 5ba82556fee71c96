use align_config::AlignConfig;

use crate::bootstrap::Settings;
use crate::cli::{GlobalFlags, OverrideArgs};
use crate::output::output;

/// Handle `tcalign vars`.
pub fn handle(args: &OverrideArgs, config: &AlignConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !config.collection.is_configured() {
        tracing::warn!("collection is not fully configured; `tcalign run` will need --project-name and --snapshot");
    }

    let settings = Settings::resolve(config, args, config.output.paths_now());
    output(&settings, flags.format)
}

use crate::context::AppContext;
use crate::format;
use crate::output;
use libtagcheck::{Result, TagChecker};
use log::info;

/// Look up `tag` in the configured repository and emit the step output
pub fn handle_check(ctx: &AppContext, tag: &str) -> Result<()> {
    let repository = ctx.settings.repository.as_str();
    if !repository.contains('/') {
        format::warning(
            ctx.color,
            &format!("GITHUB_REPOSITORY '{}' is not in owner/name form", repository),
        );
    }

    let checker = TagChecker::from_settings(&ctx.settings, ctx.client_config.clone())?;
    info!("checking tag '{}' in {} via {}", tag, repository, checker.api_url());

    let status = checker.check(repository, tag)?;

    let stdout = std::io::stdout();
    output::emit(
        &mut stdout.lock(),
        ctx.settings.output_file.as_deref(),
        status.exists(),
    )
}

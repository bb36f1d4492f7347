use crate::cmd::ticket::render;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::ticket::reference_demo;

pub fn run(ctx: &AppContext) -> AppResult<String> {
    let outcomes = reference_demo(ctx)?;
    render(&outcomes, ctx.config.output)
}

//! List command - show installed packages

use anyhow::Result;
use bunkit_core::Operation;

use super::{dispatch_op, Context};

pub async fn execute(ctx: &Context) -> Result<i32> {
    dispatch_op(ctx, Operation::List, None).await
}

//! Install command - install all dependencies

use anyhow::Result;
use bunkit_core::Operation;

use super::{dispatch_op, Context};

pub async fn execute(ctx: &Context) -> Result<i32> {
    dispatch_op(ctx, Operation::Install, None).await
}

//! Init command - scaffold a manifest via bun's own init

use anyhow::Result;
use bunkit_core::Operation;

use super::{dispatch_op, Context};

pub async fn execute(ctx: &Context) -> Result<i32> {
    dispatch_op(ctx, Operation::Init, None).await
}

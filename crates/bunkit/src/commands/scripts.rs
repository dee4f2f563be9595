//! Scripts command - list the manifest's script entries

use anyhow::Result;
use bunkit_core::Error;
use bunkit_manifest::FieldValue;

use crate::output::{print_scripts_table, ScriptRow};

use super::Context;

pub async fn execute(ctx: &Context) -> Result<i32> {
    let manifest = ctx.manifest()?;

    let rows: Vec<ScriptRow> = match manifest.field("scripts") {
        FieldValue::Object(pairs) => pairs
            .into_iter()
            .map(|(name, definition)| ScriptRow {
                invocation: format!("{} {}", ctx.config.bun_bin, name),
                name,
                definition,
            })
            .collect(),
        FieldValue::Absent => return Err(Error::FieldMissing("scripts".to_string()).into()),
        FieldValue::Scalar(_) | FieldValue::Other => {
            return Err(Error::FieldShape {
                field: "scripts".to_string(),
                expected: "object",
            }
            .into())
        }
    };

    print_scripts_table(&rows);
    Ok(0)
}

//! Batch construction from scenario inputs.

use listsws_core::constants::ID_FIELD;

use super::command::{BatchCommand, CommandKind, FieldValue, OnError, UpdateBatch};
use crate::error::{ProtoError, ProtoResult};

/// Pairs each command kind with its field values into an [`UpdateBatch`].
///
/// ## Summary
/// Command order and count are preserved. For `Update` and `Delete` an `ID`
/// field value becomes the command's item id instead of a regular field.
/// `New` commands never carry an item id; the server assigns it. Field
/// names are not checked against any schema.
///
/// ## Errors
/// Returns `InvalidArgument` if `kinds` and `fields` differ in length, if a
/// command has more than one `ID` field, or if a `New` command has one.
pub fn build_update_batch(
    kinds: &[CommandKind],
    fields: Vec<Vec<FieldValue>>,
    on_error: OnError,
) -> ProtoResult<UpdateBatch> {
    if kinds.len() != fields.len() {
        return Err(ProtoError::InvalidArgument(format!(
            "{} commands but {} field lists",
            kinds.len(),
            fields.len()
        )));
    }

    let commands = kinds
        .iter()
        .zip(fields)
        .enumerate()
        .map(|(index, (&kind, values))| build_command(index + 1, kind, values))
        .collect::<ProtoResult<Vec<_>>>()?;

    tracing::debug!(commands = commands.len(), on_error = on_error.as_str(), "Built update batch");

    Ok(UpdateBatch {
        commands,
        on_error,
        list_version: None,
        view_name: None,
    })
}

fn build_command(method_id: usize, kind: CommandKind, values: Vec<FieldValue>) -> ProtoResult<BatchCommand> {
    let (mut ids, fields): (Vec<_>, Vec<_>) = values.into_iter().partition(|f| f.name == ID_FIELD);

    let item_id = match (kind, ids.len()) {
        (_, 0) => None,
        (CommandKind::New, _) => {
            return Err(ProtoError::InvalidArgument(format!(
                "method {method_id}: New command cannot set {ID_FIELD}"
            )));
        }
        (_, 1) => ids.pop().map(|f| f.value),
        (_, found) => {
            return Err(ProtoError::InvalidArgument(format!(
                "method {method_id}: {found} {ID_FIELD} fields"
            )));
        }
    };

    Ok(BatchCommand {
        kind,
        item_id,
        fields,
    })
}

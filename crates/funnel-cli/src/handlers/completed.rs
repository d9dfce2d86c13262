use crate::cli::CompletedAction;
use crate::context::CliContext;
use crate::output;
use funnel_domain::commands::SetCompletedList;

pub async fn handle(ctx: &mut CliContext, action: CompletedAction) -> anyhow::Result<()> {
    let board_id = match action {
        CompletedAction::Set { board_id, list_id } => {
            ctx.apply(Box::new(SetCompletedList {
                board_id: board_id.clone(),
                list_id: Some(list_id),
            }))
            .await?;
            board_id
        }
        CompletedAction::Clear { board_id } => {
            ctx.apply(Box::new(SetCompletedList {
                board_id: board_id.clone(),
                list_id: None,
            }))
            .await?;
            board_id
        }
        CompletedAction::Get { board_id } => {
            if ctx.store().board(&board_id).is_none() {
                output::output_error(&format!("Board not found: {}", board_id));
            }
            board_id
        }
    };

    output::output_success(serde_json::json!({
        "boardId": board_id,
        "completedListId": ctx.store().completed_list_id(&board_id),
    }))
}

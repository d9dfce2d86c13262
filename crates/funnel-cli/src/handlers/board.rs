use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use funnel_domain::commands::{
    AddBoard, DeleteBoard, DuplicateBoard, SetActiveBoard, ToggleBoardVisibility, UpdateBoard,
};
use funnel_domain::views;

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { title } => {
            let id = ctx.create(Box::new(AddBoard { title })).await?;
            output_board(ctx, &id)?;
        }
        BoardAction::List { all } => {
            let boards: Vec<_> = if all {
                ctx.store().boards().iter().collect()
            } else {
                views::visible_boards(ctx.store().state())
            };
            output::output_list(boards)?;
        }
        BoardAction::Get { id } => output_board(ctx, &id)?,
        BoardAction::Update { id, title } => {
            ctx.apply(Box::new(UpdateBoard {
                board_id: id.clone(),
                title,
            }))
            .await?;
            output_board(ctx, &id)?;
        }
        BoardAction::Delete { id } => {
            ctx.apply(Box::new(DeleteBoard {
                board_id: id.clone(),
            }))
            .await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
        BoardAction::Duplicate { id } => {
            let copy_id = ctx.create(Box::new(DuplicateBoard { board_id: id })).await?;
            output_board(ctx, &copy_id)?;
        }
        BoardAction::ToggleVisibility { id } => {
            ctx.apply(Box::new(ToggleBoardVisibility {
                board_id: id.clone(),
            }))
            .await?;
            output_board(ctx, &id)?;
        }
        BoardAction::Activate { id } => {
            ctx.apply(Box::new(SetActiveBoard { board_id: id })).await?;
            output::output_success(serde_json::json!({
                "activeBoard": ctx.store().active_board_id()
            }))?;
        }
    }
    Ok(())
}

fn output_board(ctx: &CliContext, id: &str) -> anyhow::Result<()> {
    match ctx.store().board(id) {
        Some(board) => output::output_success(board),
        None => output::output_error(&format!("Board not found: {}", id)),
    }
}

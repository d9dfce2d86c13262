use crate::cli::{ListAction, ListUpdateArgs};
use crate::context::CliContext;
use crate::output;
use funnel_domain::commands::{AddList, DeleteList, DuplicateList, UpdateList};
use funnel_domain::{FieldUpdate, ListUpdate};

pub async fn handle(ctx: &mut CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Create { board_id, title } => {
            let id = ctx
                .create(Box::new(AddList {
                    board_id: board_id.clone(),
                    title,
                }))
                .await?;
            output_list(ctx, &board_id, &id)?;
        }
        ListAction::List { board_id } => match ctx.store().board(&board_id) {
            Some(board) => output::output_list(board.lists.iter().collect::<Vec<_>>())?,
            None => output::output_error(&format!("Board not found: {}", board_id)),
        },
        ListAction::Update(args) => {
            let board_id = args.board_id.clone();
            let list_id = args.id.clone();
            ctx.apply(Box::new(build_update(args))).await?;
            output_list(ctx, &board_id, &list_id)?;
        }
        ListAction::Delete { board_id, id } => {
            ctx.apply(Box::new(DeleteList {
                board_id,
                list_id: id.clone(),
            }))
            .await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
        ListAction::Duplicate { board_id, id } => {
            let copy_id = ctx
                .create(Box::new(DuplicateList {
                    board_id: board_id.clone(),
                    list_id: id,
                }))
                .await?;
            output_list(ctx, &board_id, &copy_id)?;
        }
    }
    Ok(())
}

fn build_update(args: ListUpdateArgs) -> UpdateList {
    let color = if args.clear_color {
        FieldUpdate::Clear
    } else {
        FieldUpdate::set_if_some(args.color)
    };
    UpdateList {
        board_id: args.board_id,
        list_id: args.id,
        updates: ListUpdate {
            title: args.title,
            color,
        },
    }
}

fn output_list(ctx: &CliContext, board_id: &str, list_id: &str) -> anyhow::Result<()> {
    match ctx.store().list(board_id, list_id) {
        Some(list) => output::output_success(list),
        None => output::output_error(&format!("List not found: {}", list_id)),
    }
}

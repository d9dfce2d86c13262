use crate::cli::ChecklistAction;
use crate::context::CliContext;
use crate::output;
use funnel_domain::commands::{AddSubtask, ToggleSubtask};

pub async fn handle(ctx: &mut CliContext, action: ChecklistAction) -> anyhow::Result<()> {
    let (board_id, list_id, card_id) = match action {
        ChecklistAction::Add {
            board_id,
            list_id,
            card_id,
            title,
        } => {
            ctx.create(Box::new(AddSubtask {
                board_id: board_id.clone(),
                list_id: list_id.clone(),
                card_id: card_id.clone(),
                title,
            }))
            .await?;
            (board_id, list_id, card_id)
        }
        ChecklistAction::Toggle {
            board_id,
            list_id,
            card_id,
            id,
        } => {
            ctx.apply(Box::new(ToggleSubtask {
                board_id: board_id.clone(),
                list_id: list_id.clone(),
                card_id: card_id.clone(),
                subtask_id: id,
            }))
            .await?;
            (board_id, list_id, card_id)
        }
    };

    match ctx.store().card(&board_id, &list_id, &card_id) {
        Some(card) => output::output_list(card.checklist.iter().collect::<Vec<_>>()),
        None => output::output_error(&format!("Card not found: {}", card_id)),
    }
}

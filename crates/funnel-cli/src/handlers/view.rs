use crate::cli::ViewAction;
use crate::context::CliContext;
use crate::output;
use funnel_domain::views;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListSummary<'a> {
    id: &'a str,
    title: &'a str,
    card_count: usize,
    total: f64,
    completed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardSummary<'a> {
    board_id: &'a str,
    title: &'a str,
    total: f64,
    completion: f64,
    completed_list_id: Option<&'a str>,
    lists: Vec<ListSummary<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardSummary<'a> {
    card_id: &'a str,
    list_id: &'a str,
    title: &'a str,
    value: f64,
    checklist_done: usize,
    checklist_total: usize,
    progress: f64,
}

pub fn handle(ctx: &CliContext, action: ViewAction) -> anyhow::Result<()> {
    match action {
        ViewAction::Board { board_id } => {
            let Some(board) = ctx.store().board(&board_id) else {
                output::output_error(&format!("Board not found: {}", board_id));
            };
            let lists = board
                .lists
                .iter()
                .map(|list| ListSummary {
                    id: &list.id,
                    title: &list.title,
                    card_count: list.cards.len(),
                    total: views::list_total(list),
                    completed: views::is_completed_list(board, list),
                })
                .collect();
            output::output_success(BoardSummary {
                board_id: &board.id,
                title: &board.title,
                total: views::board_total(board),
                completion: views::board_completion(board),
                completed_list_id: board.completed_list().map(|l| l.id.as_str()),
                lists,
            })
        }
        ViewAction::Card { board_id, id } => {
            let Some((list_id, card)) = ctx.store().find_card(&board_id, &id) else {
                output::output_error(&format!("Card not found: {}", id));
            };
            output::output_success(CardSummary {
                card_id: &card.id,
                list_id,
                title: &card.title,
                value: card.value,
                checklist_done: card.completed_subtasks(),
                checklist_total: card.checklist.len(),
                progress: views::checklist_progress(card),
            })
        }
    }
}

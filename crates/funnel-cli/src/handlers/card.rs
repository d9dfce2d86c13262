use crate::cli::{CardAction, CardCreateArgs, CardUpdateArgs};
use crate::context::CliContext;
use crate::output;
use funnel_domain::commands::{AddCard, DeleteCard, DuplicateCard, MoveCard, UpdateCard};
use funnel_domain::{Card, CardDraft, CardUpdate, CustomField, FieldKind, FieldUpdate};
use serde::Serialize;
use std::collections::BTreeMap;

/// A card together with the list it currently sits in
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocatedCard<'a> {
    list_id: &'a str,
    #[serde(flatten)]
    card: &'a Card,
}

pub async fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create(args) => {
            let board_id = args.board_id.clone();
            let list_id = args.list_id.clone();
            let draft = build_draft(args)?;
            let id = ctx
                .create(Box::new(AddCard {
                    board_id: board_id.clone(),
                    list_id,
                    draft,
                }))
                .await?;
            output_card(ctx, &board_id, &id)?;
        }
        CardAction::Get { board_id, id } => output_card(ctx, &board_id, &id)?,
        CardAction::Update(args) => {
            let board_id = args.board_id.clone();
            let card_id = args.id.clone();
            let command = build_update(args)?;
            ctx.apply(Box::new(command)).await?;
            output_card(ctx, &board_id, &card_id)?;
        }
        CardAction::Delete {
            board_id,
            list_id,
            id,
        } => {
            ctx.apply(Box::new(DeleteCard {
                board_id,
                list_id,
                card_id: id.clone(),
            }))
            .await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
        CardAction::Duplicate {
            board_id,
            list_id,
            id,
        } => {
            let copy_id = ctx
                .create(Box::new(DuplicateCard {
                    board_id: board_id.clone(),
                    list_id,
                    card_id: id,
                }))
                .await?;
            output_card(ctx, &board_id, &copy_id)?;
        }
        CardAction::Move {
            board_id,
            from_list_id,
            to_list_id,
            id,
        } => {
            ctx.apply(Box::new(MoveCard {
                board_id: board_id.clone(),
                from_list_id,
                to_list_id,
                card_id: id.clone(),
            }))
            .await?;
            output_card(ctx, &board_id, &id)?;
        }
    }
    Ok(())
}

fn output_card(ctx: &CliContext, board_id: &str, card_id: &str) -> anyhow::Result<()> {
    match ctx.store().find_card(board_id, card_id) {
        Some((list_id, card)) => output::output_success(LocatedCard { list_id, card }),
        None => output::output_error(&format!("Card not found: {}", card_id)),
    }
}

fn build_draft(args: CardCreateArgs) -> anyhow::Result<CardDraft> {
    Ok(CardDraft {
        title: args.title,
        description: args.description,
        value: args.value.unwrap_or(0.0),
        phone: args.phone,
        responsible_id: args.responsible_id,
        scheduled_date: args.scheduled_date,
        scheduled_time: args.scheduled_time,
        tag_ids: args.tags,
        custom_fields: parse_fields(&args.fields)?,
        checklist: Vec::new(),
    })
}

fn build_update(args: CardUpdateArgs) -> anyhow::Result<UpdateCard> {
    let (scheduled_date, scheduled_time) = if args.clear_schedule {
        (FieldUpdate::Clear, FieldUpdate::Clear)
    } else {
        (
            FieldUpdate::set_if_some(args.scheduled_date),
            FieldUpdate::set_if_some(args.scheduled_time),
        )
    };
    let custom_fields = match args.fields {
        Some(fields) => Some(parse_fields(&fields)?),
        None => None,
    };

    Ok(UpdateCard {
        board_id: args.board_id,
        list_id: args.list_id,
        card_id: args.id,
        updates: CardUpdate {
            title: args.title,
            description: clearable(args.description, args.clear_description),
            value: args.value,
            phone: clearable(args.phone, args.clear_phone),
            responsible_id: clearable(args.responsible_id, args.clear_responsible),
            scheduled_date,
            scheduled_time,
            tag_ids: args.tags,
            custom_fields,
            checklist: None,
        },
    })
}

fn clearable(value: Option<String>, clear: bool) -> FieldUpdate<String> {
    if clear {
        FieldUpdate::Clear
    } else {
        FieldUpdate::set_if_some(value)
    }
}

fn parse_fields(entries: &[String]) -> anyhow::Result<BTreeMap<String, CustomField>> {
    entries.iter().map(|entry| parse_field(entry)).collect()
}

/// Parse `NAME:TYPE=VALUE`; the type defaults to text when omitted.
fn parse_field(entry: &str) -> anyhow::Result<(String, CustomField)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Custom field must look like NAME:TYPE=VALUE: {}", entry))?;
    let (name, kind) = match key.rsplit_once(':') {
        Some((name, kind)) => (name, kind.parse::<FieldKind>()?),
        None => (key, FieldKind::Text),
    };
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Custom field name is empty: {}", entry);
    }
    Ok((name.to_string(), CustomField::parse(kind, raw)?))
}

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "funnel")]
#[command(about = "Pipeline boards for tracking leads from the terminal", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Path to the boards data file (or set FUNNEL_FILE env var)
    #[arg(short, long, value_name = "FILE", env = "FUNNEL_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Card checklist operations
    Checklist(ChecklistCommand),
    /// Completed-list marker of a board
    Completed(CompletedCommand),
    /// Totals and progress figures
    View(ViewCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        #[arg(long)]
        title: String,
    },
    /// List boards
    List {
        /// Include hidden boards
        #[arg(long)]
        all: bool,
    },
    /// Get a specific board
    Get {
        #[arg(long)]
        id: String,
    },
    /// Rename a board
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Delete a board
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Copy a board with all its lists and cards
    Duplicate {
        #[arg(long)]
        id: String,
    },
    /// Flip the hidden flag of a board
    ToggleVisibility {
        #[arg(long)]
        id: String,
    },
    /// Select the active board, or clear the selection when no id is given
    Activate {
        #[arg(long)]
        id: Option<String>,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Append a new list to a board
    Create {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        title: String,
    },
    /// Show the lists of a board
    List {
        #[arg(long)]
        board_id: String,
    },
    /// Update a list
    Update(ListUpdateArgs),
    /// Delete a list and its cards
    Delete {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        id: String,
    },
    /// Copy a list with its cards to the end of the board
    Duplicate {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct ListUpdateArgs {
    #[arg(long)]
    pub board_id: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_color")]
    pub color: Option<String>,
    #[arg(long)]
    pub clear_color: bool,
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Append a new card to a list
    Create(CardCreateArgs),
    /// Get a specific card
    Get {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        id: String,
    },
    /// Update a card
    Update(CardUpdateArgs),
    /// Delete a card
    Delete {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        list_id: String,
        #[arg(long)]
        id: String,
    },
    /// Copy a card to the end of its list
    Duplicate {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        list_id: String,
        #[arg(long)]
        id: String,
    },
    /// Move a card to the end of another list
    Move {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        from_list_id: String,
        #[arg(long)]
        to_list_id: String,
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct CardCreateArgs {
    #[arg(long)]
    pub board_id: String,
    #[arg(long)]
    pub list_id: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite_value)]
    pub value: Option<f64>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub responsible_id: Option<String>,
    /// Scheduled date (YYYY-MM-DD)
    #[arg(long)]
    pub scheduled_date: Option<String>,
    /// Scheduled time (HH:MM)
    #[arg(long)]
    pub scheduled_time: Option<String>,
    /// Tag id, repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Custom field as NAME:TYPE=VALUE, repeatable
    #[arg(long = "field")]
    pub fields: Vec<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub board_id: String,
    #[arg(long)]
    pub list_id: String,
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite_value)]
    pub value: Option<f64>,
    #[arg(long, conflicts_with = "clear_phone")]
    pub phone: Option<String>,
    #[arg(long)]
    pub clear_phone: bool,
    #[arg(long, conflicts_with = "clear_responsible")]
    pub responsible_id: Option<String>,
    #[arg(long)]
    pub clear_responsible: bool,
    #[arg(long, conflicts_with = "clear_schedule")]
    pub scheduled_date: Option<String>,
    #[arg(long, conflicts_with = "clear_schedule")]
    pub scheduled_time: Option<String>,
    /// Remove both scheduled date and time
    #[arg(long)]
    pub clear_schedule: bool,
    /// Replace the tag ids, repeatable
    #[arg(long = "tag")]
    pub tags: Option<Vec<String>>,
    /// Replace the custom fields with NAME:TYPE=VALUE entries, repeatable
    #[arg(long = "field")]
    pub fields: Option<Vec<String>>,
}

// Checklist commands
#[derive(Args)]
pub struct ChecklistCommand {
    #[command(subcommand)]
    pub action: ChecklistAction,
}

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Append an unchecked item to a card's checklist
    Add {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        list_id: String,
        #[arg(long)]
        card_id: String,
        #[arg(long)]
        title: String,
    },
    /// Flip an item between done and not done
    Toggle {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        list_id: String,
        #[arg(long)]
        card_id: String,
        #[arg(long)]
        id: String,
    },
}

// Completed-list commands
#[derive(Args)]
pub struct CompletedCommand {
    #[command(subcommand)]
    pub action: CompletedAction,
}

#[derive(Subcommand)]
pub enum CompletedAction {
    /// Mark a list as the board's completed list
    Set {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        list_id: String,
    },
    /// Remove the completed-list marker
    Clear {
        #[arg(long)]
        board_id: String,
    },
    /// Show the current completed list, if any
    Get {
        #[arg(long)]
        board_id: String,
    },
}

// View commands
#[derive(Args)]
pub struct ViewCommand {
    #[command(subcommand)]
    pub action: ViewAction,
}

#[derive(Subcommand)]
pub enum ViewAction {
    /// Value totals per list and for the whole board, plus completion
    Board {
        #[arg(long)]
        board_id: String,
    },
    /// Checklist progress of a card
    Card {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        id: String,
    },
}

/// Card values must be finite numbers; NaN and infinity have no JSON form.
fn parse_finite_value(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_must_be_finite() {
        assert_eq!(parse_finite_value("1500.5"), Ok(1500.5));
        assert_eq!(parse_finite_value("-20"), Ok(-20.0));
        assert!(parse_finite_value("NaN").is_err());
        assert!(parse_finite_value("inf").is_err());
        assert!(parse_finite_value("-infinity").is_err());
        assert!(parse_finite_value("lots").is_err());
    }
}

//! State container for boards and the active-board selection.
//!
//! Every operation runs to completion synchronously. Operations that name an
//! entity return `None` when it does not exist and leave the state untouched,
//! so a stale id from the UI never turns into a crash. Callers that don't care
//! can ignore the `Option`.

use funnel_core::{IdGenerator, UuidGenerator};

use crate::{
    Board, BoardId, BoardState, Card, CardDraft, CardId, CardUpdate, List, ListId, ListUpdate,
    SubtaskId,
};

pub struct BoardStore {
    state: BoardState,
    ids: Box<dyn IdGenerator>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    pub fn new() -> Self {
        Self::from_state(BoardState::default())
    }

    pub fn from_state(state: BoardState) -> Self {
        Self::with_id_generator(state, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(state: BoardState, ids: Box<dyn IdGenerator>) -> Self {
        Self { state, ids }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn into_state(self) -> BoardState {
        self.state
    }

    /// Swap in a freshly loaded state, keeping the id generator.
    pub fn replace_state(&mut self, state: BoardState) {
        self.state = state;
    }

    pub fn boards(&self) -> &[Board] {
        &self.state.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.state.boards.iter().find(|b| b.id == board_id)
    }

    pub fn active_board_id(&self) -> Option<&str> {
        self.state.active_board.as_deref()
    }

    pub fn active_board(&self) -> Option<&Board> {
        self.active_board_id().and_then(|id| self.board(id))
    }

    pub fn list(&self, board_id: &str, list_id: &str) -> Option<&List> {
        self.board(board_id)?.list(list_id)
    }

    pub fn card(&self, board_id: &str, list_id: &str, card_id: &str) -> Option<&Card> {
        self.list(board_id, list_id)?.card(card_id)
    }

    /// Locate a card anywhere on a board, returning its list id too.
    pub fn find_card(&self, board_id: &str, card_id: &str) -> Option<(&ListId, &Card)> {
        self.board(board_id)?
            .lists
            .iter()
            .find_map(|l| l.card(card_id).map(|c| (&l.id, c)))
    }

    // Boards

    pub fn add_board(&mut self, title: String) -> BoardId {
        let board = Board::new(self.ids.as_ref(), title);
        let id = board.id.clone();
        tracing::debug!("Adding board {} '{}'", id, board.title);
        self.state.boards.push(board);
        id
    }

    pub fn update_board(&mut self, board_id: &str, title: String) -> Option<()> {
        self.board_mut(board_id)?.update_title(title);
        Some(())
    }

    pub fn delete_board(&mut self, board_id: &str) -> Option<()> {
        let index = self.state.boards.iter().position(|b| b.id == board_id)?;
        self.state.boards.remove(index);
        if self.state.active_board.as_deref() == Some(board_id) {
            tracing::debug!("Deleted board {} was active, clearing selection", board_id);
            self.state.active_board = None;
        }
        Some(())
    }

    pub fn duplicate_board(&mut self, board_id: &str) -> Option<BoardId> {
        let copy = self.board(board_id)?.duplicate(self.ids.as_ref());
        let id = copy.id.clone();
        self.state.boards.push(copy);
        Some(id)
    }

    /// Flip the hidden flag and return the new value.
    pub fn toggle_board_visibility(&mut self, board_id: &str) -> Option<bool> {
        Some(self.board_mut(board_id)?.toggle_hidden())
    }

    /// Select the board being viewed. `None` clears the selection; an unknown
    /// id leaves it unchanged.
    pub fn set_active_board(&mut self, board_id: Option<&str>) -> Option<()> {
        match board_id {
            Some(id) => {
                self.board(id)?;
                self.state.active_board = Some(id.to_string());
            }
            None => self.state.active_board = None,
        }
        Some(())
    }

    // Lists

    pub fn add_list(&mut self, board_id: &str, title: String) -> Option<ListId> {
        let list = List::new(self.ids.as_ref(), title);
        let id = list.id.clone();
        self.board_mut(board_id)?.lists.push(list);
        Some(id)
    }

    pub fn update_list(&mut self, board_id: &str, list_id: &str, updates: ListUpdate) -> Option<()> {
        self.list_mut(board_id, list_id)?.update(updates);
        Some(())
    }

    /// Remove a list and its cards. A completed-list marker pointing at it is
    /// left in place and simply stops resolving.
    pub fn delete_list(&mut self, board_id: &str, list_id: &str) -> Option<()> {
        let board = self.board_mut(board_id)?;
        let index = board.lists.iter().position(|l| l.id == list_id)?;
        board.lists.remove(index);
        Some(())
    }

    pub fn duplicate_list(&mut self, board_id: &str, list_id: &str) -> Option<ListId> {
        let copy = self.list(board_id, list_id)?.duplicate(self.ids.as_ref());
        let id = copy.id.clone();
        self.board_mut(board_id)?.lists.push(copy);
        Some(id)
    }

    // Cards

    pub fn add_card(&mut self, board_id: &str, list_id: &str, draft: CardDraft) -> Option<CardId> {
        let ids = self.ids.as_ref();
        let list = self
            .state
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)?
            .list_mut(list_id)?;
        Some(list.push_card(Card::new(ids, draft)))
    }

    pub fn update_card(
        &mut self,
        board_id: &str,
        list_id: &str,
        card_id: &str,
        updates: CardUpdate,
    ) -> Option<()> {
        self.card_mut(board_id, list_id, card_id)?.update(updates);
        Some(())
    }

    pub fn delete_card(&mut self, board_id: &str, list_id: &str, card_id: &str) -> Option<()> {
        self.list_mut(board_id, list_id)?.take_card(card_id).map(|_| ())
    }

    pub fn duplicate_card(&mut self, board_id: &str, list_id: &str, card_id: &str) -> Option<CardId> {
        let copy = self
            .card(board_id, list_id, card_id)?
            .duplicate(self.ids.as_ref());
        Some(self.list_mut(board_id, list_id)?.push_card(copy))
    }

    /// Move a card to the end of another list on the same board.
    ///
    /// Reordering inside one list is not supported: `from == to` leaves the
    /// state untouched and returns `Some(())` as long as the card exists.
    pub fn move_card(
        &mut self,
        board_id: &str,
        from_list_id: &str,
        to_list_id: &str,
        card_id: &str,
    ) -> Option<()> {
        if from_list_id == to_list_id {
            tracing::debug!("Ignoring move of card {} within list {}", card_id, from_list_id);
            return self.card(board_id, from_list_id, card_id).map(|_| ());
        }

        let board = self.board_mut(board_id)?;
        if !board.has_list(to_list_id) {
            return None;
        }
        let card = board.list_mut(from_list_id)?.take_card(card_id)?;
        board.list_mut(to_list_id)?.push_card(card);
        Some(())
    }

    pub fn add_subtask(
        &mut self,
        board_id: &str,
        list_id: &str,
        card_id: &str,
        title: String,
    ) -> Option<SubtaskId> {
        let ids = self.ids.as_ref();
        let card = self
            .state
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)?
            .list_mut(list_id)?
            .card_mut(card_id)?;
        Some(card.add_subtask(ids, title))
    }

    pub fn toggle_subtask(
        &mut self,
        board_id: &str,
        list_id: &str,
        card_id: &str,
        subtask_id: &str,
    ) -> Option<bool> {
        self.card_mut(board_id, list_id, card_id)?
            .toggle_subtask(subtask_id)
    }

    // Completed list

    /// Mark a list as the board's "done" column, or clear the marker with
    /// `None`. A list id the board does not have is refused.
    pub fn set_completed_list(&mut self, board_id: &str, list_id: Option<&str>) -> Option<()> {
        let board = self.board_mut(board_id)?;
        if let Some(id) = list_id {
            if !board.has_list(id) {
                return None;
            }
        }
        board.set_completed_list(list_id.map(str::to_string));
        Some(())
    }

    /// The board's completed list id, `None` when unset or stale.
    pub fn completed_list_id(&self, board_id: &str) -> Option<&str> {
        self.board(board_id)?
            .completed_list()
            .map(|l| l.id.as_str())
    }

    fn board_mut(&mut self, board_id: &str) -> Option<&mut Board> {
        let board = self.state.boards.iter_mut().find(|b| b.id == board_id);
        if board.is_none() {
            tracing::debug!("Board {} not found", board_id);
        }
        board
    }

    fn list_mut(&mut self, board_id: &str, list_id: &str) -> Option<&mut List> {
        self.board_mut(board_id)?.list_mut(list_id)
    }

    fn card_mut(&mut self, board_id: &str, list_id: &str, card_id: &str) -> Option<&mut Card> {
        self.list_mut(board_id, list_id)?.card_mut(card_id)
    }
}

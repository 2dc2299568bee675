//! The two research lists of a profile plus a single staged change.

use std::collections::HashSet;

use lab_core::CoreError;
use lab_core::entities::ResearchItem;
use lab_core::enums::ResearchList;
use lab_core::ids::{PREFIX_RESEARCH_ITEM, generate_id};

use crate::draft::ResearchDraft;

/// At most one change is staged at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    /// A new item that has not been placed in a list yet.
    New(ResearchDraft),
    Edit {
        id: String,
        list: ResearchList,
        draft: ResearchDraft,
    },
    /// Awaiting confirmation before removal.
    Delete { id: String, list: ResearchList },
}

impl Pending {
    const fn describe(&self) -> &'static str {
        match self {
            Self::New(_) => "a new item draft",
            Self::Edit { .. } => "an edit",
            Self::Delete { .. } => "a pending delete",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchCollection {
    ongoing: Vec<ResearchItem>,
    past: Vec<ResearchItem>,
    pending: Option<Pending>,
}

impl ResearchCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt lists loaded from elsewhere. Items without an id, or repeating
    /// an id already seen in either list, get a fresh one.
    ///
    /// Titles are not re-validated here; the lists are taken as stored.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if id generation fails.
    pub fn from_lists(
        mut ongoing: Vec<ResearchItem>,
        mut past: Vec<ResearchItem>,
    ) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for item in ongoing.iter_mut().chain(past.iter_mut()) {
            while item.id.is_empty() || seen.contains(&item.id) {
                item.id = generate_id(PREFIX_RESEARCH_ITEM)?;
            }
            seen.insert(item.id.clone());
        }
        Ok(Self {
            ongoing,
            past,
            pending: None,
        })
    }

    #[must_use]
    pub fn items(&self, list: ResearchList) -> &[ResearchItem] {
        match list {
            ResearchList::Ongoing => &self.ongoing,
            ResearchList::Past => &self.past,
        }
    }

    const fn items_mut(&mut self, list: ResearchList) -> &mut Vec<ResearchItem> {
        match list {
            ResearchList::Ongoing => &mut self.ongoing,
            ResearchList::Past => &mut self.past,
        }
    }

    /// Current list and position of the item with `id`.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<(ResearchList, usize)> {
        ResearchList::ALL.into_iter().find_map(|list| {
            self.items(list)
                .iter()
                .position(|item| item.id == id)
                .map(|index| (list, index))
        })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ResearchItem> {
        self.position_of(id)
            .map(|(list, index)| &self.items(list)[index])
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Clone both lists out, e.g. to build a profile payload.
    #[must_use]
    pub fn to_lists(&self) -> (Vec<ResearchItem>, Vec<ResearchItem>) {
        (self.ongoing.clone(), self.past.clone())
    }

    // -- direct add ---------------------------------------------------------

    /// Append `item` to `list`. Returns the id it was stored under.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is empty; the list is
    /// left unchanged.
    pub fn add(&mut self, list: ResearchList, mut item: ResearchItem) -> Result<String, CoreError> {
        item.validate()?;
        item.ensure_id()?;
        while self.position_of(&item.id).is_some() {
            item.id = generate_id(PREFIX_RESEARCH_ITEM)?;
        }
        let id = item.id.clone();
        tracing::debug!(%id, list = %list, "research item added");
        self.items_mut(list).push(item);
        Ok(id)
    }

    // -- staged new item ----------------------------------------------------

    /// Stage an empty draft for a new item.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` if another change is staged.
    pub fn begin_new(&mut self) -> Result<&mut ResearchDraft, CoreError> {
        self.ensure_idle()?;
        self.pending = Some(Pending::New(ResearchDraft::default()));
        self.draft_mut()
            .ok_or_else(|| CoreError::InvalidState("new draft was not staged".into()))
    }

    pub fn new_draft_mut(&mut self) -> Option<&mut ResearchDraft> {
        match &mut self.pending {
            Some(Pending::New(draft)) => Some(draft),
            _ => None,
        }
    }

    /// Place the staged new item at the end of `list`.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if no new item is staged.
    /// - `CoreError::Validation` if its title is empty; the draft stays
    ///   staged so it can be corrected.
    pub fn commit_new(&mut self, list: ResearchList) -> Result<String, CoreError> {
        let Some(Pending::New(draft)) = &self.pending else {
            return Err(CoreError::InvalidState("no new item is staged".into()));
        };
        let item = draft.to_item("")?;
        self.pending = None;
        self.add(list, item)
    }

    // -- staged edit --------------------------------------------------------

    /// Snapshot the item at `index` in `list` into a draft.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if another change is staged.
    /// - `CoreError::NotFound` if `index` is out of range.
    pub fn edit(&mut self, index: usize, list: ResearchList) -> Result<&mut ResearchDraft, CoreError> {
        let id = self.id_at(index, list)?;
        self.edit_by_id(&id)
    }

    /// Snapshot the item with `id` into a draft.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if another change is staged.
    /// - `CoreError::NotFound` if no item has `id`.
    pub fn edit_by_id(&mut self, id: &str) -> Result<&mut ResearchDraft, CoreError> {
        self.ensure_idle()?;
        let (list, index) = self.locate(id)?;
        let draft = ResearchDraft::from_item(&self.items(list)[index]);
        self.pending = Some(Pending::Edit {
            id: id.to_string(),
            list,
            draft,
        });
        self.draft_mut()
            .ok_or_else(|| CoreError::InvalidState("edit was not staged".into()))
    }

    /// The staged draft, new or edit.
    #[must_use]
    pub const fn draft(&self) -> Option<&ResearchDraft> {
        match &self.pending {
            Some(Pending::New(draft) | Pending::Edit { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    pub const fn draft_mut(&mut self) -> Option<&mut ResearchDraft> {
        match &mut self.pending {
            Some(Pending::New(draft) | Pending::Edit { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    /// Replace the edited item with the draft, keeping its id and position.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if no edit is staged.
    /// - `CoreError::Validation` if the draft title is empty; the draft stays
    ///   staged.
    /// - `CoreError::NotFound` if the item disappeared; the draft is dropped.
    pub fn commit_edit(&mut self) -> Result<(), CoreError> {
        let Some(Pending::Edit { id, draft, .. }) = &self.pending else {
            return Err(CoreError::InvalidState("no edit is staged".into()));
        };
        let item = draft.to_item(id)?;
        let located = self.locate(id);
        self.pending = None;
        let (list, index) = located?;
        tracing::debug!(id = %item.id, list = %list, "research item updated");
        self.items_mut(list)[index] = item;
        Ok(())
    }

    /// Drop a staged new item or edit. Returns `false` if there was none.
    ///
    /// A staged delete is left alone; use [`Self::cancel_delete`].
    pub fn discard(&mut self) -> bool {
        if self.draft().is_some() {
            self.pending = None;
            true
        } else {
            false
        }
    }

    // -- staged delete ------------------------------------------------------

    /// Stage removal of the item at `index` in `list`.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if another change is staged.
    /// - `CoreError::NotFound` if `index` is out of range.
    pub fn request_delete(&mut self, index: usize, list: ResearchList) -> Result<(), CoreError> {
        let id = self.id_at(index, list)?;
        self.request_delete_by_id(&id)
    }

    /// Stage removal of the item with `id`.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if another change is staged.
    /// - `CoreError::NotFound` if no item has `id`.
    pub fn request_delete_by_id(&mut self, id: &str) -> Result<(), CoreError> {
        self.ensure_idle()?;
        let (list, _) = self.locate(id)?;
        self.pending = Some(Pending::Delete {
            id: id.to_string(),
            list,
        });
        Ok(())
    }

    /// The item a staged delete would remove.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&ResearchItem> {
        match &self.pending {
            Some(Pending::Delete { id, .. }) => self.get(id),
            _ => None,
        }
    }

    /// Remove the item staged for deletion. The rest keep their order.
    ///
    /// # Errors
    ///
    /// - `CoreError::InvalidState` if no delete is staged.
    /// - `CoreError::NotFound` if the item is already gone.
    pub fn confirm_delete(&mut self) -> Result<ResearchItem, CoreError> {
        let Some(Pending::Delete { id, .. }) = self.pending.take() else {
            return Err(CoreError::InvalidState("no delete is staged".into()));
        };
        let (list, index) = self.locate(&id)?;
        tracing::debug!(%id, list = %list, "research item removed");
        Ok(self.items_mut(list).remove(index))
    }

    /// Clear a staged delete without touching the lists.
    pub fn cancel_delete(&mut self) -> bool {
        if matches!(self.pending, Some(Pending::Delete { .. })) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    // -- helpers ------------------------------------------------------------

    fn ensure_idle(&self) -> Result<(), CoreError> {
        match &self.pending {
            None => Ok(()),
            Some(pending) => Err(CoreError::InvalidState(format!(
                "{} is already in progress",
                pending.describe()
            ))),
        }
    }

    fn id_at(&self, index: usize, list: ResearchList) -> Result<String, CoreError> {
        self.items(list)
            .get(index)
            .map(|item| item.id.clone())
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "research_item".into(),
                id: format!("{list}[{index}]"),
            })
    }

    fn locate(&self, id: &str) -> Result<(ResearchList, usize), CoreError> {
        self.position_of(id).ok_or_else(|| CoreError::NotFound {
            entity_type: "research_item".into(),
            id: id.to_string(),
        })
    }
}
